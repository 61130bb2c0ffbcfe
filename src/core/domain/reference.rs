//! Secret reference types.
//!
//! A reference names a secret in the store and, for JSON secrets, the field
//! to pull out of it.

use serde::Deserialize;

use crate::core::types::{JsonKey, SecretId};

/// Reference to a whole secret by ID.
///
/// Deserialized from a bare string so config entries read `NAME = "secret-id"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct SecretReference {
    secret_id: SecretId,
}

impl SecretReference {
    /// Create a reference to the given secret ID or ARN
    pub fn new(secret_id: impl Into<SecretId>) -> Self {
        Self {
            secret_id: secret_id.into(),
        }
    }

    /// Secret ID or ARN
    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }
}

/// Reference to one top-level field of a JSON object secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct JsonKeySecretReference {
    secret_id: SecretId,
    json_key: JsonKey,
}

impl JsonKeySecretReference {
    /// Create a reference to `json_key` inside the given secret
    pub fn new(secret_id: impl Into<SecretId>, json_key: impl Into<JsonKey>) -> Self {
        Self {
            secret_id: secret_id.into(),
            json_key: json_key.into(),
        }
    }

    /// Secret ID or ARN
    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    /// Field name looked up in the decoded object
    pub fn json_key(&self) -> &str {
        &self.json_key
    }
}

impl std::fmt::Display for SecretReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.secret_id)
    }
}

impl std::fmt::Display for JsonKeySecretReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.secret_id, self.json_key)
    }
}
