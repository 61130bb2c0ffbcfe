//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An environment variable name (e.g., DATABASE_URL, API_KEY).
///
/// Must be a valid environment variable name.
pub type EnvVarName = String;

/// A secret identifier in the store: a secret name or a full ARN.
pub type SecretId = String;

/// A top-level field name inside a JSON secret.
pub type JsonKey = String;
