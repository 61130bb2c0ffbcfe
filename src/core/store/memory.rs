//! In-memory secret store.
//!
//! Holds secrets and canned failures in a map and records every fetch, so
//! callers can check exactly which requests were made.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::trace;

use super::SecretStore;
use crate::core::domain::SecretValue;
use crate::core::types::SecretId;
use crate::error::StoreError;

/// Map-backed secret store.
///
/// Unknown IDs fail with `StoreError::NotFound`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<SecretId, Result<SecretValue, StoreError>>,
    fetches: RefCell<Vec<SecretId>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a secret with a string payload
    pub fn with_string(mut self, secret_id: &str, value: &str) -> Self {
        self.insert(secret_id, SecretValue::from_string(value));
        self
    }

    /// Store a secret with a binary payload
    pub fn with_binary(mut self, secret_id: &str, value: &[u8]) -> Self {
        self.insert(secret_id, SecretValue::from_binary(value));
        self
    }

    /// Make every fetch of `secret_id` fail with `error`
    pub fn with_error(mut self, secret_id: &str, error: StoreError) -> Self {
        self.entries.insert(secret_id.to_string(), Err(error));
        self
    }

    /// Store an arbitrary value
    pub fn insert(&mut self, secret_id: &str, value: SecretValue) {
        self.entries.insert(secret_id.to_string(), Ok(value));
    }

    /// IDs fetched so far, in call order
    pub fn fetches(&self) -> Vec<SecretId> {
        self.fetches.borrow().clone()
    }

    /// Number of fetches of one ID
    pub fn fetch_count(&self, secret_id: &str) -> usize {
        self.fetches
            .borrow()
            .iter()
            .filter(|id| id.as_str() == secret_id)
            .count()
    }
}

impl SecretStore for MemoryStore {
    fn get_secret(&self, secret_id: &str) -> Result<SecretValue, StoreError> {
        trace!(secret_id, "memory store fetch");
        self.fetches.borrow_mut().push(secret_id.to_string());

        match self.entries.get(secret_id) {
            Some(entry) => entry.clone(),
            None => Err(StoreError::NotFound(secret_id.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(feature = "test-store")]
mod seed {
    //! Seeding from a JSON file, for CLI integration tests.
    //!
    //! ```json
    //! {
    //!   "prod/db": { "string": "{\"user\":\"app\"}" },
    //!   "prod/tls": { "binary": "AAEC" },
    //!   "prod/locked": { "error": "access_denied" }
    //! }
    //! ```

    use base64::Engine;
    use serde::Deserialize;
    use std::collections::HashMap;
    use tracing::debug;

    use super::MemoryStore;
    use crate::core::constants::TEST_STORE_ENV;
    use crate::core::domain::SecretValue;
    use crate::error::StoreError;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct SeedEntry {
        #[serde(default)]
        string: Option<String>,
        /// Base64 (standard alphabet)
        #[serde(default)]
        binary: Option<String>,
        /// One of `not_found`, `access_denied`, `transient`, `rejected`
        #[serde(default)]
        error: Option<String>,
    }

    impl MemoryStore {
        /// Build a store from the JSON file named by `SMENV_TEST_STORE`.
        ///
        /// A missing variable yields an empty store.
        pub fn from_env() -> Result<Self, StoreError> {
            let path = match std::env::var(TEST_STORE_ENV) {
                Ok(p) => p,
                Err(_) => return Ok(Self::new()),
            };
            debug!(path = %path, "seeding memory store");
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| StoreError::Connect(format!("failed to read {}: {}", path, e)))?;
            Self::from_json(&contents)
        }

        /// Build a store from seed JSON.
        pub fn from_json(contents: &str) -> Result<Self, StoreError> {
            let seed: HashMap<String, SeedEntry> = serde_json::from_str(contents)
                .map_err(|e| StoreError::Connect(format!("invalid store seed: {}", e)))?;

            let mut store = Self::new();
            for (id, entry) in seed {
                if let Some(kind) = entry.error {
                    let message = "seeded failure".to_string();
                    let error = match kind.as_str() {
                        "not_found" => StoreError::NotFound(id.clone()),
                        "access_denied" => StoreError::AccessDenied {
                            secret_id: id.clone(),
                            message,
                        },
                        "transient" => StoreError::Transient {
                            secret_id: id.clone(),
                            message,
                        },
                        "rejected" => StoreError::Rejected {
                            secret_id: id.clone(),
                            message,
                        },
                        other => {
                            return Err(StoreError::Connect(format!(
                                "unknown seeded error kind for {}: {}",
                                id, other
                            )))
                        }
                    };
                    store = store.with_error(&id, error);
                    continue;
                }

                let binary = entry
                    .binary
                    .map(|b| base64::engine::general_purpose::STANDARD.decode(b))
                    .transpose()
                    .map_err(|e| {
                        StoreError::Connect(format!("invalid base64 for {}: {}", id, e))
                    })?;
                store.insert(&id, SecretValue::new(entry.string, binary));
            }
            Ok(store)
        }
    }
}
