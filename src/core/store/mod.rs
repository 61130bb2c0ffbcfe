//! Secret store access.
//!
//! Abstracts the remote secret store behind a single blocking fetch so the
//! resolver does not depend on any SDK.
//!
//! ## Backends
//!
//! - **AWS Secrets Manager**: Feature-gated (`aws`, on by default).
//! - **Memory**: Always available. Used by tests and, with the `test-store`
//!   feature, by the binary.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `gcp.rs`, `vault.rs`)
//! 3. Select it in `backend::connect`

use crate::core::domain::SecretValue;
use crate::error::StoreError;

mod backend;
mod memory;

#[cfg(feature = "aws")]
pub mod aws;

pub use backend::connect;
pub use memory::MemoryStore;

/// Secret store trait.
///
/// One call is one remote request; implementations must not cache.
pub trait SecretStore {
    /// Fetch the current value of a secret.
    ///
    /// # Arguments
    ///
    /// * `secret_id` - Secret name or ARN
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, `StoreError::AccessDenied`,
    /// `StoreError::Transient` or `StoreError::Rejected`.
    fn get_secret(&self, secret_id: &str) -> Result<SecretValue, StoreError>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}
