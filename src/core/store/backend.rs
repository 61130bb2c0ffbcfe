//! Backend selection for the secret store.
//!
//! Building the client is the only step that may abort a run before any
//! secret is resolved.

use tracing::debug;

use super::SecretStore;
use crate::core::config::Config;
use crate::error::Result;

/// Build the secret store client for this configuration.
///
/// - `test-store` builds: an in-memory store seeded from `SMENV_TEST_STORE`
/// - `aws` builds: AWS Secrets Manager using the default credential chain
///   with the configured profile and region
///
/// # Errors
///
/// Returns `StoreError::Connect` if the client cannot be built, or
/// `StoreError::Unavailable` if no backend is compiled in.
pub fn connect(config: &Config) -> Result<Box<dyn SecretStore>> {
    debug!(
        profile = config.profile.as_deref().unwrap_or("<default>"),
        region = config.region.as_deref().unwrap_or("<default>"),
        "connecting to secret store"
    );

    #[cfg(feature = "test-store")]
    {
        let store = super::MemoryStore::from_env()?;
        return Ok(Box::new(store));
    }

    #[cfg(all(not(feature = "test-store"), feature = "aws"))]
    {
        let store = super::aws::AwsSecretsManager::connect(
            config.profile.as_deref(),
            config.region.as_deref(),
        )?;
        return Ok(Box::new(store));
    }

    #[cfg(all(not(feature = "test-store"), not(feature = "aws")))]
    {
        Err(crate::error::StoreError::Unavailable(
            "rebuild with: cargo install smenv --features aws",
        )
        .into())
    }
}
