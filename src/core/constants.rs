//! Constants used throughout smenv.
//!
//! Centralizes magic strings and configuration values.

/// Default configuration file name (.smenv.toml).
pub const CONFIG_FILE: &str = ".smenv.toml";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SMENV_LOG";

/// Environment variable naming the JSON file that seeds the test store.
#[cfg(feature = "test-store")]
pub const TEST_STORE_ENV: &str = "SMENV_TEST_STORE";

/// Separator between secret ID and JSON key in `--json-key` style flags.
pub const JSON_KEY_SEPARATOR: char = '#';
