//! Configuration file management.
//!
//! Reads and validates `.smenv.toml` and merges command-line assignments
//! on top of it.
//!
//! ```toml
//! profile = "prod"
//! region = "us-east-1"
//!
//! [secret_strings]
//! DATABASE_PASSWORD = "prod/db/password"
//!
//! [secret_binaries]
//! TLS_KEY = "prod/tls/key"
//!
//! [secret_json_key_strings]
//! DATABASE_USER = { secret_id = "prod/db", json_key = "username" }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::{Category, JsonKeySecretReference, SecretReference};
use crate::core::types::EnvVarName;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Resolution configuration.
///
/// Each category table maps environment variable names to references.
/// Tables keep file order, which is the order entries resolve in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Shared credentials profile used to authenticate
    #[serde(default)]
    pub profile: Option<String>,
    /// Region of the secret store
    #[serde(default)]
    pub region: Option<String>,
    /// String payload, used as-is
    #[serde(default)]
    pub secret_strings: IndexMap<EnvVarName, SecretReference>,
    /// Binary payload, base64-encoded
    #[serde(default)]
    pub secret_binaries: IndexMap<EnvVarName, SecretReference>,
    /// Binary payload, used as text
    #[serde(default)]
    pub secret_binary_strings: IndexMap<EnvVarName, SecretReference>,
    /// One JSON field, rendered as plain text
    #[serde(default)]
    pub secret_json_key_strings: IndexMap<EnvVarName, JsonKeySecretReference>,
    /// One JSON field, rendered as JSON
    #[serde(default)]
    pub secret_json_keys: IndexMap<EnvVarName, JsonKeySecretReference>,
}

impl Config {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the default configuration file in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// `.smenv.toml` is read if present, and an empty config is returned
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit file,
    /// `ConfigError::Parse` for malformed TOML, or a validation error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound(path).into());
            }
            debug!(path = %path.display(), "no config file, starting empty");
            return Ok(Self::new());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config = Self::from_toml(&contents)?;

        debug!(references = config.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Total number of secret references across all categories
    pub fn len(&self) -> usize {
        self.secret_strings.len()
            + self.secret_binaries.len()
            + self.secret_binary_strings.len()
            + self.secret_json_key_strings.len()
            + self.secret_json_keys.len()
    }

    /// Whether no secret references are configured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an entry from its command-line form.
    ///
    /// Plain categories take `NAME=SECRET_ID`; JSON categories take
    /// `NAME=SECRET_ID#JSON_KEY`. An existing entry with the same name in
    /// the same category is replaced in place.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAssignment` if the text is malformed, or
    /// a validation error for a bad name or empty field.
    pub fn add_assignment(&mut self, category: Category, raw: &str) -> Result<()> {
        let (name, target) = raw
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidAssignment {
                value: raw.to_string(),
                reason: "expected NAME=SECRET_ID",
            })?;
        let name = name.trim().to_string();

        match category {
            Category::String => insert_plain(&mut self.secret_strings, category, name, target),
            Category::Binary => insert_plain(&mut self.secret_binaries, category, name, target),
            Category::BinaryString => {
                insert_plain(&mut self.secret_binary_strings, category, name, target)
            }
            Category::JsonKeyString => insert_json(
                &mut self.secret_json_key_strings,
                category,
                name,
                raw,
                target,
            ),
            Category::JsonKey => {
                insert_json(&mut self.secret_json_keys, category, name, raw, target)
            }
        }
    }

    /// Validate every entry.
    ///
    /// Checks:
    /// - Names are valid environment variable names
    /// - Secret IDs and JSON keys are non-empty
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on the first invalid entry.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        for table in [
            &self.secret_strings,
            &self.secret_binaries,
            &self.secret_binary_strings,
        ] {
            for (name, reference) in table {
                validate_entry(name, reference)?;
            }
        }

        for table in [&self.secret_json_key_strings, &self.secret_json_keys] {
            for (name, reference) in table {
                validate_json_entry(name, reference)?;
            }
        }

        Ok(())
    }
}

fn insert_plain(
    table: &mut IndexMap<EnvVarName, SecretReference>,
    category: Category,
    name: EnvVarName,
    target: &str,
) -> Result<()> {
    let reference = SecretReference::new(target);
    validate_entry(&name, &reference)?;
    debug!(category = %category, name = %name, secret_id = %target, "adding assignment");
    table.insert(name, reference);
    Ok(())
}

fn insert_json(
    table: &mut IndexMap<EnvVarName, JsonKeySecretReference>,
    category: Category,
    name: EnvVarName,
    raw: &str,
    target: &str,
) -> Result<()> {
    let (secret_id, json_key) = target
        .split_once(constants::JSON_KEY_SEPARATOR)
        .ok_or_else(|| ConfigError::InvalidAssignment {
            value: raw.to_string(),
            reason: "expected NAME=SECRET_ID#JSON_KEY",
        })?;
    let reference = JsonKeySecretReference::new(secret_id, json_key);
    validate_json_entry(&name, &reference)?;
    debug!(category = %category, name = %name, secret_id = %secret_id, "adding assignment");
    table.insert(name, reference);
    Ok(())
}

fn validate_entry(name: &str, reference: &SecretReference) -> Result<()> {
    validation::validate_name(name)?;
    validation::validate_field(name, "secret_id", reference.secret_id())
}

fn validate_json_entry(name: &str, reference: &JsonKeySecretReference) -> Result<()> {
    validation::validate_name(name)?;
    validation::validate_field(name, "secret_id", reference.secret_id())?;
    validation::validate_field(name, "json_key", reference.json_key())
}
