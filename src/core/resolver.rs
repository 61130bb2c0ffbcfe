//! Secret resolution.
//!
//! Turns a [`Config`] into `NAME=VALUE` assignments by fetching every
//! referenced secret from a [`SecretStore`].
//!
//! Entries resolve category by category (strings, binaries, binary strings,
//! JSON key strings, JSON keys) and in config order within a category. A
//! failing entry is recorded and skipped; it never stops the pass. Every
//! entry is its own fetch, so a secret referenced twice is fetched twice.

use base64::Engine;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::core::config::Config;
use crate::core::domain::{
    Category, EnvAssignment, JsonKeySecretReference, SecretReference, SecretValue,
};
use crate::core::store::SecretStore;
use crate::core::types::EnvVarName;
use crate::error::{ResolutionError, ResolveError};

/// Result of one resolution pass.
#[derive(Debug, Default)]
pub struct Resolution {
    assignments: Vec<EnvAssignment>,
    failures: Vec<ResolveError>,
}

impl Resolution {
    /// Assignments that resolved, in resolution order
    pub fn assignments(&self) -> &[EnvAssignment] {
        &self.assignments
    }

    /// Failures in the order they happened
    pub fn failures(&self) -> &[ResolveError] {
        &self.failures
    }

    /// Whether every entry resolved
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Assignments as `NAME=VALUE` strings
    pub fn env(&self) -> Vec<String> {
        self.assignments.iter().map(ToString::to_string).collect()
    }

    /// Split into the assignments and the aggregated error.
    ///
    /// The error is `None` when nothing failed, the failure itself when one
    /// entry failed, and a count-and-first summary otherwise.
    pub fn into_parts(self) -> (Vec<EnvAssignment>, Option<ResolutionError>) {
        (
            self.assignments,
            ResolutionError::from_failures(self.failures),
        )
    }

    fn record(&mut self, category: Category, name: &str, outcome: Result<String, ResolveError>) {
        match outcome {
            Ok(value) => {
                trace!(%category, name, value_len = value.len(), "resolved");
                self.assignments.push(EnvAssignment::new(name, value));
            }
            Err(e) => {
                debug!(%category, name, error = %e, "failed to resolve secret");
                self.failures.push(e);
            }
        }
    }
}

/// Resolve every entry of `config` against `store`.
///
/// Never fails as a whole; per-entry failures are collected on the
/// returned [`Resolution`].
pub fn resolve(config: &Config, store: &dyn SecretStore) -> Resolution {
    debug!(
        store = store.name(),
        references = config.len(),
        "resolving secrets"
    );

    let mut resolution = Resolution::default();

    for category in Category::ALL {
        match category {
            Category::String => {
                resolve_plain(&mut resolution, store, category, &config.secret_strings)
            }
            Category::Binary => {
                resolve_plain(&mut resolution, store, category, &config.secret_binaries)
            }
            Category::BinaryString => resolve_plain(
                &mut resolution,
                store,
                category,
                &config.secret_binary_strings,
            ),
            Category::JsonKeyString => resolve_json(
                &mut resolution,
                store,
                category,
                &config.secret_json_key_strings,
            ),
            Category::JsonKey => {
                resolve_json(&mut resolution, store, category, &config.secret_json_keys)
            }
        }
    }

    debug!(
        resolved = resolution.assignments.len(),
        failed = resolution.failures.len(),
        "resolution finished"
    );
    resolution
}

fn resolve_plain(
    resolution: &mut Resolution,
    store: &dyn SecretStore,
    category: Category,
    entries: &IndexMap<EnvVarName, SecretReference>,
) {
    for (name, reference) in entries {
        let outcome = store
            .get_secret(reference.secret_id())
            .map(|value| render_plain(category, &value))
            .map_err(ResolveError::from);
        resolution.record(category, name, outcome);
    }
}

fn resolve_json(
    resolution: &mut Resolution,
    store: &dyn SecretStore,
    category: Category,
    entries: &IndexMap<EnvVarName, JsonKeySecretReference>,
) {
    for (name, reference) in entries {
        let outcome = store
            .get_secret(reference.secret_id())
            .map_err(ResolveError::from)
            .and_then(|value| decode_object(reference.secret_id(), &value))
            .map(|object| {
                let field = object.get(reference.json_key());
                if field.is_none() {
                    debug!(name = %name, json_key = reference.json_key(), "key absent from secret");
                }
                match category {
                    Category::JsonKey => render_json(field),
                    _ => render_text(field),
                }
            });
        resolution.record(category, name, outcome);
    }
}

fn render_plain(category: Category, value: &SecretValue) -> String {
    let binary = value.binary().unwrap_or_default();
    match category {
        Category::Binary => base64::engine::general_purpose::STANDARD.encode(binary),
        Category::BinaryString => String::from_utf8_lossy(binary).into_owned(),
        _ => value.string().unwrap_or_default().to_string(),
    }
}

/// Decode the secret payload as a JSON object.
///
/// A JSON `null` payload is an object with no keys, so every lookup misses
/// and the entry still renders.
fn decode_object(secret_id: &str, value: &SecretValue) -> Result<Map<String, Value>, ResolveError> {
    let source = value
        .json_source()
        .ok_or_else(|| ResolveError::EmptyPayload(secret_id.to_string()))?;
    let decode_error = |source| ResolveError::Decode {
        secret_id: secret_id.to_string(),
        source,
    };

    match serde_json::from_slice::<Value>(source).map_err(decode_error)? {
        Value::Null => Ok(Map::new()),
        other => serde_json::from_value(other).map_err(decode_error),
    }
}

/// Plain-text rendering: strings unquoted, scalars as written, containers
/// as compact JSON, null and absent as the empty string.
fn render_text(field: Option<&Value>) -> String {
    match field {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// JSON rendering: always valid JSON, absent renders as `null`.
fn render_json(field: Option<&Value>) -> String {
    field.unwrap_or(&Value::Null).to_string()
}
