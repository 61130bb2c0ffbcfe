//! Error types.
//!
//! Each concern has its own error enum; [`Error`] folds them together for
//! the binary and for callers that only want one type.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration loading and merging errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid assignment '{value}': {reason}")]
    InvalidAssignment { value: String, reason: &'static str },
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("environment variable name cannot be empty")]
    EmptyName,

    #[error("invalid environment variable name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("{field} for '{name}' cannot be empty")]
    EmptyField { name: String, field: &'static str },
}

/// Secret store errors.
///
/// The fetch kinds (`NotFound`, `AccessDenied`, `Transient`, `Rejected`) are
/// recorded per entry during resolution. `Connect` and `Unavailable` happen
/// before resolution starts and abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("access denied to secret {secret_id}: {message}")]
    AccessDenied { secret_id: String, message: String },

    #[error("transient failure fetching secret {secret_id}: {message}")]
    Transient { secret_id: String, message: String },

    #[error("secret store rejected request for {secret_id}: {message}")]
    Rejected { secret_id: String, message: String },

    #[error("failed to create secret store client: {0}")]
    Connect(String),

    #[error("no secret store backend compiled in: {0}")]
    Unavailable(&'static str),
}

/// A single entry that could not be resolved.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] StoreError),

    #[error("secret {secret_id} is not a JSON object: {source}")]
    Decode {
        secret_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("secret {0} has neither a string nor a binary value")]
    EmptyPayload(String),
}

/// Aggregated outcome of a resolution pass that recorded failures.
///
/// One failure is surfaced as itself. Several are summarized by count and
/// the first message, and the full list stays available through
/// [`ResolutionError::failures`].
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error(transparent)]
    Single(ResolveError),

    #[error("{} error(s): [{:?}, ...]", .0.len(), first_message(.0))]
    Many(Vec<ResolveError>),
}

impl ResolutionError {
    /// Aggregate failures in the order they were recorded.
    ///
    /// Returns `None` when there is nothing to report.
    pub fn from_failures(mut failures: Vec<ResolveError>) -> Option<Self> {
        match failures.len() {
            0 => None,
            1 => failures.pop().map(Self::Single),
            _ => Some(Self::Many(failures)),
        }
    }

    /// Number of underlying failures.
    pub fn count(&self) -> usize {
        self.failures().len()
    }

    /// Every underlying failure, first occurrence first.
    pub fn failures(&self) -> &[ResolveError] {
        match self {
            Self::Single(e) => std::slice::from_ref(e),
            Self::Many(all) => all,
        }
    }
}

fn first_message(failures: &[ResolveError]) -> String {
    failures.first().map(ToString::to_string).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, Error>;
