//! Environment assignment type.

use crate::core::types::EnvVarName;

/// One resolved `NAME=VALUE` pair.
///
/// The value is kept verbatim; no quoting or escaping is applied.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvAssignment {
    name: EnvVarName,
    value: String,
}

impl EnvAssignment {
    pub fn new(name: impl Into<EnvVarName>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Environment variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved secret value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into name and value
    pub fn into_pair(self) -> (EnvVarName, String) {
        (self.name, self.value)
    }
}

impl std::fmt::Display for EnvAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

// Values are secrets; keep them out of debug logs.
impl std::fmt::Debug for EnvAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvAssignment")
            .field("name", &self.name)
            .field("value_len", &self.value.len())
            .finish()
    }
}
