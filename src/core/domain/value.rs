//! Secret value type.
//!
//! What a store returns for one fetch. Either payload may be absent; nothing
//! here forces exactly one to be set.

/// Raw payload of a fetched secret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretValue {
    string: Option<String>,
    binary: Option<Vec<u8>>,
}

impl SecretValue {
    /// Create a value with both payloads given explicitly
    pub fn new(string: Option<String>, binary: Option<Vec<u8>>) -> Self {
        Self { string, binary }
    }

    /// A secret stored as text
    pub fn from_string(s: impl Into<String>) -> Self {
        Self::new(Some(s.into()), None)
    }

    /// A secret stored as bytes
    pub fn from_binary(b: impl Into<Vec<u8>>) -> Self {
        Self::new(None, Some(b.into()))
    }

    /// String payload, if any
    pub fn string(&self) -> Option<&str> {
        self.string.as_deref()
    }

    /// Binary payload, if any
    pub fn binary(&self) -> Option<&[u8]> {
        self.binary.as_deref()
    }

    /// Bytes to decode as JSON: the string payload when present, otherwise
    /// the binary payload.
    pub fn json_source(&self) -> Option<&[u8]> {
        match (&self.string, &self.binary) {
            (Some(s), _) => Some(s.as_bytes()),
            (None, Some(b)) => Some(b.as_slice()),
            (None, None) => None,
        }
    }
}
