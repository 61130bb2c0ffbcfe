//! Assignment categories.

/// How a fetched secret is turned into an environment value.
///
/// The declaration order is the resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// String payload, verbatim
    String,
    /// Binary payload, base64-encoded
    Binary,
    /// Binary payload read as text
    BinaryString,
    /// One JSON field rendered as plain text
    JsonKeyString,
    /// One JSON field rendered as JSON
    JsonKey,
}

impl Category {
    /// All categories in resolution order.
    pub const ALL: [Category; 5] = [
        Self::String,
        Self::Binary,
        Self::BinaryString,
        Self::JsonKeyString,
        Self::JsonKey,
    ];

    /// Config table name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "secret_strings",
            Self::Binary => "secret_binaries",
            Self::BinaryString => "secret_binary_strings",
            Self::JsonKeyString => "secret_json_key_strings",
            Self::JsonKey => "secret_json_keys",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
