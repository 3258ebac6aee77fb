use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A contract address, normalized to lowercase hex on construction.
///
/// The vault registry, the metadata service and the chain layer are
/// independently cased; joins between them are plain string equality, so
/// every address is lowercased at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the string looks like a hex address (used to filter
    /// per-instance override files out of the metadata index).
    ///
    /// File names come from a remote index and may hold arbitrary UTF-8,
    /// so the prefix check must not assume char boundaries.
    pub fn looks_like_address(raw: &str) -> bool {
        raw.trim()
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("0x"))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Address {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
