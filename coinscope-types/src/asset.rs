//! Asset identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CoinscopeError;

/// Store key identifying one asset, e.g. `bitcoin` or `matic-network`.
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId(String);

impl AssetId {
    /// Build an identifier from a raw string.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the input is empty after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CoinscopeError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CoinscopeError::InvalidArg(
                "asset identifier must not be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AssetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssetId {
    type Error = CoinscopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AssetId {
    type Error = CoinscopeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssetId> for String {
    fn from(id: AssetId) -> Self {
        id.0
    }
}
