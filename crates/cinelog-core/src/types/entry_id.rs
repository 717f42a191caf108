//! Catalog entry identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// An opaque, server-assigned catalog entry identifier.
///
/// Identifiers are never minted by the client; this type only validates
/// that the value is non-empty and free of whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Create an entry id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or contains whitespace.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        if s.is_empty() {
            return Err(InvalidInputError::EntryId {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidInputError::EntryId {
                value: s.to_string(),
                reason: "must not contain whitespace".to_string(),
            }
            .into());
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_id() {
        let id = EntryId::new("665f1a2b3c4d5e6f70819203").unwrap();
        assert_eq!(id.as_str(), "665f1a2b3c4d5e6f70819203");
    }

    #[test]
    fn empty_id_rejected() {
        assert!(EntryId::new("").is_err());
    }

    #[test]
    fn whitespace_rejected() {
        assert!(EntryId::new("abc 123").is_err());
    }
}
