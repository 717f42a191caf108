//! Bearer token newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque bearer token issued by the API on login or registration.
///
/// The `Debug` implementation redacts the token value so it never leaks
/// into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl PartialEq<&str> for AccessToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let token = AccessToken::new("secret-jwt");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret-jwt"));
    }
}
