//! Authenticated user type.

use serde::{Deserialize, Serialize};

use crate::tokens::AccessToken;

/// A user account as returned by the auth endpoints.
///
/// The `token` field is only present on login and register responses;
/// `GET /api/auth/me` returns the user without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Bearer token, when the response carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<AccessToken>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_login_response() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","name":"Alice","email":"alice@example.com","token":"jwt-abc"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.token.unwrap().as_str(), "jwt-abc");
    }

    #[test]
    fn deserializes_me_response_without_token() {
        let user: User =
            serde_json::from_str(r#"{"_id":"u1","name":"Alice","email":"alice@example.com"}"#)
                .unwrap();
        assert!(user.token.is_none());
    }
}
