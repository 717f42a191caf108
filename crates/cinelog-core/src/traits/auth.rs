//! Auth collaborator trait.

use async_trait::async_trait;

use crate::types::User;
use crate::{Credentials, Result};

/// The authentication collaborator.
///
/// Implementations that return a user with a token are expected to persist
/// the pair into the process-wide [`SessionStore`] so other components see
/// the session without re-reading storage.
///
/// [`SessionStore`]: crate::SessionStore
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Create a new account and session.
    async fn register(&self, name: &str, credentials: Credentials) -> Result<User>;

    /// Authenticate and create a session.
    async fn login(&self, credentials: Credentials) -> Result<User>;

    /// Fetch the current user. Requires a valid session.
    async fn me(&self) -> Result<User>;
}
