//! Persisted CLI session handling.

pub mod storage;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use cinelog_core::error::{AuthError, Error};
use cinelog_core::{AccessToken, ApiUrl, Session, SessionStore, User};
use cinelog_rest::RestClient;

/// Build an authenticated client from the stored session.
///
/// Fails with a login hint when no session is stored.
pub fn client_from_storage() -> Result<RestClient> {
    let stored = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'cinelog auth login' first.")?;

    debug!(email = %stored.email, api = %stored.api, "Loaded stored session");

    let api = ApiUrl::new(&stored.api).context("Invalid API URL in session file")?;

    let store = SessionStore::new();
    store.set(Session {
        user: User {
            id: stored.user_id,
            name: stored.name,
            email: stored.email,
            token: None,
        },
        token: AccessToken::new(stored.token),
    });

    Ok(RestClient::new(api, store))
}

/// Translate an API error into a user-facing one.
///
/// A 401 has already torn down the in-memory session store, so the stale
/// session file is removed as well.
pub fn handle_api_error(err: Error) -> anyhow::Error {
    if matches!(err, Error::Auth(AuthError::Unauthorized { .. })) {
        let _ = storage::clear_session();
        return anyhow!("Session expired. Run 'cinelog auth login' again.");
    }
    err.into()
}
