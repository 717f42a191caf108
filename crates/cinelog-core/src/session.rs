//! Process-wide session state.
//!
//! Every component that needs the current user or token goes through one
//! shared [`SessionStore`] rather than reading persisted storage ad hoc.
//! Components that must react to a forced logout (a 401 from any request)
//! subscribe to the store's watch channel.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;
use tracing::debug;

use crate::tokens::AccessToken;
use crate::types::User;

/// An authenticated session: the user plus the bearer token issued for it.
#[derive(Debug, Clone)]
pub struct Session {
    /// The logged-in user.
    pub user: User,
    /// Token attached to authenticated requests.
    pub token: AccessToken,
}

/// Shared, process-wide session storage.
///
/// Cloning is cheap; all clones observe the same session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

struct Inner {
    session: RwLock<Option<Session>>,
    tx: watch::Sender<Option<User>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                session: RwLock::new(None),
                tx,
            }),
        }
    }

    /// Replace the current session.
    pub fn set(&self, session: Session) {
        debug!(user = %session.user.email, "Session established");
        let user = session.user.clone();
        *self.inner.session.write().unwrap() = Some(session);
        let _ = self.inner.tx.send(Some(user));
    }

    /// Clear the current session, notifying subscribers.
    ///
    /// Called by the HTTP client on any unauthorized response, independent
    /// of which component issued the request.
    pub fn clear(&self) {
        let had_session = {
            let mut guard = self.inner.session.write().unwrap();
            guard.take().is_some()
        };
        if had_session {
            debug!("Session cleared");
            let _ = self.inner.tx.send(None);
        }
    }

    /// Returns a snapshot of the current session, without I/O.
    pub fn current(&self) -> Option<Session> {
        self.inner.session.read().unwrap().clone()
    }

    /// Returns the current bearer token, if logged in.
    pub fn token(&self) -> Option<AccessToken> {
        self.inner
            .session
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Returns the current user, if logged in.
    pub fn user(&self) -> Option<User> {
        self.inner
            .session
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.user.clone())
    }

    /// Subscribe to session changes. The channel yields `None` on logout,
    /// forced or otherwise.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.inner.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let user = self.user().map(|u| u.email);
        f.debug_struct("SessionStore").field("user", &user).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session {
            user: User {
                id: "u1".to_string(),
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                token: None,
            },
            token: AccessToken::new("jwt-abc"),
        }
    }

    #[test]
    fn set_and_clear() {
        let store = SessionStore::new();
        assert!(store.current().is_none());

        store.set(test_session());
        assert_eq!(store.token().unwrap().as_str(), "jwt-abc");

        store.clear();
        assert!(store.current().is_none());
        assert!(store.token().is_none());
    }

    #[tokio::test]
    async fn subscribers_observe_forced_logout() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        store.set(test_session());
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_some());

        store.clear();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[test]
    fn clearing_empty_store_does_not_notify() {
        let store = SessionStore::new();
        let rx = store.subscribe();
        store.clear();
        assert!(!rx.has_changed().unwrap());
    }
}
