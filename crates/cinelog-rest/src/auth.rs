//! REST-backed auth implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use cinelog_core::error::AuthError;
use cinelog_core::traits::AuthStore;
use cinelog_core::{Credentials, Result, Session, User};

use crate::client::RestClient;

/// Request body for registration.
#[derive(Debug, serde::Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Request body for login.
#[derive(Debug, serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Auth collaborator backed by the REST API.
///
/// Login and register persist the returned user and token into the shared
/// session store.
#[derive(Debug, Clone)]
pub struct RestAuth {
    client: RestClient,
}

impl RestAuth {
    /// Create a new auth store over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn store_session(&self, user: &User) {
        if let Some(token) = user.token.clone() {
            self.client.session().set(Session {
                user: user.clone(),
                token,
            });
        }
    }
}

#[async_trait]
impl AuthStore for RestAuth {
    #[instrument(skip(self, credentials))]
    async fn register(&self, name: &str, credentials: Credentials) -> Result<User> {
        debug!(email = credentials.email(), "Registering account");

        let request = RegisterRequest {
            name,
            email: credentials.email(),
            password: credentials.password(),
        };

        let user: User = self.client.post_json("auth/register", &request).await?;
        self.store_session(&user);
        Ok(user)
    }

    #[instrument(skip(self, credentials))]
    async fn login(&self, credentials: Credentials) -> Result<User> {
        debug!(email = credentials.email(), "Logging in");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };

        let user: User = self.client.post_json("auth/login", &request).await?;
        self.store_session(&user);
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn me(&self) -> Result<User> {
        if self.client.session().current().is_none() {
            return Err(AuthError::NotLoggedIn.into());
        }
        self.client.get_json("auth/me", &[] as &[(&str, &str)]).await
    }
}
