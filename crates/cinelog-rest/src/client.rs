//! HTTP client for the catalog API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart::Form;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, trace, warn};

use cinelog_core::error::{ApiError, AuthError, Error, TransportError};
use cinelog_core::{ApiUrl, SessionStore};

/// Error body shape the API uses for non-success responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// HTTP client bound to an API base URL and the shared session store.
///
/// Attaches the bearer token from the session store when one is present.
/// Any 401 response clears the session store before the error is surfaced,
/// no matter which component issued the request.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    api: ApiUrl,
    session: SessionStore,
}

impl RestClient {
    /// Create a new client for the given API.
    pub fn new(api: ApiUrl, session: SessionStore) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cinelog/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api,
            session,
        }
    }

    /// Returns the API base URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Returns the session store this client reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Make a GET request with query parameters.
    #[instrument(skip(self, params), fields(api = %self.api))]
    pub async fn get_json<Q, R>(&self, path: &str, params: &Q) -> Result<R, Error>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "GET");

        let response = self
            .client
            .get(&url)
            .query(params)
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "POST");
        trace!(?body, "request body");

        let response = self
            .client
            .post(&url)
            .json(body)
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make a POST request with a multipart form body.
    #[instrument(skip(self, form), fields(api = %self.api))]
    pub async fn post_multipart<R>(&self, path: &str, form: Form) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "POST multipart");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make a PUT request with a multipart form body.
    #[instrument(skip(self, form), fields(api = %self.api))]
    pub async fn put_multipart<R>(&self, path: &str, form: Form) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(path, "PUT multipart");

        let response = self
            .client
            .put(&url)
            .multipart(form)
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make a DELETE request, discarding any response body.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.api.endpoint(path);
        debug!(path, "DELETE");

        let response = self
            .client
            .delete(&url)
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// Create authorization headers when a session token is present.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.token() {
            let value = format!("Bearer {}", token.as_str());
            if let Ok(value) = HeaderValue::from_str(&value) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    /// Parse the response body or map the error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(transport)?;
            Ok(body)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// Map a non-success response to an error.
    ///
    /// A 401 clears the session store as a process-wide side effect.
    async fn error_from_response(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message);

        if status == 401 {
            warn!("Unauthorized response, clearing session");
            self.session.clear();
            return AuthError::Unauthorized { message }.into();
        }

        ApiError::new(status, message).into()
    }
}

/// Map a reqwest error to the transport error taxonomy.
fn transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("http://localhost:5000").unwrap();
        let client = RestClient::new(api.clone(), SessionStore::new());
        assert_eq!(client.api().as_str(), api.as_str());
    }
}
