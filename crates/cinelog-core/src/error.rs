//! Error types for the cinelog client.
//!
//! A unified error type with explicit variants for transport, authentication,
//! API responses, and input validation, so callers can branch on the failure
//! mode instead of matching strings.

use std::fmt;
use thiserror::Error;

/// The unified error type for cinelog operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (invalid credentials, expired session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Error responses from the API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid URL, empty id, bad draft field).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug)]
pub enum AuthError {
    /// The server returned 401. The HTTP client clears the session store
    /// before surfacing this, regardless of which component issued the
    /// request.
    Unauthorized { message: Option<String> },

    /// An operation that requires a session was attempted without one.
    NotLoggedIn,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Unauthorized { message: Some(m) } => write!(f, "unauthorized: {}", m),
            AuthError::Unauthorized { message: None } => f.write_str("unauthorized"),
            AuthError::NotLoggedIn => f.write_str("not logged in"),
        }
    }
}

impl std::error::Error for AuthError {}

/// An error response from the API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if it sent one.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if this is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid entry identifier.
    #[error("invalid entry id '{value}': {reason}")]
    EntryId { value: String, reason: String },

    /// Unknown entry kind.
    #[error("invalid kind '{value}': expected 'Movie' or 'TV Show'")]
    Kind { value: String },

    /// Unknown sort key.
    #[error("invalid sort key '{value}'")]
    SortKey { value: String },

    /// A draft field failed validation.
    #[error("invalid field '{field}': {reason}")]
    Draft { field: &'static str, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
