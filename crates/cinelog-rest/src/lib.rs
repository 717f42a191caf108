//! cinelog-rest - REST-backed auth and catalog implementations.

mod auth;
mod catalog;
mod client;

pub use auth::RestAuth;
pub use catalog::RestCatalog;
pub use client::RestClient;
