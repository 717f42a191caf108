//! Core traits for the auth and catalog collaborators.

mod auth;
mod catalog;

pub use auth::AuthStore;
pub use catalog::CatalogStore;
