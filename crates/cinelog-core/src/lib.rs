//! cinelog-core - Core types, traits, and list state management for the
//! cinelog catalog client.

pub mod catalog;
pub mod credentials;
pub mod error;
pub mod list;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;

pub use catalog::{CatalogEntry, EntryDraft, EntryPage, FieldValue, Kind, QueryState, SortKey};
pub use credentials::Credentials;
pub use error::Error;
pub use list::{ListController, ListState};
pub use session::{Session, SessionStore};
pub use tokens::AccessToken;
pub use traits::{AuthStore, CatalogStore};
pub use types::{ApiUrl, EntryId, User};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
