//! Catalog entry model, listing queries, and submission drafts.

mod draft;
mod entry;
mod query;

pub use draft::{EntryDraft, FieldValue};
pub use entry::{CatalogEntry, Kind};
pub use query::{EntryPage, QueryState, SortKey};
