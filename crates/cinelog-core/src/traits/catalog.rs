//! Catalog collaborator trait.

use async_trait::async_trait;

use crate::catalog::{CatalogEntry, EntryDraft, EntryPage, QueryState};
use crate::types::EntryId;
use crate::Result;

/// The catalog query collaborator: paginated listing plus CRUD over
/// catalog entries.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch one page of entries matching the query.
    async fn list(&self, query: &QueryState, page: u32, page_size: u32) -> Result<EntryPage>;

    /// Fetch a single entry by id.
    async fn get(&self, id: &EntryId) -> Result<CatalogEntry>;

    /// Create a new entry from a draft.
    async fn create(&self, draft: &EntryDraft) -> Result<CatalogEntry>;

    /// Update an existing entry from a draft.
    async fn update(&self, id: &EntryId, draft: &EntryDraft) -> Result<CatalogEntry>;

    /// Delete an entry.
    async fn delete(&self, id: &EntryId) -> Result<()>;
}
