//! Visible list state.

use crate::catalog::CatalogEntry;

/// The state of the visible collection.
///
/// Entries keep the server-provided order and never contain two entries
/// with the same identifier.
#[derive(Debug, Clone)]
pub struct ListState {
    /// Entries fetched so far, in server order.
    pub entries: Vec<CatalogEntry>,

    /// The last page fetched. Zero before any fetch completes.
    pub page: u32,

    /// Whether more pages may exist, per the server's explicit flag.
    pub has_more: bool,

    /// Whether a fetch is currently outstanding.
    pub in_flight: bool,

    /// Message from the most recent failed fetch, cleared when a new fetch
    /// starts.
    pub error: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            page: 0,
            has_more: true,
            in_flight: false,
            error: None,
        }
    }
}

impl ListState {
    /// Returns true if the given id is present.
    pub fn contains(&self, id: &crate::EntryId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }
}
