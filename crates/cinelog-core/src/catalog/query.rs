//! Listing query types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entry::{CatalogEntry, Kind};
use crate::error::{Error, InvalidInputError};

/// Sort order for catalog listings.
///
/// The wire format matches the API's `sortBy` parameter, where a leading
/// `-` means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recently added first.
    #[default]
    CreatedDesc,
    /// Title A-Z.
    TitleAsc,
    /// Title Z-A.
    TitleDesc,
    /// Newest year first.
    YearDesc,
    /// Oldest year first.
    YearAsc,
}

impl SortKey {
    /// Returns the wire representation of this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedDesc => "-createdAt",
            SortKey::TitleAsc => "title",
            SortKey::TitleDesc => "-title",
            SortKey::YearDesc => "-year",
            SortKey::YearAsc => "year",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-createdAt" | "recent" => Ok(SortKey::CreatedDesc),
            "title" => Ok(SortKey::TitleAsc),
            "-title" => Ok(SortKey::TitleDesc),
            "-year" => Ok(SortKey::YearDesc),
            "year" => Ok(SortKey::YearAsc),
            other => Err(InvalidInputError::SortKey {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// The declarative inputs to a catalog listing.
///
/// Any change to a `QueryState` invalidates the current page sequence; the
/// list controller answers with a page-1 reset fetch, never an append.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryState {
    /// Search text matched against title, director, and genre. Empty means
    /// no search filter.
    pub search: String,

    /// Kind filter. `None` means both movies and TV shows.
    pub kind: Option<Kind>,

    /// Sort order.
    pub sort: SortKey,
}

/// One page of catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPage {
    /// Entries in server-provided order.
    pub entries: Vec<CatalogEntry>,

    /// The page number this response is for (1-based).
    pub page: u32,

    /// Total number of pages.
    pub total_pages: u32,

    /// Total number of matching entries.
    pub total: u64,

    /// Whether more pages exist. This is the server's explicit flag, never
    /// inferred from page-size heuristics.
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_round_trip() {
        for key in [
            SortKey::CreatedDesc,
            SortKey::TitleAsc,
            SortKey::TitleDesc,
            SortKey::YearDesc,
            SortKey::YearAsc,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn default_query_state() {
        let query = QueryState::default();
        assert_eq!(query.search, "");
        assert!(query.kind.is_none());
        assert_eq!(query.sort, SortKey::CreatedDesc);
    }
}
