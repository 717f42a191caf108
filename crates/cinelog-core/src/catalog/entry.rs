//! Catalog entry types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};
use crate::types::EntryId;

/// The kind of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    /// A feature film.
    #[serde(rename = "Movie")]
    Movie,
    /// A television show.
    #[serde(rename = "TV Show")]
    TvShow,
}

impl Kind {
    /// Returns the wire representation of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Movie => "Movie",
            Kind::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movie" | "movie" => Ok(Kind::Movie),
            "TV Show" | "tv" | "tv-show" => Ok(Kind::TvShow),
            other => Err(InvalidInputError::Kind {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// A single movie or TV-show record.
///
/// Identifiers are assigned by the server and unique within the collection.
/// `duration` is free text (the API does not normalize minutes vs. season
/// counts), and `rating` uses a 0-10 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Server-assigned identifier, immutable once created.
    #[serde(rename = "_id")]
    pub id: EntryId,

    /// Title of the movie or show.
    pub title: String,

    /// Movie or TV show.
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Director name.
    pub director: String,

    /// Production budget, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,

    /// Filming location, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Runtime or season count, free text.
    pub duration: String,

    /// Release year.
    pub year: i32,

    /// Genre, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Rating on a 0-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Stored poster path, resolved via [`ApiUrl::poster_url`].
    ///
    /// [`ApiUrl::poster_url`]: crate::ApiUrl::poster_url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    /// Identifier of the owning user.
    pub user: String,

    /// Creation timestamp, when the API sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp, when the API sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_wire_format() {
        assert_eq!(serde_json::to_string(&Kind::Movie).unwrap(), r#""Movie""#);
        assert_eq!(serde_json::to_string(&Kind::TvShow).unwrap(), r#""TV Show""#);
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("Movie".parse::<Kind>().unwrap(), Kind::Movie);
        assert_eq!("TV Show".parse::<Kind>().unwrap(), Kind::TvShow);
        assert_eq!("tv".parse::<Kind>().unwrap(), Kind::TvShow);
        assert!("Documentary".parse::<Kind>().is_err());
    }

    #[test]
    fn deserializes_api_entry() {
        let entry: CatalogEntry = serde_json::from_value(json!({
            "_id": "abc123",
            "title": "The Matrix",
            "type": "Movie",
            "director": "The Wachowskis",
            "duration": "136 min",
            "year": 1999,
            "rating": 8.7,
            "poster": "/uploads/matrix.jpg",
            "user": "u1",
            "createdAt": "2024-01-15T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(entry.id.as_str(), "abc123");
        assert_eq!(entry.kind, Kind::Movie);
        assert_eq!(entry.year, 1999);
        assert!(entry.budget.is_none());
        assert!(entry.created_at.is_some());
        assert!(entry.updated_at.is_none());
    }
}
