//! Entry submission drafts.
//!
//! The API accepts creates and updates as multipart forms. Rather than
//! coercing field values by name at serialization time, a draft carries an
//! explicit tagged value per field and is validated once, when the field
//! list for submission is built.

use std::path::PathBuf;

use crate::error::{Error, InvalidInputError};

use super::entry::Kind;

/// Accepted release years. The lower bound predates the first film ever made.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1870..=2100;

/// A typed multipart field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// Whole number, transmitted as its decimal string form.
    Integer(i64),
    /// Decimal number, transmitted as its decimal string form.
    Decimal(f64),
    /// File to upload from the local filesystem.
    File(PathBuf),
}

/// A draft of a catalog entry for submission to the API.
///
/// `title`, `kind`, `director`, `duration`, and `year` are required by the
/// API; the remaining fields are included in the form only when present and
/// non-empty.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    /// Title of the movie or show.
    pub title: String,
    /// Movie or TV show.
    pub kind: Option<Kind>,
    /// Director name.
    pub director: String,
    /// Runtime or season count, free text.
    pub duration: String,
    /// Release year.
    pub year: Option<i32>,
    /// Production budget, free text.
    pub budget: Option<String>,
    /// Filming location, free text.
    pub location: Option<String>,
    /// Genre, free text.
    pub genre: Option<String>,
    /// Rating on a 0-10 scale.
    pub rating: Option<f32>,
    /// Free-text description.
    pub description: Option<String>,
    /// Path to a poster image to upload.
    pub poster: Option<PathBuf>,
}

impl EntryDraft {
    /// Validate the draft and build the ordered multipart field list.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInputError::Draft`] naming the first field that
    /// fails validation: blank required fields, a year outside 1870-2100,
    /// or a rating outside 0-10.
    pub fn fields(&self) -> Result<Vec<(&'static str, FieldValue)>, Error> {
        let kind = self
            .kind
            .ok_or_else(|| draft_error("type", "is required"))?;
        let year = self
            .year
            .ok_or_else(|| draft_error("year", "is required"))?;

        require_text("title", &self.title)?;
        require_text("director", &self.director)?;
        require_text("duration", &self.duration)?;

        if !YEAR_RANGE.contains(&year) {
            return Err(draft_error(
                "year",
                &format!(
                    "must be between {} and {}",
                    YEAR_RANGE.start(),
                    YEAR_RANGE.end()
                ),
            ));
        }

        if let Some(rating) = self.rating {
            if !(0.0..=10.0).contains(&rating) {
                return Err(draft_error("rating", "must be between 0 and 10"));
            }
        }

        let mut fields = vec![
            ("title", FieldValue::Text(self.title.trim().to_string())),
            ("type", FieldValue::Text(kind.as_str().to_string())),
            ("director", FieldValue::Text(self.director.trim().to_string())),
            ("duration", FieldValue::Text(self.duration.trim().to_string())),
            ("year", FieldValue::Integer(i64::from(year))),
        ];

        push_optional_text(&mut fields, "budget", self.budget.as_deref());
        push_optional_text(&mut fields, "location", self.location.as_deref());
        push_optional_text(&mut fields, "genre", self.genre.as_deref());

        if let Some(rating) = self.rating {
            fields.push(("rating", FieldValue::Decimal(f64::from(rating))));
        }

        push_optional_text(&mut fields, "description", self.description.as_deref());

        if let Some(ref poster) = self.poster {
            fields.push(("poster", FieldValue::File(poster.clone())));
        }

        Ok(fields)
    }
}

fn draft_error(field: &'static str, reason: &str) -> Error {
    InvalidInputError::Draft {
        field,
        reason: reason.to_string(),
    }
    .into()
}

fn require_text(field: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(draft_error(field, "is required"));
    }
    Ok(())
}

fn push_optional_text(
    fields: &mut Vec<(&'static str, FieldValue)>,
    name: &'static str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            fields.push((name, FieldValue::Text(trimmed.to_string())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_draft() -> EntryDraft {
        EntryDraft {
            title: "Alien".to_string(),
            kind: Some(Kind::Movie),
            director: "Ridley Scott".to_string(),
            duration: "117 min".to_string(),
            year: Some(1979),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_draft_yields_required_fields_only() {
        let fields = minimal_draft().fields().unwrap();
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["title", "type", "director", "duration", "year"]);
        assert_eq!(fields[4].1, FieldValue::Integer(1979));
    }

    #[test]
    fn optional_fields_included_when_present() {
        let mut draft = minimal_draft();
        draft.genre = Some("Horror".to_string());
        draft.rating = Some(8.5);
        draft.poster = Some(PathBuf::from("/tmp/alien.jpg"));

        let fields = draft.fields().unwrap();
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["title", "type", "director", "duration", "year", "genre", "rating", "poster"]
        );
    }

    #[test]
    fn empty_optional_text_is_omitted() {
        let mut draft = minimal_draft();
        draft.budget = Some("   ".to_string());
        let fields = draft.fields().unwrap();
        assert!(!fields.iter().any(|(n, _)| *n == "budget"));
    }

    #[test]
    fn blank_title_rejected() {
        let mut draft = minimal_draft();
        draft.title = "  ".to_string();
        assert!(draft.fields().is_err());
    }

    #[test]
    fn missing_kind_rejected() {
        let mut draft = minimal_draft();
        draft.kind = None;
        assert!(draft.fields().is_err());
    }

    #[test]
    fn out_of_range_rating_rejected() {
        let mut draft = minimal_draft();
        draft.rating = Some(11.0);
        assert!(draft.fields().is_err());
    }

    #[test]
    fn out_of_range_year_rejected() {
        let mut draft = minimal_draft();
        draft.year = Some(1492);
        assert!(draft.fields().is_err());
    }
}
