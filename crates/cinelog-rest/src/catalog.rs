//! REST-backed catalog implementation.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use cinelog_core::error::InvalidInputError;
use cinelog_core::traits::CatalogStore;
use cinelog_core::{CatalogEntry, EntryDraft, EntryId, EntryPage, FieldValue, QueryState, Result};

use crate::client::RestClient;

/// Response from the listing endpoint.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    movie_shows: Vec<CatalogEntry>,
    page: u32,
    pages: u32,
    total: u64,
    has_more: bool,
}

/// Catalog collaborator backed by the REST API.
#[derive(Debug, Clone)]
pub struct RestCatalog {
    client: RestClient,
}

impl RestCatalog {
    /// Create a new catalog store over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogStore for RestCatalog {
    #[instrument(skip(self, query), fields(search = %query.search, page))]
    async fn list(&self, query: &QueryState, page: u32, page_size: u32) -> Result<EntryPage> {
        debug!("Listing entries");

        let mut params = vec![
            ("page", page.to_string()),
            ("limit", page_size.to_string()),
            ("sortBy", query.sort.as_str().to_string()),
        ];
        if !query.search.is_empty() {
            params.push(("search", query.search.clone()));
        }
        if let Some(kind) = query.kind {
            params.push(("type", kind.as_str().to_string()));
        }

        let response: ListResponse = self.client.get_json("movies", &params).await?;

        Ok(EntryPage {
            entries: response.movie_shows,
            page: response.page,
            total_pages: response.pages,
            total: response.total,
            has_more: response.has_more,
        })
    }

    #[instrument(skip(self), fields(%id))]
    async fn get(&self, id: &EntryId) -> Result<CatalogEntry> {
        debug!("Fetching entry");
        self.client
            .get_json(&format!("movies/{}", id), &[] as &[(&str, &str)])
            .await
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &EntryDraft) -> Result<CatalogEntry> {
        debug!(title = %draft.title, "Creating entry");
        let form = form_from_draft(draft).await?;
        self.client.post_multipart("movies", form).await
    }

    #[instrument(skip(self, draft), fields(%id))]
    async fn update(&self, id: &EntryId, draft: &EntryDraft) -> Result<CatalogEntry> {
        debug!("Updating entry");
        let form = form_from_draft(draft).await?;
        self.client
            .put_multipart(&format!("movies/{}", id), form)
            .await
    }

    #[instrument(skip(self), fields(%id))]
    async fn delete(&self, id: &EntryId) -> Result<()> {
        debug!("Deleting entry");
        self.client.delete(&format!("movies/{}", id)).await
    }
}

/// Build a multipart form from a validated draft.
async fn form_from_draft(draft: &EntryDraft) -> Result<Form> {
    let mut form = Form::new();

    for (name, value) in draft.fields()? {
        form = match value {
            FieldValue::Text(text) => form.text(name, text),
            FieldValue::Integer(n) => form.text(name, n.to_string()),
            FieldValue::Decimal(n) => form.text(name, n.to_string()),
            FieldValue::File(path) => {
                let bytes =
                    tokio::fs::read(&path)
                        .await
                        .map_err(|e| InvalidInputError::Draft {
                            field: name,
                            reason: format!("failed to read '{}': {}", path.display(), e),
                        })?;

                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(name)
                    .to_string();

                let mut part = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = mime_for(&path) {
                    part = part.mime_str(mime).map_err(|e| InvalidInputError::Other {
                        message: e.to_string(),
                    })?;
                }
                form.part(name, part)
            }
        };
    }

    Ok(form)
}

/// Guess the mime type of an image from its extension.
fn mime_for(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase()
        .as_str()
    {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
