//! Edit command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cinelog_core::{CatalogStore, EntryDraft, EntryId};
use cinelog_rest::RestCatalog;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Entry identifier
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New kind (movie or tv)
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// New director name
    #[arg(long)]
    pub director: Option<String>,

    /// New runtime or season count
    #[arg(long)]
    pub duration: Option<String>,

    /// New release year
    #[arg(long)]
    pub year: Option<i32>,

    /// New production budget
    #[arg(long)]
    pub budget: Option<String>,

    /// New filming location
    #[arg(long)]
    pub location: Option<String>,

    /// New genre
    #[arg(long)]
    pub genre: Option<String>,

    /// New rating on a 0-10 scale
    #[arg(long)]
    pub rating: Option<f32>,

    /// New free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Path to a new poster image to upload
    #[arg(long)]
    pub poster: Option<PathBuf>,
}

pub async fn run(args: EditArgs) -> Result<()> {
    let client = session::client_from_storage()?;
    let catalog = RestCatalog::new(client);

    let id = EntryId::new(&args.id).context("Invalid entry id")?;

    // Start from the server's copy and overlay the provided flags.
    let current = catalog.get(&id).await.map_err(session::handle_api_error)?;

    let kind = match args.kind {
        Some(k) => k.parse().context("Invalid kind")?,
        None => current.kind,
    };

    let draft = EntryDraft {
        title: args.title.unwrap_or(current.title),
        kind: Some(kind),
        director: args.director.unwrap_or(current.director),
        duration: args.duration.unwrap_or(current.duration),
        year: Some(args.year.unwrap_or(current.year)),
        budget: args.budget.or(current.budget),
        location: args.location.or(current.location),
        genre: args.genre.or(current.genre),
        rating: args.rating.or(current.rating),
        description: args.description.or(current.description),
        poster: args.poster,
    };

    let entry = catalog
        .update(&id, &draft)
        .await
        .map_err(session::handle_api_error)?;

    output::success(&format!("Updated '{}'", entry.title));

    Ok(())
}
