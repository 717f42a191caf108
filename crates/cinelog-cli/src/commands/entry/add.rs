//! Add command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cinelog_core::{CatalogStore, EntryDraft};
use cinelog_rest::RestCatalog;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Title
    #[arg(long)]
    pub title: String,

    /// Kind (movie or tv)
    #[arg(long = "type")]
    pub kind: String,

    /// Director name
    #[arg(long)]
    pub director: String,

    /// Runtime or season count, e.g. "117 min"
    #[arg(long)]
    pub duration: String,

    /// Release year
    #[arg(long)]
    pub year: i32,

    /// Production budget
    #[arg(long)]
    pub budget: Option<String>,

    /// Filming location
    #[arg(long)]
    pub location: Option<String>,

    /// Genre
    #[arg(long)]
    pub genre: Option<String>,

    /// Rating on a 0-10 scale
    #[arg(long)]
    pub rating: Option<f32>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,

    /// Path to a poster image to upload
    #[arg(long)]
    pub poster: Option<PathBuf>,
}

pub async fn run(args: AddArgs) -> Result<()> {
    let client = session::client_from_storage()?;
    let catalog = RestCatalog::new(client);

    let draft = EntryDraft {
        title: args.title,
        kind: Some(args.kind.parse().context("Invalid kind")?),
        director: args.director,
        duration: args.duration,
        year: Some(args.year),
        budget: args.budget,
        location: args.location,
        genre: args.genre,
        rating: args.rating,
        description: args.description,
        poster: args.poster,
    };

    let entry = catalog
        .create(&draft)
        .await
        .map_err(session::handle_api_error)?;

    output::success(&format!("Added '{}'", entry.title));
    output::field("Id", entry.id.as_str());

    Ok(())
}
