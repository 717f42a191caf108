//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use cinelog_core::{CatalogStore, EntryId};
use cinelog_rest::RestCatalog;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Entry identifier
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let client = session::client_from_storage()?;
    let api = client.api().clone();
    let catalog = RestCatalog::new(client);

    let id = EntryId::new(&args.id).context("Invalid entry id")?;
    let entry = catalog.get(&id).await.map_err(session::handle_api_error)?;

    if args.pretty {
        return output::json_pretty(&entry);
    }

    output::field("Title", &entry.title);
    output::field("Type", entry.kind.as_str());
    output::field("Director", &entry.director);
    output::field("Duration", &entry.duration);
    output::field("Year", &entry.year.to_string());

    if let Some(genre) = &entry.genre {
        output::field("Genre", genre);
    }
    if let Some(rating) = entry.rating {
        output::field("Rating", &format!("{:.1}/10", rating));
    }
    if let Some(budget) = &entry.budget {
        output::field("Budget", budget);
    }
    if let Some(location) = &entry.location {
        output::field("Location", location);
    }
    if let Some(description) = &entry.description {
        output::field("Description", description);
    }
    if let Some(poster) = &entry.poster {
        let url = api.poster_url(poster);
        if !url.is_empty() {
            output::field("Poster", &url);
        }
    }
    if let Some(created) = entry.created_at {
        output::field("Added", &created.format("%Y-%m-%d").to_string());
    }

    Ok(())
}
