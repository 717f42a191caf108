//! Remove command implementation.

use anyhow::{Context, Result};
use clap::Args;

use cinelog_core::{CatalogStore, EntryId};
use cinelog_rest::RestCatalog;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RmArgs {
    /// Entry identifier
    pub id: String,
}

pub async fn run(args: RmArgs) -> Result<()> {
    let client = session::client_from_storage()?;
    let catalog = RestCatalog::new(client);

    let id = EntryId::new(&args.id).context("Invalid entry id")?;
    catalog
        .delete(&id)
        .await
        .map_err(session::handle_api_error)?;

    output::success(&format!("Deleted {}", id));

    Ok(())
}
