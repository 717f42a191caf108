//! List command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use cinelog_core::CatalogStore;
use cinelog_rest::RestCatalog;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search text matched against title, director, and genre
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by kind (movie or tv)
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Sort order: -createdAt, title, -title, year, -year
    #[arg(long, default_value = "-createdAt")]
    pub sort: String,

    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Entries per page
    #[arg(long, default_value_t = 10)]
    pub limit: u32,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let client = session::client_from_storage()?;
    let catalog = RestCatalog::new(client);

    let query = super::query_from(args.search.as_deref(), args.kind.as_deref(), &args.sort)?;

    let page = catalog
        .list(&query, args.page, args.limit)
        .await
        .map_err(session::handle_api_error)?;

    if args.pretty {
        return output::json_pretty(&page);
    }

    if page.entries.is_empty() {
        eprintln!("{}", "No entries found.".dimmed());
        return Ok(());
    }

    for entry in &page.entries {
        output::entry_line(entry);
    }

    eprintln!();
    eprintln!(
        "{}",
        format!(
            "Page {} of {} ({} total)",
            page.page, page.total_pages, page.total
        )
        .dimmed()
    );

    Ok(())
}
