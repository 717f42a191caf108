//! Browse command implementation.
//!
//! Drives a [`ListController`] interactively: the first page is fetched up
//! front, and each Enter keypress appends the next page until the server
//! reports no more.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::sync::watch;

use cinelog_core::{ListController, ListState};
use cinelog_rest::RestCatalog;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Search text matched against title, director, and genre
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by kind (movie or tv)
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Sort order: -createdAt, title, -title, year, -year
    #[arg(long, default_value = "-createdAt")]
    pub sort: String,

    /// Entries per page
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

pub async fn run(args: BrowseArgs) -> Result<()> {
    let client = session::client_from_storage()?;
    let catalog = Arc::new(RestCatalog::new(client));

    let query = super::query_from(args.search.as_deref(), args.kind.as_deref(), &args.sort)?;

    // The query is fully known up front, so no quiescence delay is needed.
    let controller = ListController::with_settings(catalog, args.limit, Duration::ZERO);
    let mut updates = controller.subscribe();

    controller.apply_query_change(query);
    wait_for_settle(&mut updates).await?;

    let mut shown = print_new(&controller, 0);

    loop {
        let state = controller.snapshot();
        if let Some(error) = &state.error {
            output::error(error);
        }
        if state.entries.is_empty() && state.error.is_none() {
            eprintln!("{}", "No entries found.".dimmed());
            break;
        }
        if !state.has_more {
            eprintln!("{}", "End of list.".dimmed());
            break;
        }

        eprint!("{}", "Press Enter to load more, q to quit: ".dimmed());
        io::stderr().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 || line.trim() == "q" {
            break;
        }

        if controller.load_more().await {
            shown = print_new(&controller, shown);
        }
    }

    Ok(())
}

/// Wait until the initial reset fetch has finished.
///
/// The watch channel coalesces intermediate states, so this waits for the
/// settled outcome (a fetched page or an error) rather than for the
/// in-flight transition, which may never be observed.
async fn wait_for_settle(updates: &mut watch::Receiver<ListState>) -> Result<()> {
    updates
        .wait_for(|state| !state.in_flight && (state.page > 0 || state.error.is_some()))
        .await
        .context("List controller closed")?;
    Ok(())
}

/// Print entries appended since the last call, returning the new count.
fn print_new(controller: &ListController<RestCatalog>, shown: usize) -> usize {
    let state = controller.snapshot();
    for entry in &state.entries[shown..] {
        output::entry_line(entry);
    }
    state.entries.len()
}
