//! Entry subcommand implementations.

mod add;
mod browse;
mod edit;
mod get;
mod list;
mod rm;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use cinelog_core::{Kind, QueryState, SortKey};

#[derive(Args, Debug)]
pub struct EntryCommand {
    #[command(subcommand)]
    pub command: EntrySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EntrySubcommand {
    /// List one page of catalog entries
    List(list::ListArgs),

    /// Fetch a single entry
    Get(get::GetArgs),

    /// Add an entry to the catalog
    Add(add::AddArgs),

    /// Edit an existing entry
    Edit(edit::EditArgs),

    /// Remove an entry
    Rm(rm::RmArgs),

    /// Browse the catalog incrementally
    Browse(browse::BrowseArgs),
}

pub async fn handle(cmd: EntryCommand) -> Result<()> {
    match cmd.command {
        EntrySubcommand::List(args) => list::run(args).await,
        EntrySubcommand::Get(args) => get::run(args).await,
        EntrySubcommand::Add(args) => add::run(args).await,
        EntrySubcommand::Edit(args) => edit::run(args).await,
        EntrySubcommand::Rm(args) => rm::run(args).await,
        EntrySubcommand::Browse(args) => browse::run(args).await,
    }
}

/// Build a listing query from command-line flags.
fn query_from(search: Option<&str>, kind: Option<&str>, sort: &str) -> Result<QueryState> {
    let kind = kind
        .map(|k| k.parse::<Kind>())
        .transpose()
        .context("Invalid kind")?;
    let sort = sort.parse::<SortKey>().context("Invalid sort key")?;

    Ok(QueryState {
        search: search.unwrap_or_default().to_string(),
        kind,
        sort,
    })
}
