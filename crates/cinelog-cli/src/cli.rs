//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::entry::EntryCommand;

/// Movie and TV show catalog CLI.
#[derive(Parser, Debug)]
#[command(name = "cinelog")]
#[command(author, version = env!("CINELOG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account and session operations
    Auth(AuthCommand),

    /// Catalog entry operations
    Entry(EntryCommand),
}
