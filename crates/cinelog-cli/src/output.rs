//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use cinelog_core::CatalogEntry;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a one-line entry summary.
pub fn entry_line(entry: &CatalogEntry) {
    println!(
        "{}  {} ({})  {}",
        entry.id.as_str().dimmed(),
        entry.title.bold(),
        entry.year,
        entry.kind.as_str()
    );
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
