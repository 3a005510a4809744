//! Query a catalog file from the command line.
//!
//! Usage:
//!   bazaar-cli --catalog catalog.json search --search pdf --sort recent --limit 5
//!   bazaar-cli --catalog catalog.json show directus-extension-pdf-viewer
//!   bazaar-cli --catalog catalog.json categories

use anyhow::{Context, Result};
use bazaar_catalog::{category_counts, get_by_id, search, RawParams};
use bazaar_registry_client::{FileSupplier, MetadataSupplier};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bazaar-cli")]
#[command(about = "Search an extension catalog file", long_about = None)]
struct Cli {
    /// Catalog JSON file
    #[arg(short, long, env = "BAZAAR_CATALOG")]
    catalog: PathBuf,

    /// Print compact JSON instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter, sort and paginate the catalog
    Search {
        /// Case-insensitive text matched against name, description and keywords
        #[arg(short, long)]
        search: Option<String>,

        /// Extension type (interface, display, layout, ...)
        #[arg(short = 't', long = "type")]
        extension_type: Option<String>,

        /// popular, recent or downloads
        #[arg(long)]
        sort: Option<String>,

        #[arg(short, long)]
        limit: Option<String>,

        #[arg(short, long)]
        offset: Option<String>,

        /// true or false
        #[arg(long)]
        sandbox: Option<String>,
    },

    /// Print one extension by id
    Show { id: String },

    /// Count extensions per type
    Categories,
}

impl Command {
    fn search_params(&self) -> RawParams {
        let mut raw = RawParams::new();
        if let Command::Search {
            search,
            extension_type,
            sort,
            limit,
            offset,
            sandbox,
        } = self
        {
            let pairs = [
                ("search", search),
                ("type", extension_type),
                ("sort", sort),
                ("limit", limit),
                ("offset", offset),
                ("sandbox", sandbox),
            ];
            for (key, value) in pairs {
                if let Some(value) = value {
                    raw.insert(key, value.as_str());
                }
            }
        }
        raw
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let snapshot = FileSupplier::new(&cli.catalog)
        .snapshot()
        .await
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?;

    match &cli.command {
        cmd @ Command::Search { .. } => {
            let result = search(snapshot.records(), &cmd.search_params())?;
            print_json(&result, cli.compact)
        }
        Command::Show { id } => {
            let record = get_by_id(snapshot.records(), id)?;
            print_json(record, cli.compact)
        }
        Command::Categories => print_json(&category_counts(snapshot.records()), cli.compact),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_catalog::{normalize, SortKey};

    #[test]
    fn search_flags_become_params() {
        let cli = Cli::parse_from([
            "bazaar-cli",
            "--catalog",
            "catalog.json",
            "search",
            "--type",
            "theme",
            "--sort",
            "recent",
            "--limit",
            "3",
        ]);

        let query = normalize(&cli.command.search_params()).unwrap();
        assert_eq!(query.sort, SortKey::Recent);
        assert_eq!(query.limit, 3);
        assert_eq!(query.extension_type.map(|t| t.as_str()), Some("theme"));
    }

    #[test]
    fn show_takes_an_id() {
        let cli = Cli::parse_from(["bazaar-cli", "-c", "catalog.json", "show", "x"]);
        assert!(matches!(cli.command, Command::Show { ref id } if id == "x"));
        assert!(cli.command.search_params().is_empty());
    }
}
