//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dreamlog")]
#[command(about = "Dream journal with mood analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal file (default: DREAMLOG_JOURNAL or dreams.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub journal: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new dream entry
    Add {
        /// Dream description
        text: String,

        /// Entry date in YYYY-MM-DD form (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded entries, most recent first
    List {
        /// Only show entries from a specific date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete the entry with the given number (as shown by `list`)
    Delete {
        /// Entry number, starting at 1
        number: usize,
    },

    /// Delete all entries
    Clear {
        /// Actually delete; without this flag nothing is removed
        #[arg(long)]
        force: bool,
    },

    /// Score all entries and print the mood analysis report
    Analyze,
}

/// Resolve the journal file path: flag, then environment, then default.
pub fn journal_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.journal {
        return path.clone();
    }
    if let Ok(path) = std::env::var("DREAMLOG_JOURNAL") {
        return PathBuf::from(path);
    }
    PathBuf::from("dreams.json")
}
