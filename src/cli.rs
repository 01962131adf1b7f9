//! Command-line interface definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fuzzy launcher for browser bookmarks
#[derive(Parser, Debug)]
#[command(name = "markq", version, about, long_about = None)]
pub struct Cli {
    /// Path to the browser's bookmark store (overrides the configured path)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub bookmarks: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive picker (the default when no command is given)
    Open,
    /// Print matching bookmarks without entering the picker
    List {
        /// Query to filter by; all bookmarks when omitted
        query: Option<String>,
    },
}
