//! CLI argument definitions using clap
//!
//! Commands:
//! - rollcall serve [--config <path>] [--host <host>] [--port <port>] [--data-file <path>]
//! - rollcall init [--data-file <path>] [--force]
//! - rollcall list [--data-file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rollcall - a small student registry served over HTTP
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the student API over HTTP
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// JSON file holding the student collection
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Create an empty data file
    Init {
        /// JSON file holding the student collection
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Print the stored students and exit
    List {
        /// JSON file holding the student collection
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
