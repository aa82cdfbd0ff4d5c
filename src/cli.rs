//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `vepfs-ext`.
#[derive(Debug, Parser)]
#[command(name = "vepfs-ext", version, about = "vePFS control-plane extensions")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a data-insight (Lens) task.
    CreateLensTask {
        /// JSON file holding the request; omitted fields take default values.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Print the built request instead of sending it.
        #[arg(long)]
        dry_run: bool,
        /// Serve the response from a recorded cassette instead of the network.
        #[arg(long, value_name = "CASSETTE", conflicts_with = "dry_run")]
        replay: Option<PathBuf>,
    },
}
