//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stratum - provider schema inspection
#[derive(Parser, Debug)]
#[command(name = "stratum")]
#[command(about = "Inspect provider capabilities and configuration schemas", long_about = None)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch and print normalized provider configuration schemas as JSON
    Schema {
        /// Provider manifests (defaults to every manifest in the provider directory)
        #[arg(value_name = "MANIFEST")]
        manifests: Vec<PathBuf>,

        /// Print compact JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
    /// Report whether each provider declares schema support, and why
    Sniff {
        /// Provider manifests (defaults to every manifest in the provider directory)
        #[arg(value_name = "MANIFEST")]
        manifests: Vec<PathBuf>,
    },
}
