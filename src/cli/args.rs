//! CLI argument definitions using clap
//!
//! Commands:
//! - podium init --config <path>
//! - podium check --config <path>
//! - podium start --config <path>
//! - podium serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Podium - A read-only Olympic results query service
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the config's dataset file as an empty skeleton
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./podium.json")]
        config: PathBuf,
    },

    /// Load and validate the dataset, print a summary
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./podium.json")]
        config: PathBuf,
    },

    /// Boot and serve the line-delimited JSON protocol on stdin
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./podium.json")]
        config: PathBuf,
    },

    /// Boot and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./podium.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
