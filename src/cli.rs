//! Command-line interface definition for Joojit
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the interactive chat loop, session
//! management, export, and analysis.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Joojit - Terminal chat client with a local session ledger
///
/// Chat with a remote agent, persist every exchange locally, and run
/// semantic analysis over stored conversations.
#[derive(Parser, Debug, Clone)]
#[command(name = "joojit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the ledger file path
    #[arg(long, env = "JOOJIT_LEDGER_PATH")]
    pub ledger_path: Option<String>,

    /// Override the endpoint base URL
    #[arg(short, long)]
    pub base: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Joojit
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive chat loop
    Chat {
        /// Initial panel (spores, spiral, throttle)
        #[arg(short, long)]
        panel: Option<String>,
    },

    /// Manage stored sessions
    Sessions {
        /// Session management subcommand
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Export the active session to a .jsonl file
    Export {
        /// Directory to write the export to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run semantic analysis over the active session
    Analyze,
}

/// Session management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SessionCommand {
    /// List all stored sessions
    List,

    /// Erase all stored sessions and start over
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
