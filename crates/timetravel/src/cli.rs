//! Command-line interface for timetravel.

use crate::script::Step;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Timetravel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Play scripted tic-tac-toe games with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a script of steps and print the final state
    Play {
        /// Steps: `<n>` or `click:<n>`, `jump:<m>`, `reset`
        #[arg(allow_negative_numbers = true)]
        steps: Vec<Step>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Path to a TOML engine config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// How the final state is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board grid plus a status summary
    Text,
    /// Serialized game state
    Json,
}
