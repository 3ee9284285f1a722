//! CLI interface for merge-checks.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod config;
pub mod help;

pub use check::CheckCommand;

/// merge-checks: commit history gate for merge requests.
#[derive(Parser)]
#[command(name = "merge-checks")]
#[command(about = "Validates the commit history of a proposed merge", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Checks the commits between a base branch and a head commit.
    Check(check::CheckCommand),
    /// Configuration information.
    Config(config::ConfigCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command and returns the process exit status.
    pub fn execute(self) -> Result<i32> {
        match self.command {
            Commands::Check(check_cmd) => check_cmd.execute(),
            Commands::Config(config_cmd) => config_cmd.execute().map(|()| 0),
            Commands::HelpAll(help_cmd) => help_cmd.execute().map(|()| 0),
        }
    }
}
