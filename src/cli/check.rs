//! Check command: runs the merge checks for a head commit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::checks::MergeChecker;
use crate::data::check::{CheckResult, OutputFormat};
use crate::git::CommandRunner;
use crate::utils::Settings;

/// Check command options.
#[derive(Parser)]
pub struct CheckCommand {
    /// Commit hash of the branch tip under test.
    #[arg(value_name = "HEAD_HASH")]
    pub head_hash: String,

    /// Branch the candidate is merged into (e.g. main).
    #[arg(value_name = "BASE_REF")]
    pub base_ref: String,

    /// Remote to fetch the base branch from (defaults to settings, then origin).
    #[arg(long)]
    pub remote: Option<String>,

    /// Repository clone to check (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl CheckCommand {
    /// Executes the check command and returns the process exit status.
    pub fn execute(self) -> Result<i32> {
        let output_format: OutputFormat = self.format.parse().unwrap_or_default();

        let settings = Settings::load()?;
        let remote = settings.resolve_remote(self.remote.as_deref());

        let runner = match &self.repo {
            Some(dir) => CommandRunner::in_dir(dir),
            None => CommandRunner::new(),
        };

        info!(
            "Checking {} against {remote}/{}",
            self.head_hash, self.base_ref
        );
        let result = MergeChecker::new(&runner, remote).run(&self.head_hash, &self.base_ref)?;

        println!("{}", render_result(&result, output_format)?);
        Ok(result.exit_code())
    }
}

/// Renders a check result in the requested format.
pub fn render_result(result: &CheckResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to serialize result to JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(result)
            .map(|yaml| yaml.trim_end().to_string())
            .context("Failed to serialize result to YAML"),
    }
}
