//! Configuration-related CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::git::ALLOWED_COMMIT_TYPES;
use crate::utils::Settings;

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the effective configuration as YAML.
    Show(ShowCommand),
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {
    /// Remote override, resolved the same way as for `check`.
    #[arg(long)]
    pub remote: Option<String>,
}

/// Configuration in effect for a check run.
#[derive(Debug, Serialize)]
pub struct EffectiveConfig {
    /// Location of the settings file, whether or not it exists.
    pub settings_path: PathBuf,
    /// Remote the base ref is fetched from.
    pub remote: String,
    /// Accepted conventional commit types.
    pub allowed_commit_types: Vec<String>,
}

impl EffectiveConfig {
    /// Builds the effective configuration from loaded settings.
    pub fn resolve(settings_path: PathBuf, settings: &Settings, remote: Option<&str>) -> Self {
        Self {
            settings_path,
            remote: settings.resolve_remote(remote),
            allowed_commit_types: ALLOWED_COMMIT_TYPES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(),
        }
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        let settings_path = Settings::get_settings_path()?;
        let settings = Settings::load_from_path(&settings_path)?;
        let config = EffectiveConfig::resolve(settings_path, &settings, self.remote.as_deref());

        let yaml = serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
        print!("{yaml}");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn effective_config_yaml() {
        let settings = Settings {
            remote: Some("upstream".to_string()),
            ..Settings::default()
        };
        let config = EffectiveConfig::resolve(
            PathBuf::from("/home/ci/.merge-checks/settings.json"),
            &settings,
            Some("fork"),
        );

        insta::assert_snapshot!(serde_yaml::to_string(&config).unwrap(), @r"
        settings_path: /home/ci/.merge-checks/settings.json
        remote: fork
        allowed_commit_types:
        - chore
        - ci
        - docs
        - feat
        - fix
        - perf
        - refactor
        - style
        - test
        ");
    }
}
