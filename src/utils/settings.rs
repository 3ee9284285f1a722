//! Settings and configuration utilities.
//!
//! Settings are read from $HOME/.merge-checks/settings.json. Its `env` table
//! acts as a fallback for environment variables, which CI runners cannot
//! always set per job.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Remote the base ref is fetched from when nothing else is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Environment variable overriding the remote.
pub const REMOTE_ENV_VAR: &str = "MERGE_CHECKS_REMOTE";

/// Settings loaded from $HOME/.merge-checks/settings.json.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Remote to fetch the base ref from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    /// Environment variable fallbacks.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // A missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".merge-checks").join("settings.json"))
    }

    fn env_or_setting(&self, key: &str, from_env: Option<String>) -> Option<String> {
        from_env.or_else(|| self.env.get(key).cloned())
    }

    /// Resolves the remote to fetch from.
    ///
    /// Precedence: `cli_override`, then [`REMOTE_ENV_VAR`], then the
    /// `remote` setting, then [`DEFAULT_REMOTE`].
    pub fn resolve_remote(&self, cli_override: Option<&str>) -> String {
        self.resolve_remote_with_env(cli_override, env::var(REMOTE_ENV_VAR).ok())
    }

    fn resolve_remote_with_env(&self, cli_override: Option<&str>, from_env: Option<String>) -> String {
        cli_override
            .map(String::from)
            .or_else(|| self.env_or_setting(REMOTE_ENV_VAR, from_env))
            .or_else(|| self.remote.clone())
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string())
    }
}

/// Returns an environment variable with fallback to the settings file.
pub fn get_env_var(key: &str) -> Result<String> {
    if let Ok(value) = env::var(key) {
        return Ok(value);
    }

    match Settings::load() {
        Ok(settings) => settings
            .env
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Environment variable not found: {}", key)),
        Err(err) => Err(anyhow::anyhow!("Environment variable not found: {}", key).context(err)),
    }
}
