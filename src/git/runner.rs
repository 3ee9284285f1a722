//! Execution of git queries as external processes.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Failure of an external git invocation.
#[derive(Error, Debug)]
pub enum ExternalToolError {
    /// The git process could not be started.
    #[error("failed to execute `git {command}`: {source}")]
    Spawn {
        /// Command line arguments passed to git.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The git process exited with a non-zero status.
    #[error("`git {command}` exited with {status}: {stderr}")]
    Failed {
        /// Command line arguments passed to git.
        command: String,
        /// Exit status as reported by the OS.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}

/// Capability to run a git query and return its trimmed standard output.
///
/// The check pipeline only ever talks to git through this trait, so the
/// orchestration logic can be exercised against a scripted implementation.
pub trait GitRunner {
    /// Runs `git <args>` and returns its standard output with surrounding
    /// whitespace removed.
    fn run(&self, args: &[&str]) -> Result<String, ExternalToolError>;
}

/// Runs git as a child process of the current one.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    workdir: Option<PathBuf>,
}

impl CommandRunner {
    /// Creates a runner that executes git in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner that executes git inside `path`.
    pub fn in_dir<P: AsRef<Path>>(path: P) -> Self {
        Self {
            workdir: Some(path.as_ref().to_path_buf()),
        }
    }
}

impl GitRunner for CommandRunner {
    fn run(&self, args: &[&str]) -> Result<String, ExternalToolError> {
        let command = args.join(" ");
        debug!("Running git {command}");

        let mut git = Command::new("git");
        git.args(args);
        if let Some(dir) = &self.workdir {
            git.current_dir(dir);
        }

        let output = git.output().map_err(|source| ExternalToolError::Spawn {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!("git {command} failed: {stderr}");
            return Err(ExternalToolError::Failed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
