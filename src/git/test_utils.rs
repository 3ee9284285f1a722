//! Shared test utilities for the `git` module.

use std::collections::HashMap;
use std::sync::Mutex;

use super::runner::{ExternalToolError, GitRunner};

/// Git runner answering from a fixed table of command lines.
///
/// Commands are keyed by their space-joined arguments, e.g.
/// `"rev-parse origin/main"`. Every invocation is recorded in order so tests
/// can assert which stages of the pipeline actually ran. A command missing
/// from the table fails like a non-zero git exit.
pub(crate) struct ScriptedGitRunner {
    responses: HashMap<String, Result<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGitRunner {
    /// Creates a runner with no scripted responses.
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Scripts a successful response for `command`.
    pub(crate) fn with(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    /// Scripts a failing response for `command`.
    pub(crate) fn failing(mut self, command: &str, stderr: &str) -> Self {
        self.responses
            .insert(command.to_string(), Err(stderr.to_string()));
        self
    }

    /// Returns every command line run so far.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Returns whether any recorded command starts with `prefix`.
    pub(crate) fn ran(&self, prefix: &str) -> bool {
        self.calls().iter().any(|call| call.starts_with(prefix))
    }
}

impl GitRunner for ScriptedGitRunner {
    fn run(&self, args: &[&str]) -> Result<String, ExternalToolError> {
        let command = args.join(" ");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.clone());
        }

        match self.responses.get(&command) {
            Some(Ok(stdout)) => Ok(stdout.trim().to_string()),
            Some(Err(stderr)) => Err(ExternalToolError::Failed {
                command,
                status: "exit status: 128".to_string(),
                stderr: stderr.clone(),
            }),
            None => Err(ExternalToolError::Failed {
                command: command.clone(),
                status: "exit status: 1".to_string(),
                stderr: format!("unscripted command: git {command}"),
            }),
        }
    }
}
