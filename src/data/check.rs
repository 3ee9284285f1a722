//! Check result types for merge validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reason reported when head and base are the same commit.
pub const NO_COMMITS_REASON: &str = "No commits to check";

/// Reason reported when the range contains merge commits.
pub const MERGE_COMMITS_REASON: &str = "Contains merge commits";

/// Reason reported when at least one subject is malformed.
pub const INVALID_FORMAT_REASON: &str = "Invalid commit message format found";

/// Reason reported when every check passes.
pub const ALL_PASSED_REASON: &str = "All checks passed";

/// The individual checks, in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// No `fixup!` or `squash!` commits.
    FixupSquash,
    /// No commit with more than one parent.
    MergeCommits,
    /// Every subject follows `type(scope): description`.
    MessageFormat,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixupSquash => write!(f, "fixup/squash"),
            Self::MergeCommits => write!(f, "merge commits"),
            Self::MessageFormat => write!(f, "message format"),
        }
    }
}

/// Outcome of one invocation of the merge checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the merge may proceed.
    pub passed: bool,
    /// Human-readable explanation of the outcome.
    pub reason: String,
    /// The check that failed, absent when `passed` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_check: Option<CheckKind>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            reason: reason.into(),
            failed_check: None,
        }
    }

    /// Creates a failing result attributed to `check`.
    pub fn fail(check: CheckKind, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: reason.into(),
            failed_check: Some(check),
        }
    }

    /// Process exit status for this result.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.passed { "✅" } else { "❌" };
        write!(f, "{icon} {}", self.reason)
    }
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
