//! Merge check pipeline.
//!
//! The checks run in a fixed, cost-ascending order and stop at the first
//! violation:
//!
//! 1. fetch the tip of the base ref and resolve it
//! 2. stop successfully when head is the base revision
//! 3. fetch full history and list the subjects of `base..head`
//! 4. reject `fixup!` / `squash!` commits
//! 5. reject merge commits
//! 6. reject subjects that are not `type(scope): description`

use anyhow::Result;
use tracing::{info, warn};

use crate::data::check::{
    CheckKind, CheckResult, ALL_PASSED_REASON, INVALID_FORMAT_REASON, MERGE_COMMITS_REASON,
    NO_COMMITS_REASON,
};
use crate::git::commit::{invalid_subjects, AutosquashCounts, ALLOWED_COMMIT_TYPES};
use crate::git::{history, range, GitRunner};

/// Runs the merge checks against a clone through a [`GitRunner`].
pub struct MergeChecker<'a> {
    runner: &'a dyn GitRunner,
    remote: String,
}

impl<'a> MergeChecker<'a> {
    /// Creates a checker that fetches the base ref from `remote`.
    pub fn new(runner: &'a dyn GitRunner, remote: impl Into<String>) -> Self {
        Self {
            runner,
            remote: remote.into(),
        }
    }

    /// Validates the commits between `base_ref` and `head_hash`.
    ///
    /// Policy violations come back as a failing [`CheckResult`]; an error is
    /// only returned when a git invocation fails.
    pub fn run(&self, head_hash: &str, base_ref: &str) -> Result<CheckResult> {
        history::fetch_shallow(self.runner, &self.remote, base_ref)?;
        let base_hash = range::resolve_base_revision(self.runner, &self.remote, base_ref)?;

        if head_hash == base_hash {
            warn!("HEAD identical with {base_ref}, no commits to check");
            return Ok(CheckResult::pass(NO_COMMITS_REASON));
        }

        history::fetch_full(self.runner, &self.remote)?;
        let subjects = range::list_subjects(self.runner, head_hash, &base_hash)?;
        info!("Found {} commits to check", subjects.len());

        if let Some(result) = self.check_fixups(&subjects) {
            return Ok(result);
        }
        if let Some(result) = self.check_merge_commits(head_hash, &base_hash)? {
            return Ok(result);
        }
        if let Some(result) = self.check_message_format(&subjects) {
            return Ok(result);
        }

        Ok(CheckResult::pass(ALL_PASSED_REASON))
    }

    fn check_fixups(&self, subjects: &[String]) -> Option<CheckResult> {
        let counts = AutosquashCounts::from_subjects(subjects);
        if counts.any() {
            let reason = format!(
                "{} fixup and {} squash commits found",
                counts.fixups, counts.squashes
            );
            warn!("{} check failed: {reason}", CheckKind::FixupSquash);
            return Some(CheckResult::fail(CheckKind::FixupSquash, reason));
        }

        info!("No fixups or squashes found, check passed!");
        None
    }

    fn check_merge_commits(&self, head_hash: &str, base_hash: &str) -> Result<Option<CheckResult>> {
        let parent_counts = range::list_parent_counts(self.runner, head_hash, base_hash)?;
        if range::has_merge_commits(&parent_counts) {
            warn!("{} check failed: {MERGE_COMMITS_REASON}", CheckKind::MergeCommits);
            return Ok(Some(CheckResult::fail(
                CheckKind::MergeCommits,
                MERGE_COMMITS_REASON,
            )));
        }

        info!("Branch does not contain merge commits, check passed!");
        Ok(None)
    }

    fn check_message_format(&self, subjects: &[String]) -> Option<CheckResult> {
        let invalid = invalid_subjects(subjects);
        if !invalid.is_empty() {
            warn!(
                "{} check failed, allowed types: {}\n{}",
                CheckKind::MessageFormat,
                ALLOWED_COMMIT_TYPES.join(", "),
                invalid.join("\n")
            );
            return Some(CheckResult::fail(
                CheckKind::MessageFormat,
                INVALID_FORMAT_REASON,
            ));
        }

        info!("Commit messages are correct, check passed!");
        None
    }
}
