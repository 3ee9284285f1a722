//! Extraction of commit data for a `base..head` range.

use anyhow::{Context, Result};

use super::runner::GitRunner;

/// Resolves `<remote>/<base_ref>` to a commit hash.
pub fn resolve_base_revision(runner: &dyn GitRunner, remote: &str, base_ref: &str) -> Result<String> {
    let tracking_ref = format!("{remote}/{base_ref}");
    runner
        .run(&["rev-parse", &tracking_ref])
        .with_context(|| format!("Failed to resolve {tracking_ref}"))
}

/// Lists the subject line of every commit reachable from `head` but not from
/// `base`, in git log order.
///
/// Each line is prefixed with the commit hash so that an empty subject at
/// either end of the range survives the trimming of the output.
pub fn list_subjects(runner: &dyn GitRunner, head: &str, base: &str) -> Result<Vec<String>> {
    let range = format!("{base}..{head}");
    let output = runner
        .run(&["log", "--pretty=format:%H %s", &range])
        .with_context(|| format!("Failed to list commit subjects for {range}"))?;

    Ok(parse_subject_lines(&output))
}

/// Strips the leading hash from each line of `git log --pretty=format:%H %s`.
pub fn parse_subject_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.split_once(' ').map_or("", |(_, subject)| subject))
        .map(str::to_string)
        .collect()
}

/// Lists the number of parents of every commit in `base..head`, in the same
/// order as [`list_subjects`].
pub fn list_parent_counts(runner: &dyn GitRunner, head: &str, base: &str) -> Result<Vec<usize>> {
    let range = format!("{base}..{head}");
    let output = runner
        .run(&["log", "--pretty=format:%p", &range])
        .with_context(|| format!("Failed to list commit parents for {range}"))?;

    Ok(parse_parent_counts(&output))
}

/// Counts the parent hashes on each line of `git log --pretty=format:%p`.
pub fn parse_parent_counts(output: &str) -> Vec<usize> {
    if output.is_empty() {
        return Vec::new();
    }
    output
        .lines()
        .map(|line| line.split_whitespace().count())
        .collect()
}

/// Returns whether any commit has more than one parent.
pub fn has_merge_commits(parent_counts: &[usize]) -> bool {
    parent_counts.iter().any(|&count| count > 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::git::test_utils::ScriptedGitRunner;

    #[test]
    fn resolves_remote_tracking_ref() {
        let runner = ScriptedGitRunner::new().with("rev-parse origin/base", "base_ref");
        assert_eq!(
            resolve_base_revision(&runner, "origin", "base").unwrap(),
            "base_ref"
        );
    }

    #[test]
    fn unresolvable_ref_is_an_error() {
        let runner = ScriptedGitRunner::new();
        let err = resolve_base_revision(&runner, "origin", "gone").unwrap_err();
        assert_eq!(err.to_string(), "Failed to resolve origin/gone");
    }

    #[test]
    fn subjects_listed_per_line() {
        let runner = ScriptedGitRunner::new().with(
            "log --pretty=format:%H %s base..head",
            "c2 feat(test): we test this\nc1 fixup! feat(test): we test this",
        );
        assert_eq!(
            list_subjects(&runner, "head", "base").unwrap(),
            vec!["feat(test): we test this", "fixup! feat(test): we test this"]
        );
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn empty_range_has_no_subjects() {
        let runner = ScriptedGitRunner::new().with("log --pretty=format:%H %s base..head", "");
        assert!(list_subjects(&runner, "head", "base").unwrap().is_empty());
    }

    #[test]
    fn lone_empty_subject_is_kept() {
        // git prints "<hash> " and the runner trims the trailing space
        let runner = ScriptedGitRunner::new().with("log --pretty=format:%H %s base..head", "c1 ");
        assert_eq!(list_subjects(&runner, "head", "base").unwrap(), vec![""]);
    }

    #[test]
    fn empty_subjects_at_range_ends_are_kept() {
        assert_eq!(
            parse_subject_lines("c3\nc2 feat(core): ok\nc1"),
            vec!["", "feat(core): ok", ""]
        );
        assert_eq!(
            parse_subject_lines("c2 fix(core): keep  inner  spacing\nc1 "),
            vec!["fix(core): keep  inner  spacing", ""]
        );
    }

    #[test]
    fn single_parent_is_not_a_merge() {
        let runner = ScriptedGitRunner::new().with("log --pretty=format:%p base..head", "parent_1");
        let counts = list_parent_counts(&runner, "head", "base").unwrap();
        assert_eq!(counts, vec![1]);
        assert!(!has_merge_commits(&counts));
    }

    #[test]
    fn two_parents_is_a_merge() {
        let runner =
            ScriptedGitRunner::new().with("log --pretty=format:%p base..head", "parent_1 parent_2");
        let counts = list_parent_counts(&runner, "head", "base").unwrap();
        assert_eq!(counts, vec![2]);
        assert!(has_merge_commits(&counts));
    }

    #[test]
    fn parent_counts_follow_log_order() {
        assert_eq!(parse_parent_counts("a1\nb1 b2\nc1"), vec![1, 2, 1]);
        assert_eq!(parse_parent_counts(""), Vec::<usize>::new());
        assert!(!has_merge_commits(&[]));
    }
}
