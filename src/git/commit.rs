//! Commit subject classification.

use std::sync::LazyLock;

use regex::Regex;

/// Conventional commit types accepted in a subject line.
pub const ALLOWED_COMMIT_TYPES: &[&str] = &[
    "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "style", "test",
];

/// Marker left by `git commit --fixup`.
pub const FIXUP_MARKER: &str = "fixup!";

/// Marker left by `git commit --squash`.
pub const SQUASH_MARKER: &str = "squash!";

static CONVENTIONAL_SUBJECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({})\([a-z\d-]+\): .+",
        ALLOWED_COMMIT_TYPES.join("|")
    ))
    .unwrap_or_else(|e| panic!("invalid conventional subject pattern: {e}"))
});

/// Classification of a subject marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `fixup!`
    Fixup,
    /// `squash!`
    Squash,
    /// Anything else.
    Regular,
}

impl MarkerKind {
    /// Classifies a marker by exact match against the autosquash markers.
    pub fn classify(marker: &str) -> Self {
        match marker {
            FIXUP_MARKER => Self::Fixup,
            SQUASH_MARKER => Self::Squash,
            _ => Self::Regular,
        }
    }
}

/// Returns the leading whitespace-delimited token of a subject.
///
/// A subject without whitespace is its own marker, including the empty
/// subject.
pub fn extract_marker(subject: &str) -> &str {
    subject.split_whitespace().next().unwrap_or(subject)
}

/// Checks a full subject line against `type(scope): description`.
pub fn matches_conventional_format(subject: &str) -> bool {
    CONVENTIONAL_SUBJECT_PATTERN.is_match(subject)
}

/// Counts of autosquash markers across a set of subjects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutosquashCounts {
    /// Subjects whose marker is `fixup!`.
    pub fixups: usize,
    /// Subjects whose marker is `squash!`.
    pub squashes: usize,
}

impl AutosquashCounts {
    /// Tallies the markers of `subjects`.
    pub fn from_subjects<S: AsRef<str>>(subjects: &[S]) -> Self {
        subjects
            .iter()
            .fold(Self::default(), |mut counts, subject| {
                match MarkerKind::classify(extract_marker(subject.as_ref())) {
                    MarkerKind::Fixup => counts.fixups += 1,
                    MarkerKind::Squash => counts.squashes += 1,
                    MarkerKind::Regular => {}
                }
                counts
            })
    }

    /// Returns whether any fixup or squash marker was seen.
    pub fn any(&self) -> bool {
        self.fixups > 0 || self.squashes > 0
    }
}

/// Returns the subjects that do not follow the conventional format.
pub fn invalid_subjects<S: AsRef<str>>(subjects: &[S]) -> Vec<&str> {
    subjects
        .iter()
        .map(|subject| subject.as_ref())
        .filter(|subject| !matches_conventional_format(subject))
        .collect()
}
