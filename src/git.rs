//! Git queries used by the merge checks.

pub mod commit;
pub mod history;
pub mod range;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_utils;

pub use commit::{extract_marker, matches_conventional_format, MarkerKind, ALLOWED_COMMIT_TYPES};
pub use runner::{CommandRunner, ExternalToolError, GitRunner};
