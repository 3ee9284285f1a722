//! # merge-checks
//!
//! Commit history gate run by CI before a merge. Given a head commit and a
//! base branch it rejects:
//!
//! - leftover `fixup!` / `squash!` commits
//! - merge commits
//! - subjects not in `type(scope): description` form
//!
//! ## Quick Start
//!
//! ```no_run
//! use merge_checks::{CommandRunner, MergeChecker};
//!
//! let runner = CommandRunner::new();
//! let result = MergeChecker::new(&runner, "origin").run("HEAD_SHA", "main")?;
//! println!("{result}");
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod checks;
pub mod cli;
pub mod data;
pub mod git;
pub mod utils;

pub use crate::checks::MergeChecker;
pub use crate::cli::Cli;
pub use crate::data::CheckResult;
pub use crate::git::{CommandRunner, ExternalToolError, GitRunner};
