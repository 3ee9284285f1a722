//! Data structures reported by the merge checks.

pub mod check;

pub use check::{CheckKind, CheckResult, OutputFormat};
