//! Materialization of commit history in a (possibly shallow) clone.

use anyhow::{Context, Result};
use tracing::info;

use super::runner::GitRunner;

/// Fetches only the tip of `base_ref` from `remote`.
///
/// Must run before the base revision is resolved so that
/// `<remote>/<base_ref>` exists locally.
pub fn fetch_shallow(runner: &dyn GitRunner, remote: &str, base_ref: &str) -> Result<()> {
    info!("Checking out {base_ref}...");
    runner
        .run(&["fetch", "--depth=1", remote, base_ref])
        .with_context(|| format!("Failed to fetch {base_ref} from {remote}"))?;
    Ok(())
}

/// Returns whether the clone is missing history.
pub fn is_shallow(runner: &dyn GitRunner) -> Result<bool> {
    let answer = runner
        .run(&["rev-parse", "--is-shallow-repository"])
        .context("Failed to determine whether the clone is shallow")?;
    Ok(answer == "true")
}

/// Converts a shallow clone into one with full history.
///
/// A clone that already has full history is left untouched, which keeps
/// repeated runs against the same clone working.
pub fn fetch_full(runner: &dyn GitRunner, remote: &str) -> Result<()> {
    info!("Getting commit list...");
    if !is_shallow(runner)? {
        info!("Clone already has full history, skipping unshallow fetch");
        return Ok(());
    }

    runner
        .run(&["fetch", "--unshallow", remote])
        .with_context(|| format!("Failed to fetch full history from {remote}"))?;
    Ok(())
}
