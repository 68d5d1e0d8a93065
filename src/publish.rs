use anyhow::Result;
use std::path::Path;

use crate::shell::run_checked;

/// Committer identity for the automated commit. The email keeps the
/// GitHub Actions bot association so the commit does not count towards
/// the user's contribution graph.
const BOT_EMAIL: &str = "41898282+github-actions[bot]@users.noreply.github.com";
const BOT_NAME: &str = "readme-bot";

/// Stage the README, commit it, and push to the current remote.
///
/// Steps run strictly in order; the first failure aborts the rest and
/// carries the exit code up. A no-op commit ("nothing to commit") passes,
/// so re-running against an already-committed README is harmless.
///
/// There is no rollback: a failed push leaves the README written and
/// possibly committed locally.
pub fn publish_readme(readme: &Path, commit_message: &str) -> Result<()> {
    let readme = readme.to_string_lossy();
    run_checked("git", &["config", "--global", "user.email", BOT_EMAIL])?;
    run_checked("git", &["config", "--global", "user.name", BOT_NAME])?;
    run_checked("git", &["add", readme.as_ref()])?;
    run_checked("git", &["commit", "-m", commit_message])?;
    run_checked("git", &["push"])?;
    Ok(())
}
