use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Commit message used when neither `--message` nor `COMMIT_MSG` is set.
pub const DEFAULT_COMMIT_MESSAGE: &str = ":zap: update projects section";
/// README location used when neither `--readme` nor `README_PATH` is set.
pub const DEFAULT_README_PATH: &str = "./README.md";

/// Inputs for one update run, resolved once at startup and passed into
/// the components explicitly.
///
/// Flags win over the environment. The environment names follow the
/// GitHub Actions convention the tool usually runs under:
/// `GH_USERNAME`, `COMMIT_MSG`, `README_PATH`.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub user whose public repositories are listed.
    pub username: String,
    /// Message for the README commit.
    pub commit_message: String,
    /// README file to patch, relative to the working directory.
    pub readme_path: PathBuf,
}

impl Config {
    /// Resolve the run configuration from CLI flags and the environment.
    ///
    /// # Errors
    /// Fails when no username is available from either source.
    pub fn resolve(
        user: Option<String>,
        message: Option<String>,
        readme: Option<PathBuf>,
    ) -> Result<Self> {
        let username = user
            .or_else(|| env_nonempty("GH_USERNAME"))
            .context("no GitHub user given (pass --user or set GH_USERNAME)")?;
        let commit_message = message
            .or_else(|| env_nonempty("COMMIT_MSG"))
            .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string());
        let readme_path = readme
            .or_else(|| env_nonempty("README_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_README_PATH));
        Ok(Self {
            username,
            commit_message,
            readme_path,
        })
    }
}

/// An unset variable and an empty one are treated the same, since Actions
/// passes undeclared inputs through as empty strings.
fn env_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
