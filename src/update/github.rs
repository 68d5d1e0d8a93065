use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::env;

/// Base URL of the GitHub REST API. Tests point this at a mock server.
pub const GITHUB_API: &str = "https://api.github.com";

/// One public repository, as returned by `GET /users/{user}/repos`.
/// Fetched fresh every run; nothing is cached between runs.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    /// Repository size in kibibytes, as the API reports it.
    pub size: u64,
    pub html_url: String,
    pub fork: bool,
    pub language: Option<String>,
    /// `null` for repositories that have never been pushed.
    pub pushed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl RepoRecord {
    /// Last push time, falling back to the general update time for
    /// never-pushed repositories.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.pushed_at.unwrap_or(self.updated_at)
    }
}

pub fn gh_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static("readme-ls"));
    if let Ok(tok) = env::var("GITHUB_TOKEN") {
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {}", tok))?,
        );
    }
    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

/// Fetch the user's public repositories (first 100, the API page limit).
pub fn fetch_user_repos(client: &Client, base: &str, user: &str) -> Result<Vec<RepoRecord>> {
    let url = format!("{}/users/{}/repos?per_page=100", base, user);
    let repos: Vec<RepoRecord> = client.get(url).send()?.error_for_status()?.json()?;
    Ok(repos)
}
