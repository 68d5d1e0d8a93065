mod github;
mod languages;
mod listing;

use anyhow::{Result, bail};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::config::Config;
use crate::publish::publish_readme;
use crate::readme::{Document, PatchOutcome};
use github::{GITHUB_API, RepoRecord, fetch_user_repos, gh_client};
use languages::{LANGUAGES_URL, fetch_language_table};
use listing::format_repos;

/// Refresh the projects section of the README and push the change.
///
/// High-level flow:
/// 1. Fetch the user's public repositories and drop forks.
/// 2. Fetch linguist's language table for name extensions.
/// 3. Render the listing and splice it between the README markers.
/// 4. If the section actually changed, write the file and run the
///    git publish sequence; otherwise stop after the comparison.
///
/// Every step is sequential and awaited to completion; a run either
/// finishes or fails at the first broken step. Repository data is never
/// cached — each run starts from a fresh listing.
pub fn cmd_update(cfg: Config) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.enable_steady_tick(Duration::from_millis(200));
    pb.set_message(format!("fetching repositories for {}…", cfg.username));

    let client = gh_client()?;
    let repos = fetch_user_repos(&client, GITHUB_API, &cfg.username)?;
    pb.set_message(format!(
        "repositories for {}: {} found",
        cfg.username,
        repos.len()
    ));

    let sources: Vec<RepoRecord> = repos.into_iter().filter(|r| !r.fork).collect();
    if sources.is_empty() {
        pb.set_style(err_style());
        pb.finish_with_message("no repositories found");
        bail!("No Repositories found");
    }
    if sources.len() < 5 {
        pb.println(format!("{}", "found less than 5 repositories".yellow()));
    }

    pb.set_message("fetching language extensions…");
    let languages = fetch_language_table(&client, LANGUAGES_URL)?;

    let rows = format_repos(&cfg.username, &sources, &languages).rendered();

    pb.set_message(format!("updating {}…", cfg.readme_path.display()));
    let mut doc = Document::load(&cfg.readme_path)?;
    let outcome = doc.patch_projects(&rows)?;

    if outcome == PatchOutcome::Unchanged {
        pb.set_style(ok_style());
        pb.finish_with_message("no changes detected");
        return Ok(());
    }

    doc.save(&cfg.readme_path)?;

    pb.set_message("committing and pushing…");
    publish_readme(&cfg.readme_path, &cfg.commit_message)?;

    pb.set_style(ok_style());
    pb.finish_with_message(match outcome {
        PatchOutcome::Bootstrapped => "wrote to README",
        _ => "updated README with GitHub repositories",
    });
    println!("{}", "pushed to remote repository".green());
    Ok(())
}

/// Yellow spinner shown while a step is in flight.
fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("\x1b[33m{spinner}\x1b[0m {wide_msg}")
        .unwrap()
        .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"])
}

/// Green check mark for a finished run.
fn ok_style() -> ProgressStyle {
    ProgressStyle::with_template("\x1b[32m✔\x1b[0m {wide_msg}").unwrap()
}

/// Red cross for a failed run.
fn err_style() -> ProgressStyle {
    ProgressStyle::with_template("\x1b[31m✘\x1b[0m {wide_msg}").unwrap()
}
