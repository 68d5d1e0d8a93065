//! Rendering of repositories as `ls -o`-style rows.
//!
//! Each repository becomes one fixed-format line resembling a long
//! directory listing, with the repository name as a link whose extension
//! reflects the primary language. Sizes keep a `$size` placeholder until
//! the whole listing is rendered, so the column can be right-aligned to
//! the widest value.

use chrono::{DateTime, Utc};

use super::github::RepoRecord;
use super::languages::LanguageTable;

/// One rendered row: the size string and the line text with its `$size`
/// placeholder still in place.
#[derive(Debug)]
pub struct FormattedLine {
    size: String,
    text: String,
}

/// All rows of one run plus the width of the widest size string.
#[derive(Debug)]
pub struct Listing {
    lines: Vec<FormattedLine>,
    width: usize,
}

impl Listing {
    /// Final rows with the size column right-aligned.
    pub fn rendered(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|l| l.text.replace("$size", &format!("{:>1$}", l.size, self.width)))
            .collect()
    }
}

/// Render `repos` (already filtered to exclude forks) into a listing.
///
/// The API reports sizes in kibibytes; rows show bytes. Timestamps are
/// the push instant formatted in UTC with English month abbreviations,
/// so two runs over unchanged data render byte-identical rows.
pub fn format_repos(owner: &str, repos: &[RepoRecord], languages: &LanguageTable) -> Listing {
    let owner = owner.to_lowercase();
    let mut width = 1;
    let lines = repos
        .iter()
        .map(|repo| {
            let size = (repo.size * 1024).to_string();
            width = width.max(size.len());
            let text = format!(
                "-rw-r--r-- 1 {} $size {} <a href=\"{}\">{}{}</a>",
                owner,
                date_fields(repo.timestamp()),
                repo.html_url,
                repo.name.to_lowercase(),
                languages.extension_for(repo.language.as_deref()),
            );
            FormattedLine { size, text }
        })
        .collect();
    Listing { lines, width }
}

/// `Mon dd HH:MM`, zero-padded, in UTC.
fn date_fields(ts: DateTime<Utc>) -> String {
    ts.format("%b %d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(name: &str, size: u64, language: Option<&str>) -> RepoRecord {
        let pushed = Utc.with_ymd_and_hms(2024, 3, 7, 13, 5, 0).unwrap();
        RepoRecord {
            name: name.to_string(),
            size,
            html_url: format!("https://github.com/Octocat/{name}"),
            fork: false,
            language: language.map(str::to_string),
            pushed_at: Some(pushed),
            updated_at: pushed,
        }
    }

    fn table() -> LanguageTable {
        [
            ("Rust".to_string(), vec![".rs".to_string()]),
            ("TypeScript".to_string(), vec![".ts".to_string()]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn renders_full_row() {
        let listing = format_repos("Octocat", &[record("Hello-World", 10, Some("Rust"))], &table());
        assert_eq!(
            listing.rendered(),
            vec![
                "-rw-r--r-- 1 octocat 10240 Mar 07 13:05 \
                 <a href=\"https://github.com/Octocat/Hello-World\">hello-world.rs</a>"
                    .to_string()
            ]
        );
    }

    #[test]
    fn size_column_aligns_to_widest_value() {
        let listing = format_repos(
            "octocat",
            &[
                record("big", 1000, Some("Rust")),
                record("small", 1, Some("Rust")),
            ],
            &table(),
        );
        // 1000 KiB -> "1024000" (7 wide), 1 KiB -> "1024" padded to match
        let rows = listing.rendered();
        assert!(rows[0].contains(" 1024000 "));
        assert!(rows[1].contains("    1024 "));
    }

    #[test]
    fn unrecognized_language_uses_fallback_extension() {
        let listing = format_repos("octocat", &[record("notes", 2, Some("Klingon"))], &table());
        assert!(listing.rendered()[0].contains(">notes.txt</a>"));

        let listing = format_repos("octocat", &[record("empty", 2, None)], &table());
        assert!(listing.rendered()[0].contains(">empty.txt</a>"));
    }

    #[test]
    fn empty_input_renders_empty_listing() {
        let listing = format_repos("octocat", &[], &table());
        assert!(listing.rendered().is_empty());
    }
}
