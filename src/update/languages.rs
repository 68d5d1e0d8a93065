use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;

/// Linguist's language registry, the same table GitHub uses to classify
/// repositories.
pub const LANGUAGES_URL: &str =
    "https://raw.githubusercontent.com/github/linguist/master/lib/linguist/languages.yml";

/// Extension used when a repository has no language or an unlisted one.
pub const FALLBACK_EXTENSION: &str = ".txt";

/// One entry of `languages.yml`. Only the extension list matters here;
/// the rest of the entry (type, color, aliases, …) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageEntry {
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Language name → entry lookup, keyed exactly as the API reports
/// repository languages.
#[derive(Debug, Default)]
pub struct LanguageTable(HashMap<String, LanguageEntry>);

impl LanguageTable {
    /// Default file extension for a repository's primary language.
    pub fn extension_for(&self, language: Option<&str>) -> &str {
        language
            .and_then(|l| self.0.get(l))
            .and_then(|e| e.extensions.first())
            .map(String::as_str)
            .unwrap_or(FALLBACK_EXTENSION)
    }
}

impl FromIterator<(String, Vec<String>)> for LanguageTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, extensions)| (name, LanguageEntry { extensions }))
                .collect(),
        )
    }
}

/// Download and parse the language table.
pub fn fetch_language_table(client: &Client, url: &str) -> Result<LanguageTable> {
    let body = client.get(url).send()?.error_for_status()?.text()?;
    let map: HashMap<String, LanguageEntry> =
        serde_yaml::from_str(&body).context("failed to parse languages.yml")?;
    Ok(LanguageTable(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const SAMPLE_YAML: &str = r##"
Rust:
  type: programming
  color: "#dea584"
  extensions:
  - ".rs"
  - ".rs.in"
Text:
  type: prose
"##;

    #[test]
    fn parses_table_and_looks_up_first_extension() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/languages.yml");
            then.status(200).body(SAMPLE_YAML);
        });

        let client = Client::new();
        let table = fetch_language_table(&client, &server.url("/languages.yml")).unwrap();

        assert_eq!(table.extension_for(Some("Rust")), ".rs");
        // Listed language without extensions still falls back.
        assert_eq!(table.extension_for(Some("Text")), FALLBACK_EXTENSION);
    }

    #[test]
    fn unknown_or_absent_language_falls_back() {
        let table: LanguageTable =
            [("Rust".to_string(), vec![".rs".to_string()])].into_iter().collect();
        assert_eq!(table.extension_for(Some("Klingon")), FALLBACK_EXTENSION);
        assert_eq!(table.extension_for(None), FALLBACK_EXTENSION);
    }
}
