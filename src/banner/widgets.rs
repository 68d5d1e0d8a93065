use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

/// Content type assumed when the upstream response does not declare one.
const DEFAULT_MIME: &str = "image/svg+xml";

/// Fetch a remote widget image and return it as a `data:` URL, keeping
/// the upstream content type in the prefix.
pub async fn image_data_url(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await?
        .error_for_status()
        .with_context(|| format!("widget fetch failed: {}", url))?;
    let mime = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_MIME)
        .to_string();
    let body = resp.bytes().await?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&body)))
}
