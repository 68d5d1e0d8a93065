//! Profile banner service.
//!
//! Serves a generated SVG banner: a local template with three widget
//! images fetched from their upstreams and inlined as base64 data URLs,
//! so the whole banner renders from a single response.

mod widgets;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::net::SocketAddr;

use widgets::image_data_url;

/// Banner template, embedded at compile time. The `{imageDataOne}` …
/// `{imageDataThree}` placeholders are the substitution contract.
const BANNER_TEMPLATE: &str = include_str!("../../assets/banner.svg");

const PLACEHOLDERS: [&str; 3] = ["{imageDataOne}", "{imageDataTwo}", "{imageDataThree}"];

/// Upstream widgets, in placeholder order: presence card, stats card,
/// top-languages card.
const WIDGET_URLS: [&str; 3] = [
    "https://lanyard-profile-readme.vercel.app/api/303173495918034945?bg=0D1117",
    "https://github-readme-stats.vercel.app/api?username=6ixfalls&theme=github_dark&hide_border=true&border_radius=10&disable_animations=true",
    "https://github-readme-stats.vercel.app/api/top-langs/?username=6ixfalls&theme=github_dark&hide_border=true&layout=compact&border_radius=10",
];

/// Responses stay cacheable at the edge for a few minutes while allowing
/// stale serves during revalidation.
const CACHE_CONTROL: &str = "s-maxage=360, stale-while-revalidate=1000";

/// Serve the banner over HTTP at the given address.
///
/// The rest of the CLI is synchronous, so the async runtime lives only
/// inside this subcommand.
pub fn cmd_banner(addr: SocketAddr) -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    rt.block_on(serve(addr))
}

async fn serve(addr: SocketAddr) -> Result<()> {
    let app = Router::new().route("/", get(banner));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    eprintln!("serving banner on http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn banner() -> Response {
    match compose_banner().await {
        Ok(svg) => (
            [
                (header::CONTENT_TYPE, "image/svg+xml"),
                (header::CACHE_CONTROL, CACHE_CONTROL),
            ],
            svg,
        )
            .into_response(),
        Err(err) => (
            StatusCode::BAD_GATEWAY,
            format!("failed to compose banner: {err:#}"),
        )
            .into_response(),
    }
}

/// Fetch the widgets one after another and substitute them into the
/// template.
async fn compose_banner() -> Result<String> {
    let client = reqwest::Client::new();
    let mut images = Vec::with_capacity(WIDGET_URLS.len());
    for url in WIDGET_URLS {
        images.push(image_data_url(&client, url).await?);
    }
    Ok(inline_widgets(BANNER_TEMPLATE, &images))
}

/// Replace every occurrence of each placeholder with its data URL.
fn inline_widgets(template: &str, images: &[String]) -> String {
    PLACEHOLDERS
        .iter()
        .zip(images)
        .fold(template.to_string(), |svg, (placeholder, data)| {
            svg.replace(placeholder, data)
        })
}
