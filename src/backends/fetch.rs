//! Fetch backend - Retrieve a search results page
//!
//! Pages come either from the dictionary site over HTTP or from a results
//! page previously saved to disk.

use anyhow::{bail, Context, Result};
use reqwest::Url;
use scraper::Html;
use std::path::Path;

use crate::core::model::Query;

/// Search endpoint of Eijiro on the Web
pub const SEARCH_ENDPOINT: &str = "https://eow.alc.co.jp/search";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the search URL for a query.
///
/// The query goes into the `q` parameter with form encoding, so spaces
/// become `+`.
pub fn build_query_url(query: &Query) -> Result<Url> {
    Url::parse_with_params(SEARCH_ENDPOINT, &[("q", query.as_str())])
        .with_context(|| format!("Failed to build search URL for '{}'", query))
}

/// Download and parse the results page for `query`
pub fn fetch_document(query: &Query) -> Result<Html> {
    let url = build_query_url(query)?;
    tracing::debug!(url = %url, "fetching results page");

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url.clone())
        .send()
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Dictionary search error: {} ({})", status, url);
    }

    let body = response
        .text()
        .with_context(|| format!("Failed to read response body from {}", url))?;
    tracing::debug!(bytes = body.len(), "received results page");

    Ok(Html::parse_document(&body))
}

/// Parse a results page saved on disk
pub fn load_document(path: &Path) -> Result<Html> {
    tracing::debug!(path = %path.display(), "loading saved results page");

    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read HTML file: {:?}", path))?;

    Ok(Html::parse_document(&body))
}
