//! Dictionary lookup command

use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::backends::fetch::{fetch_document, load_document};
use crate::core::model::Query;
use crate::core::render::LookupConfig;
use crate::dictionary::document::{strip_noise, Selectors};
use crate::dictionary::format::PageRenderer;

/// Where the results page comes from
#[derive(Debug, Clone, Copy)]
pub enum PageSource<'a> {
    /// Query the dictionary site
    Remote(&'a Query),
    /// Read a saved results page
    File(&'a Path),
}

/// Run a lookup and print the results to stdout
pub fn run_lookup(source: PageSource<'_>, config: LookupConfig) -> Result<()> {
    config.apply_color();

    let selectors = Selectors::new()?;
    let mut doc = match source {
        PageSource::Remote(query) => fetch_document(query)?,
        PageSource::File(path) => load_document(path)?,
    };

    let stripped = strip_noise(&mut doc, &selectors);
    tracing::debug!(stripped, range = %config.range, "prepared results page");

    if doc.select(&selectors.results).next().is_none() {
        tracing::warn!("results page has no #resultsList container");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let summary = PageRenderer::new(&selectors)
        .render_page(&doc, config.range, &mut out)
        .context("Failed to write results")?;
    out.flush().context("Failed to flush output")?;

    tracing::debug!(
        entries = summary.entries,
        suggestions = summary.suggestion_blocks,
        "rendered results page"
    );

    Ok(())
}
