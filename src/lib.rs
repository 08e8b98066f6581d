//! Dumb RSS - a static RSS feed aggregator
//!
//! This crate reads categories of feed URLs from a TOML file, fetches and
//! parses each feed in turn, and renders everything into a single
//! `index.html` page.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod parser;
pub mod render;
pub mod site;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::fetcher::{FailurePolicy, Fetcher};

/// Fetch every configured feed, render the page and write it to `output_dir`.
///
/// With [`FailurePolicy::Abort`] nothing is written if any feed fails.
pub async fn build_site(
    fetcher: &Fetcher,
    config: &Config,
    output_dir: &Path,
    policy: FailurePolicy,
) -> anyhow::Result<PathBuf> {
    site::ensure_output_dir(output_dir)?;

    info!(
        "Fetching {} feeds in {} categories",
        config.feed_count(),
        config.categories.len()
    );
    let categories = fetcher.fetch_all(config, policy).await?;

    let html = render::render_document(&categories).context("Failed to render page")?;
    let index = site::write_site(output_dir, &html)?;

    Ok(index)
}
