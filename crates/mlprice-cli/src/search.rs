//! `search` command: crawl results pages for one product and persist the
//! rendered price report.

use std::path::Path;

use anyhow::Context;
use mlprice_core::{render, AppConfig};
use mlprice_scraper::client::search_url;
use mlprice_scraper::{crawl, CrawlOptions, HttpPager, ListingClient};

/// Parameters for one `search` run, resolved from CLI flags and config.
#[derive(Debug)]
pub(crate) struct SearchRequest<'a> {
    pub product: &'a str,
    pub output: &'a Path,
    pub max_pages: usize,
    pub dry_run: bool,
}

/// Crawls every results page for `request.product`, renders the report and
/// writes it to `request.output`.
///
/// When `dry_run` is `true` the report is printed to stdout and nothing is
/// written.
///
/// # Errors
///
/// Returns an error if the search term is empty, the first page cannot be
/// loaded, a later page fails to load, or the report cannot be written.
/// Malformed listings never fail the run.
pub(crate) async fn run_search(
    config: &AppConfig,
    request: &SearchRequest<'_>,
) -> anyhow::Result<()> {
    let url = search_url(&config.base_url, request.product)?;
    let client = ListingClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build listing client")?;

    tracing::info!(product = request.product, url = %url, "starting search");

    let mut pager = HttpPager::open(&client, &url)
        .await
        .with_context(|| format!("failed to load first results page {url}"))?;

    let options = CrawlOptions {
        max_pages: request.max_pages,
        inter_page_delay_ms: config.inter_page_delay_ms,
    };
    let catalog = crawl(&mut pager, &options)
        .await
        .with_context(|| format!("crawl for \"{}\" failed", request.product))?;

    let report = render(&catalog);
    let lines = report.lines().count();
    tracing::info!(records = catalog.len(), lines, "report rendered");

    if request.dry_run {
        println!("{report}");
        return Ok(());
    }

    write_report(request.output, &report)?;
    println!(
        "{lines} products saved to {}",
        request.output.display()
    );

    Ok(())
}

/// Writes `report` to `path`, replacing any existing file.
pub(crate) fn write_report(path: &Path, report: &str) -> anyhow::Result<()> {
    std::fs::write(path, report)
        .with_context(|| format!("failed to write report to {}", path.display()))
}
