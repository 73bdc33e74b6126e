//! Accumulating a [`Catalog`] across every results page.

use std::time::Duration;

use mlprice_core::Catalog;

use crate::error::ScraperError;
use crate::normalize::normalize;
use crate::pagination::ResultsPager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Pages read before stopping, including the first. Values below 1 still
    /// read the first page.
    pub max_pages: usize,
    /// Delay between page loads (not applied before the first page).
    pub inter_page_delay_ms: u64,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_pages: 50,
            inter_page_delay_ms: 0,
        }
    }
}

/// Normalizes the listings of every page `pager` yields into one [`Catalog`].
///
/// Pages are read strictly in sequence, starting from the page the pager is
/// already positioned at. Records are appended in page order, then in
/// position order within a page.
///
/// Stops when the pager reports no further page. Reaching
/// `options.max_pages` also stops the crawl; the records gathered so far are
/// returned and a warning is logged.
///
/// # Errors
///
/// Propagates any error from [`ResultsPager::advance`]. Malformed listings
/// never fail the crawl; they normalize to a zero price instead.
pub async fn crawl<P: ResultsPager>(
    pager: &mut P,
    options: &CrawlOptions,
) -> Result<Catalog, ScraperError> {
    let mut catalog = Catalog::new();
    let mut page = 0usize;

    loop {
        page += 1;

        let items = pager.items();
        catalog.extend(items.iter().map(normalize));
        tracing::info!(page, items = items.len(), total = catalog.len(), "page collected");

        if !pager.has_next() {
            break;
        }
        if page >= options.max_pages {
            tracing::warn!(
                max_pages = options.max_pages,
                "page limit reached; stopping with partial catalog"
            );
            break;
        }

        if options.inter_page_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(options.inter_page_delay_ms)).await;
        }
        pager.advance().await?;
    }

    Ok(catalog)
}
