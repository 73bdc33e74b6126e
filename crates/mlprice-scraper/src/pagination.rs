//! Walking search results page by page.
//!
//! [`ResultsPager`] is the contract the crawl loop consumes: the listings on
//! the current page, whether another page exists, and a way to move to it.
//! [`HttpPager`] implements it over plain HTTP by following the pagination
//! "next" link in each page's markup.

use std::collections::HashSet;
use std::future::Future;

use crate::client::{resolve_href, ListingClient};
use crate::error::ScraperError;
use crate::extract::{extract_items, extract_next_page_href};
use crate::types::RawItem;

/// A cursor over consecutive results pages.
pub trait ResultsPager {
    /// Listings on the page the pager is positioned at, in page order.
    fn items(&self) -> &[RawItem];

    /// `true` if a following page exists.
    fn has_next(&self) -> bool;

    /// Moves to the following page. Only valid when [`Self::has_next`] is `true`.
    fn advance(&mut self) -> impl Future<Output = Result<(), ScraperError>> + Send;
}

/// [`ResultsPager`] that fetches pages with a [`ListingClient`].
///
/// A page without a "next" control is the last page. A "next" link pointing
/// at a page already visited also ends pagination, so a site that cycles
/// back to an earlier page cannot keep the crawl running forever.
pub struct HttpPager<'a> {
    client: &'a ListingClient,
    url: String,
    items: Vec<RawItem>,
    next_url: Option<String>,
    visited: HashSet<String>,
}

impl<'a> HttpPager<'a> {
    /// Loads the first results page at `url`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ListingClient::fetch_page`].
    pub async fn open(client: &'a ListingClient, url: &str) -> Result<Self, ScraperError> {
        let mut pager = Self {
            client,
            url: url.to_owned(),
            items: Vec::new(),
            next_url: None,
            visited: HashSet::new(),
        };
        pager.load(url.to_owned()).await?;
        Ok(pager)
    }

    /// URL of the page currently loaded.
    #[must_use]
    pub fn current_url(&self) -> &str {
        &self.url
    }

    async fn load(&mut self, url: String) -> Result<(), ScraperError> {
        let html = self.client.fetch_page(&url).await?;

        self.items = extract_items(&html);
        self.visited.insert(url.clone());
        self.next_url = extract_next_page_href(&html).and_then(|href| {
            match resolve_href(&url, &href) {
                Ok(next) if self.visited.contains(&next) => {
                    tracing::warn!(url = %url, next = %next, "next page already visited; stopping");
                    None
                }
                Ok(next) => Some(next),
                Err(e) => {
                    tracing::warn!(url = %url, href = %href, error = %e, "unusable next page link; stopping");
                    None
                }
            }
        });
        self.url = url;
        Ok(())
    }
}

impl ResultsPager for HttpPager<'_> {
    fn items(&self) -> &[RawItem] {
        &self.items
    }

    fn has_next(&self) -> bool {
        self.next_url.is_some()
    }

    async fn advance(&mut self) -> Result<(), ScraperError> {
        let Some(next) = self.next_url.take() else {
            return Err(ScraperError::NoNextPage {
                url: self.url.clone(),
            });
        };
        self.load(next).await
    }
}
