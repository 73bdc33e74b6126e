pub mod client;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pagination;
pub mod types;

pub use client::ListingClient;
pub use crawl::{crawl, CrawlOptions};
pub use error::ScraperError;
pub use normalize::{normalize, parse_price_minor};
pub use pagination::{HttpPager, ResultsPager};
pub use types::{RawItem, RawPrice};
