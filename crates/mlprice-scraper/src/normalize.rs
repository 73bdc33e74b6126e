//! Normalization from [`RawItem`] to [`mlprice_core::PriceRecord`].
//!
//! Price text on the results page is an integer display with an optional
//! thousands separator (`"1.234"`), with no fractional suffix. Every digit in
//! the text is kept and read as a count of minor currency units; this is an
//! assumption about the observed listing format, not a general currency rule.

use mlprice_core::PriceRecord;

use crate::types::{RawItem, RawPrice};

/// Parses displayed price text into minor currency units.
///
/// All non-digit characters are dropped before parsing, so separators and
/// currency symbols are ignored. Returns `None` when no digits remain or the
/// value does not fit in a `u64`.
#[must_use]
pub fn parse_price_minor(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Normalizes a raw listing into a [`PriceRecord`].
///
/// Never fails: price text that does not reduce to digits becomes `0`, so one
/// malformed listing cannot abort a crawl.
#[must_use]
pub fn normalize(raw: &RawItem) -> PriceRecord {
    let link = raw.link.clone();
    match &raw.price {
        RawPrice::Single { price_text } => {
            PriceRecord::regular(price_or_zero(price_text, "price"), link)
        }
        RawPrice::Discounted {
            original_text,
            discounted_text,
        } => PriceRecord::discounted(
            price_or_zero(discounted_text, "discounted price"),
            price_or_zero(original_text, "original price"),
            link,
        ),
    }
}

fn price_or_zero(text: &str, field: &'static str) -> u64 {
    parse_price_minor(text).unwrap_or_else(|| {
        tracing::debug!(field, text, "unparsable price text, using 0");
        0
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
