//! Rendering of a [`Catalog`] into the plain-text price report.
//!
//! One line per linked record, cheapest first:
//!
//! ```text
//! Price: R$ 9,99, Link: https://...
//! Price (discount - 20%): R$ 80,00, Original Price: R$ 100,00, Link: https://...
//! ```

use crate::catalog::Catalog;
use crate::currency::CurrencyFormat;
use crate::records::{PriceRecord, Pricing};

/// Renders `catalog` with [`CurrencyFormat::BRL`].
///
/// See [`render_with`].
#[must_use]
pub fn render(catalog: &Catalog) -> String {
    render_with(catalog, &CurrencyFormat::BRL)
}

/// Renders `catalog` as report text using `currency` for amounts.
///
/// Records are ordered by effective price ascending with a stable sort, so
/// equal prices keep their arrival order. Records without a link produce no
/// line. An empty result is an empty string, never an error.
///
/// The catalog is not reordered in place; calling this twice on the same
/// catalog yields identical text.
#[must_use]
pub fn render_with(catalog: &Catalog, currency: &CurrencyFormat) -> String {
    let mut ordered: Vec<&PriceRecord> = catalog.all().iter().collect();
    ordered.sort_by_key(|record| record.effective_price());

    ordered
        .into_iter()
        .filter_map(|record| render_line(record, currency))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats one report line, or `None` if the record has no link.
fn render_line(record: &PriceRecord, currency: &CurrencyFormat) -> Option<String> {
    let link = record.link.as_deref()?;

    let line = match record.pricing {
        Pricing::Discounted { price, original } => match discount_percent(price, original) {
            Some(percent) => format!(
                "Price (discount - {percent}%): {}, Original Price: {}, Link: {link}",
                currency.format(price),
                currency.format(original),
            ),
            // No meaningful percentage against a zero original price; fall
            // back to the regular layout.
            None => regular_line(price, link, currency),
        },
        Pricing::Regular { price } => regular_line(price, link, currency),
    };

    Some(line)
}

fn regular_line(price: u64, link: &str, currency: &CurrencyFormat) -> String {
    format!("Price: {}, Link: {link}", currency.format(price))
}

/// Percentage saved relative to `original`, rounded half-up to a whole number.
///
/// Returns `None` when `original` is zero. The result is negative when a
/// malformed listing shows an "original" price below the current one.
#[must_use]
pub fn discount_percent(price: u64, original: u64) -> Option<i64> {
    if original == 0 {
        return None;
    }

    // round(100 * (original - price) / original) == floor((200d + o) / 2o)
    let original = i128::from(original);
    let saved = original - i128::from(price);
    let rounded = (200 * saved + original).div_euclid(2 * original);

    Some(i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX }))
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
