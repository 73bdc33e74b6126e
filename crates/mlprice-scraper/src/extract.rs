//! Extraction of raw listings from a search results page.
//!
//! Works on the server-rendered results markup:
//!
//! ```text
//! <li class="ui-search-layout__item">
//!   <a href="https://produto.mercadolivre.com.br/...">...</a>
//!   <s class="andes-money-amount andes-money-amount--previous">
//!     <span class="andes-money-amount__fraction">1.299</span>
//!   </s>
//!   <span class="andes-money-amount">
//!     <span class="andes-money-amount__fraction">999</span>
//!   </span>
//! </li>
//! ```
//!
//! A price inside `<s>` is the struck-through original price. Its presence is
//! what marks a listing as discounted.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::types::RawItem;

static ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".ui-search-layout__item").expect("valid selector"));
static PRICE_FRACTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".andes-money-amount__fraction").expect("valid selector"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));
static NEXT_PAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("li.andes-pagination__button--next a[href]").expect("valid selector")
});

/// Extracts every listing on a results page, in page order.
///
/// Entries without any current price (ads, placeholders) are skipped. An
/// entry without a link is kept with `link: None`.
#[must_use]
pub fn extract_items(html: &str) -> Vec<RawItem> {
    let document = Html::parse_document(html);
    document
        .select(&ITEM_SELECTOR)
        .filter_map(extract_item)
        .collect()
}

/// Returns the `href` of the pagination "next" control, if the page has one.
///
/// The value is returned as written in the markup and may be relative.
#[must_use]
pub fn extract_next_page_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&NEXT_PAGE_SELECTOR)
        .find_map(|anchor| non_empty_attr(anchor, "href"))
}

fn extract_item(item: ElementRef<'_>) -> Option<RawItem> {
    let mut current: Option<String> = None;
    let mut original: Option<String> = None;

    for fraction in item.select(&PRICE_FRACTION_SELECTOR) {
        let text = element_text(fraction);
        if is_struck_through(fraction, item) {
            original.get_or_insert(text);
        } else {
            current.get_or_insert(text);
        }
    }

    let link = item
        .select(&LINK_SELECTOR)
        .find_map(|anchor| non_empty_attr(anchor, "href"));

    let Some(current) = current else {
        tracing::debug!(?link, "skipping result entry without a price");
        return None;
    };

    Some(match original {
        Some(original) => RawItem::discounted(original, current, link),
        None => RawItem::single(current, link),
    })
}

/// `true` if `element` sits inside an `<s>` tag within `item`.
fn is_struck_through(element: ElementRef<'_>, item: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .take_while(|node| node.id() != item.id())
        .any(|node| {
            node.value()
                .as_element()
                .is_some_and(|el| el.name() == "s")
        })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

fn non_empty_attr(element: ElementRef<'_>, attr: &str) -> Option<String> {
    element
        .value()
        .attr(attr)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
