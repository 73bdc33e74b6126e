//! Raw per-listing fields as read from a results page, before normalization.

/// Price text exactly as displayed on a results page.
///
/// The presence of a struck-through original price is the only signal that a
/// listing is discounted, so the two shapes are separate variants rather than
/// one struct with optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPrice {
    Single {
        price_text: String,
    },
    Discounted {
        original_text: String,
        discounted_text: String,
    },
}

/// One listing as extracted from a results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub price: RawPrice,
    /// Listing URL, `None` if the page did not expose one.
    pub link: Option<String>,
}

impl RawItem {
    #[must_use]
    pub fn single(price_text: impl Into<String>, link: Option<String>) -> Self {
        Self {
            price: RawPrice::Single {
                price_text: price_text.into(),
            },
            link,
        }
    }

    #[must_use]
    pub fn discounted(
        original_text: impl Into<String>,
        discounted_text: impl Into<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            price: RawPrice::Discounted {
                original_text: original_text.into(),
                discounted_text: discounted_text.into(),
            },
            link,
        }
    }
}
