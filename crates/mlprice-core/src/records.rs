/// How a listing is priced, in minor currency units (centavos for BRL).
///
/// A listing either shows one price, or a struck-through original price next
/// to a lowered one. Modelling this as a sum type means a record can never be
/// missing both shapes at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    Regular {
        price: u64,
    },
    /// `original >= price` is expected but not guaranteed; a malformed
    /// results page may violate it.
    Discounted {
        price: u64,
        original: u64,
    },
}

/// A listing scraped from a results page, normalized for sorting and
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRecord {
    /// Destination URL for the listing. `None` when extraction could not
    /// read one; such records are kept in the catalog but never rendered.
    pub link: Option<String>,
    pub pricing: Pricing,
}

impl PriceRecord {
    #[must_use]
    pub fn regular(price: u64, link: Option<String>) -> Self {
        Self {
            link,
            pricing: Pricing::Regular { price },
        }
    }

    #[must_use]
    pub fn discounted(price: u64, original: u64, link: Option<String>) -> Self {
        Self {
            link,
            pricing: Pricing::Discounted { price, original },
        }
    }

    /// The price used for sorting and primary display: the lowered price for
    /// discounted listings, otherwise the single listed price.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        match self.pricing {
            Pricing::Regular { price } | Pricing::Discounted { price, .. } => price,
        }
    }

    #[must_use]
    pub fn is_discounted(&self) -> bool {
        matches!(self.pricing, Pricing::Discounted { .. })
    }

    /// Pre-discount price, or `0` for regular listings.
    #[must_use]
    pub fn original_price(&self) -> u64 {
        match self.pricing {
            Pricing::Regular { .. } => 0,
            Pricing::Discounted { original, .. } => original,
        }
    }
}
