//! Accumulation of normalized records across result pages.

use crate::records::PriceRecord;

/// Ordered, append-only collection of [`PriceRecord`]s for one crawl run.
///
/// Records keep their arrival order (page by page, then position within the
/// page). Nothing is filtered or deduplicated here: records without a link
/// and repeated links are both kept, and left for the reporter to decide on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<PriceRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PriceRecord) {
        self.records.push(record);
    }

    /// All records in arrival order.
    #[must_use]
    pub fn all(&self) -> &[PriceRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Extend<PriceRecord> for Catalog {
    fn extend<I: IntoIterator<Item = PriceRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl FromIterator<PriceRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
