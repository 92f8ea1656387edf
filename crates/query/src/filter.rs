//! The multi-stage title filter.
//!
//! `FilterEngine` answers the three lookups the selection graph needs:
//! titles matching (country, kind), the detail record for a title, and
//! the cast list for a title. All three read the dedup view only; the
//! exploded view exists purely for aggregation.

use data_loader::{CatalogIndex, TitleKind, TitleRecord};
use std::sync::Arc;
use tracing::debug;

/// Pure query functions over a shared, read-only catalog.
#[derive(Clone)]
pub struct FilterEngine {
    index: Arc<CatalogIndex>,
}

impl FilterEngine {
    /// Create a new FilterEngine.
    ///
    /// # Arguments
    /// * `index` - Shared reference to the immutable catalog index
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    /// All deduplicated records whose country list contains `country`
    /// (exact, case-sensitive match) and whose kind equals `kind`.
    ///
    /// Preserves the dataset's original relative ordering. Returns an
    /// empty vector when no country is selected or nothing matches —
    /// never an error.
    pub fn titles_for(&self, country: Option<&str>, kind: TitleKind) -> Vec<&TitleRecord> {
        let Some(country) = country else {
            return Vec::new();
        };

        let matches: Vec<&TitleRecord> = self
            .index
            .titles()
            .iter()
            .filter(|record| record.kind == Some(kind))
            .filter(|record| record.countries.iter().any(|c| c == country))
            .collect();

        debug!(country, %kind, matches = matches.len(), "titles_for");
        matches
    }

    /// The detail record for an exact title, `None` if unknown.
    ///
    /// Post-dedup there is exactly one record per title, so this is the
    /// "first and only" match.
    pub fn details_for(&self, title: &str) -> Option<&TitleRecord> {
        self.index.get_title(title)
    }

    /// The normalized cast for a title, split back into individual
    /// actor names.
    ///
    /// Empty when the title is unknown or its cast is absent.
    pub fn cast_for(&self, title: &str) -> Vec<String> {
        self.index
            .get_title(title)
            .map(TitleRecord::cast_members)
            .unwrap_or_default()
    }
}
