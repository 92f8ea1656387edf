//! Core domain types for the catalog.
//!
//! The catalog is built from raw tabular records and exposed through two
//! derived views:
//! - a deduplicated-by-title view (`CatalogIndex::titles`) used for every
//!   per-title lookup, and
//! - an exploded-by-country view (`CatalogIndex::exploded_rows`) used only
//!   for country aggregation.

use crate::aggregates::CountryAggregates;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Separator used when rejoining a normalized cast list.
///
/// `cast_for`-style lookups re-split on this exact string, so it must
/// match what the normalizer writes.
pub const CAST_SEPARATOR: &str = ", ";

// =============================================================================
// Title Types
// =============================================================================

/// The two kinds of title in the catalog.
///
/// Source data carries these as the strings `"Movie"` and `"TV Show"`;
/// anything else is treated as an unknown kind (`None` on the record),
/// which simply never matches a kind filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleKind {
    Movie,
    TvShow,
}

impl TitleKind {
    /// Parse the source-data spelling of a kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Movie" => Some(TitleKind::Movie),
            "TV Show" => Some(TitleKind::TvShow),
            _ => None,
        }
    }
}

impl fmt::Display for TitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleKind::Movie => write!(f, "Movie"),
            TitleKind::TvShow => write!(f, "TV Show"),
        }
    }
}

/// One deduplicated catalog record.
///
/// Identity is the title string: after loading there is exactly one
/// record per distinct title, and the first-seen raw row wins when the
/// source contained duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRecord {
    /// Unique title name (required in source data)
    pub title: String,
    /// `None` when the source carried an unknown or missing type string
    pub kind: Option<TitleKind>,
    /// Countries the title is associated with; empty when the source
    /// field was missing
    pub countries: Vec<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
    /// Free-form duration ("90 min", "2 Seasons", ...)
    pub duration: Option<String>,
    pub rating: Option<String>,
    /// Normalized cast: unique actor names, alphabetically sorted,
    /// joined with [`CAST_SEPARATOR`]. `None` when the source had no
    /// cast value — an absent cast stays absent, it is never turned
    /// into an empty string.
    pub cast: Option<String>,
}

impl TitleRecord {
    /// Split the normalized cast back into individual actor names.
    ///
    /// Returns an empty vector when the cast is absent.
    pub fn cast_members(&self) -> Vec<String> {
        match &self.cast {
            Some(cast) => cast.split(CAST_SEPARATOR).map(str::to_string).collect(),
            None => Vec::new(),
        }
    }
}

/// One (title, single country) pair from the exploded view.
///
/// A record listing N countries produces N of these; a record with no
/// countries produces none. Used only for counting, never for detail
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplodedRow {
    pub title: String,
    pub country: String,
}

// =============================================================================
// CatalogIndex - The Core In-Memory Catalog
// =============================================================================

/// The immutable, load-once catalog index.
///
/// Built once at startup from the raw source rows and shared read-only
/// (typically behind an `Arc`) for the life of the process. There is no
/// mutation API: every downstream "change" (filtering, pagination) is a
/// new derived value, never a write into this structure.
#[derive(Debug)]
pub struct CatalogIndex {
    /// Deduplicated records in first-seen source order
    pub(crate) titles: Vec<TitleRecord>,
    /// Title name -> position in `titles`, for O(1) detail lookups
    pub(crate) title_lookup: HashMap<String, usize>,
    /// Exploded-by-country view of the same records
    pub(crate) exploded: Vec<ExplodedRow>,
    /// Per-country counts and the sorted selectable country list,
    /// computed from `exploded` at load time
    pub(crate) aggregates: CountryAggregates,
}

impl CatalogIndex {
    /// All deduplicated records, in the dataset's original relative order.
    pub fn titles(&self) -> &[TitleRecord] {
        &self.titles
    }

    /// Look up a record by exact title.
    ///
    /// Returns `None` for an unknown title — unknown selections are an
    /// empty result, not an error.
    pub fn get_title(&self, title: &str) -> Option<&TitleRecord> {
        self.title_lookup.get(title).map(|&i| &self.titles[i])
    }

    /// The exploded (title, country) view used for aggregation.
    pub fn exploded_rows(&self) -> &[ExplodedRow] {
        &self.exploded
    }

    /// Load-time country aggregates.
    pub fn aggregates(&self) -> &CountryAggregates {
        &self.aggregates
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.titles.len(), self.exploded.len())
    }
}
