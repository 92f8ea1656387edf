//! Country aggregation over the exploded view.
//!
//! Computed once at load time and read-only thereafter, like the rest of
//! the index. Each exploded row contributes exactly one count to its
//! country, so the sum of all counts equals the number of exploded rows.

use crate::types::ExplodedRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-country title counts plus the selectable country list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryAggregates {
    counts: HashMap<String, u64>,
    /// Distinct country names, lexicographically sorted
    countries: Vec<String>,
}

impl CountryAggregates {
    /// Build aggregates from the exploded (title, country) view.
    pub fn from_exploded(rows: &[ExplodedRow]) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for row in rows {
            *counts.entry(row.country.clone()).or_insert(0) += 1;
        }

        let mut countries: Vec<String> = counts.keys().cloned().collect();
        countries.sort_unstable();

        Self { counts, countries }
    }

    /// Number of exploded rows for a country, 0 for an unknown name.
    pub fn count(&self, country: &str) -> u64 {
        self.counts.get(country).copied().unwrap_or(0)
    }

    /// All per-country counts.
    pub fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    /// Sorted distinct country names for selection.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Total across all countries; equals the exploded row count.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
