//! CatalogIndex building logic.
//!
//! Turns raw CSV rows into the two derived views the rest of the
//! workspace queries:
//! - the dedup view: one `TitleRecord` per distinct title, first-seen
//!   row wins, original relative order preserved;
//! - the exploded view: one `(title, country)` row per listed country,
//!   feeding the country aggregates.
//!
//! The only fatal condition is a record without a title; every other
//! missing field degrades to an explicit absent value.

use crate::aggregates::CountryAggregates;
use crate::error::{CatalogError, Result};
use crate::parser::{self, RawTitleRow};
use crate::types::{CAST_SEPARATOR, CatalogIndex, ExplodedRow, TitleKind, TitleRecord};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

impl CatalogIndex {
    /// Load the catalog from a CSV file and build all indexes.
    ///
    /// This is the main entry point. The index is built once here and
    /// never mutated afterwards.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        let rows = parser::read_rows(path)?;
        let index = Self::from_rows(rows)?;

        let (titles, exploded) = index.counts();
        info!(
            path = %path.display(),
            titles,
            exploded_rows = exploded,
            countries = index.aggregates.countries().len(),
            "catalog index built"
        );
        Ok(index)
    }

    /// Build the index from already-parsed rows.
    ///
    /// Steps:
    /// 1. Convert each raw row to a `TitleRecord` (cast normalization,
    ///    country splitting, kind parsing) — in parallel, since rows are
    ///    independent.
    /// 2. Deduplicate by title, first-seen record wins.
    /// 3. Explode the deduplicated records into (title, country) pairs.
    /// 4. Compute country aggregates from the exploded view.
    pub fn from_rows(rows: Vec<RawTitleRow>) -> Result<Self> {
        let records: Vec<TitleRecord> = rows
            .into_par_iter()
            .enumerate()
            .map(|(i, raw)| convert_row(i + 1, raw))
            .collect::<Result<Vec<_>>>()?;

        // Dedup by title, keeping first-seen order.
        let mut titles: Vec<TitleRecord> = Vec::with_capacity(records.len());
        let mut title_lookup: HashMap<String, usize> = HashMap::with_capacity(records.len());
        for record in records {
            if title_lookup.contains_key(&record.title) {
                continue;
            }
            title_lookup.insert(record.title.clone(), titles.len());
            titles.push(record);
        }

        // Records with no countries contribute nothing here but stay in
        // the dedup view above.
        let exploded: Vec<ExplodedRow> = titles
            .iter()
            .flat_map(|record| {
                record.countries.iter().map(|country| ExplodedRow {
                    title: record.title.clone(),
                    country: country.clone(),
                })
            })
            .collect();

        let aggregates = CountryAggregates::from_exploded(&exploded);

        Ok(Self {
            titles,
            title_lookup,
            exploded,
            aggregates,
        })
    }
}

/// Convert one raw row, enforcing the title requirement.
fn convert_row(record: usize, raw: RawTitleRow) -> Result<TitleRecord> {
    let title = match raw.title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return Err(CatalogError::MissingTitle { record }),
    };

    Ok(TitleRecord {
        title,
        kind: raw.kind.as_deref().and_then(TitleKind::parse),
        countries: split_countries(raw.country.as_deref()),
        director: raw.director.clone(),
        release_year: raw.release_year_parsed(),
        duration: raw.duration.clone(),
        rating: raw.rating.clone(),
        cast: raw.cast.as_deref().map(normalize_cast),
    })
}

/// Split a comma-separated country field into trimmed names.
///
/// A missing field yields an empty list; empty fragments (stray commas)
/// are dropped.
pub fn split_countries(field: Option<&str>) -> Vec<String> {
    match field {
        Some(field) => field
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Normalize a cast field: trim each name, drop duplicates and empty
/// fragments, sort alphabetically, rejoin with [`CAST_SEPARATOR`].
///
/// Idempotent: normalizing an already-normalized value returns it
/// unchanged.
pub fn normalize_cast(cast: &str) -> String {
    let mut names: Vec<&str> = cast
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    names.sort_unstable();
    names.dedup();
    names.join(CAST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: Option<&str>, country: Option<&str>, cast: Option<&str>) -> RawTitleRow {
        RawTitleRow {
            title: title.map(str::to_string),
            kind: Some("Movie".to_string()),
            country: country.map(str::to_string),
            cast: cast.map(str::to_string),
            ..RawTitleRow::default()
        }
    }

    #[test]
    fn test_normalize_cast_idempotent() {
        let once = normalize_cast("B, A, A");
        assert_eq!(once, "A, B");
        assert_eq!(normalize_cast(&once), "A, B");
    }

    #[test]
    fn test_normalize_cast_trims_and_sorts() {
        assert_eq!(
            normalize_cast("  Zoe Z ,Amy A,  Mid M  "),
            "Amy A, Mid M, Zoe Z"
        );
    }

    #[test]
    fn test_split_countries() {
        assert_eq!(
            split_countries(Some("Spain, France ,Japan")),
            vec!["Spain", "France", "Japan"]
        );
        assert!(split_countries(None).is_empty());
        assert!(split_countries(Some("  ")).is_empty());
    }

    #[test]
    fn test_missing_title_is_fatal() {
        let rows = vec![raw(Some("Good"), None, None), raw(None, None, None)];
        let err = CatalogIndex::from_rows(rows).unwrap_err();
        assert!(matches!(err, CatalogError::MissingTitle { record: 2 }));
    }

    #[test]
    fn test_empty_title_is_fatal() {
        let rows = vec![raw(Some("   "), None, None)];
        assert!(matches!(
            CatalogIndex::from_rows(rows),
            Err(CatalogError::MissingTitle { record: 1 })
        ));
    }

    #[test]
    fn test_missing_cast_stays_absent() {
        let rows = vec![raw(Some("No Cast"), Some("Spain"), None)];
        let index = CatalogIndex::from_rows(rows).unwrap();

        let record = index.get_title("No Cast").unwrap();
        assert!(record.cast.is_none());
        assert!(record.cast_members().is_empty());
    }

    #[test]
    fn test_dedup_first_seen_wins() {
        let rows = vec![
            raw(Some("Twice"), Some("Spain"), Some("B, A")),
            raw(Some("Twice"), Some("France"), Some("Z, Y")),
        ];
        let index = CatalogIndex::from_rows(rows).unwrap();

        assert_eq!(index.titles().len(), 1);
        let record = index.get_title("Twice").unwrap();
        assert_eq!(record.cast.as_deref(), Some("A, B"));
        assert_eq!(record.countries, vec!["Spain"]);
    }

    #[test]
    fn test_zero_country_record_survives_dedup_view() {
        let rows = vec![raw(Some("Nowhere"), None, Some("A"))];
        let index = CatalogIndex::from_rows(rows).unwrap();

        assert!(index.get_title("Nowhere").is_some());
        assert!(index.exploded_rows().is_empty());
    }

    #[test]
    fn test_explosion_and_aggregates() {
        let rows = vec![
            raw(Some("A"), Some("Spain, France"), None),
            raw(Some("B"), Some("Spain"), None),
            raw(Some("C"), None, None),
        ];
        let index = CatalogIndex::from_rows(rows).unwrap();

        // 2 + 1 + 0 exploded rows
        assert_eq!(index.exploded_rows().len(), 3);
        assert_eq!(index.aggregates().count("Spain"), 2);
        assert_eq!(index.aggregates().count("France"), 1);
        assert_eq!(index.aggregates().total(), 3);
        assert_eq!(index.aggregates().countries(), &["France", "Spain"]);
    }

    #[test]
    fn test_unknown_kind_degrades_to_none() {
        let mut row = raw(Some("Odd"), None, None);
        row.kind = Some("Documentary Special".to_string());
        let index = CatalogIndex::from_rows(vec![row]).unwrap();

        assert!(index.get_title("Odd").unwrap().kind.is_none());
    }
}
