//! Parser for the raw catalog CSV.
//!
//! The source file is a headered CSV (`title,type,country,cast,...`)
//! with quoted multi-value fields, so parsing goes through the `csv`
//! crate rather than hand-splitting lines. Every field is read as
//! optional text here; interpretation (kind parsing, country splitting,
//! cast normalization) happens during index building.

use crate::error::Result;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One raw CSV row, before any normalization.
///
/// All fields are optional at this stage — schema enforcement (the
/// required title) is the index builder's job, so a parse never fails
/// on missing values, only on malformed CSV itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTitleRow {
    #[serde(default)]
    pub title: Option<String>,
    /// "Movie" / "TV Show" in source data
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Comma-separated country names
    #[serde(default)]
    pub country: Option<String>,
    /// Comma-separated actor names
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    /// Kept as text so a malformed year degrades to `None` instead of
    /// failing the load
    #[serde(default)]
    pub release_year: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

impl RawTitleRow {
    /// Lenient numeric view of the release year.
    pub fn release_year_parsed(&self) -> Option<i32> {
        self.release_year
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
    }
}

/// Read all rows from a CSV file on disk.
pub fn read_rows(path: &Path) -> Result<Vec<RawTitleRow>> {
    let file = std::fs::File::open(path)?;
    let rows = rows_from_reader(file)?;
    debug!(path = %path.display(), rows = rows.len(), "parsed catalog CSV");
    Ok(rows)
}

/// Read all rows from any CSV source (used by tests with in-memory data).
pub fn rows_from_reader<R: Read>(reader: R) -> Result<Vec<RawTitleRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: RawTitleRow = result?;
        rows.push(row);
    }
    Ok(rows)
}
