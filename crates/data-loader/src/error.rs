//! Error types for the data-loader crate.
//!
//! All query-side operations in this workspace are total; errors only
//! exist at load time. The one fatal schema condition is a record with
//! no usable title, since the title is the dedup identity for the whole
//! catalog.

use thiserror::Error;

/// Errors that can occur while loading and indexing the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record had no `title` value (absent or empty after trimming).
    ///
    /// The title is the unique identity of a record; without it the row
    /// cannot participate in deduplication or any lookup, so the load
    /// aborts instead of guessing.
    #[error("Record {record} has no title; title is required")]
    MissingTitle { record: usize },

    /// I/O error while reading the source file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (bad quoting, inconsistent field counts, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
