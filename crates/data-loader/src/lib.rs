//! # Data Loader Crate
//!
//! This crate handles loading and indexing the raw catalog CSV.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (TitleRecord, TitleKind, ExplodedRow, CatalogIndex)
//! - **parser**: Parse the catalog CSV into raw rows
//! - **index**: Build the dedup and exploded views plus lookups
//! - **aggregates**: Per-country counts over the exploded view
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::CatalogIndex;
//! use std::path::Path;
//!
//! // Load the entire catalog once at startup
//! let index = CatalogIndex::load_from_csv(Path::new("netflix_titles.csv"))?;
//!
//! // Query data
//! let record = index.get_title("Some Film").unwrap();
//! let spain_titles = index.aggregates().count("Spain");
//!
//! println!("{} is from {:?}", record.title, record.countries);
//! ```
//!
//! The index is built once, is immutable afterwards, and is intended to
//! be shared behind an `Arc` across every downstream evaluation.

// Public modules
pub mod aggregates;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use aggregates::CountryAggregates;
pub use error::{CatalogError, Result};
pub use parser::RawTitleRow;
pub use types::{CAST_SEPARATOR, CatalogIndex, ExplodedRow, TitleKind, TitleRecord};
