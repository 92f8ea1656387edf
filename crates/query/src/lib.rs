//! Pure query functions over the catalog index.
//!
//! This crate provides:
//! - `FilterEngine`: the (country, kind) title filter plus per-title
//!   detail and cast lookups
//! - `paginate`: fixed-size slicing of a cast list into actor pages
//!
//! Everything here is a total function over an immutable
//! `Arc<CatalogIndex>`: unknown selections yield empty results, never
//! errors, and nothing mutates shared state.

pub mod filter;
pub mod pagination;

// Re-export main types
pub use filter::FilterEngine;
pub use pagination::{ACTORS_PER_PAGE, paginate};
