//! # Dataflow Crate
//!
//! The reactive core of the catalog explorer: a selection state, the
//! events that mutate it, and a dependency-declared graph that
//! recomputes exactly the outputs affected by each event.
//!
//! ## Components
//!
//! - **state**: `SelectionState` (country/kind/title + the two click
//!   counters) and `SelectionEvent`
//! - **graph**: `SelectionGraph`, the explicit input→output dependency
//!   table, and the `ViewOutputs` snapshot
//! - **map_sync**: `MapSyncBridge`, arbitration between a map click and
//!   the dropdown value
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::CatalogIndex;
//! use dataflow::{SelectionEvent, SelectionGraph};
//! use std::sync::Arc;
//!
//! let index = Arc::new(CatalogIndex::load_from_csv("netflix_titles.csv".as_ref())?);
//! let mut graph = SelectionGraph::new(index);
//!
//! let outputs = graph.apply(SelectionEvent::SelectCountry("Spain".into()));
//! println!("{} titles", outputs.title_options.len());
//! ```

pub mod graph;
pub mod map_sync;
pub mod state;

// Re-export commonly used types
pub use graph::{CountryStats, Input, OutputKind, SelectionGraph, ViewOutputs};
pub use map_sync::MapSyncBridge;
pub use state::{SelectionEvent, SelectionState};
