//! Selection state and the events that mutate it.
//!
//! The state is the full set of user-chosen inputs: country, kind,
//! title, and the two pagination click counters. Each event mutates
//! only its own field; there is no cross-field reset (selecting a new
//! country leaves the selected title and the counters alone — see the
//! graph docs).

use data_loader::TitleKind;
use serde::{Deserialize, Serialize};

/// Snapshot of the current user selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_country: Option<String>,
    /// Defaults to `Movie`, matching the type filter's initial value
    pub selected_kind: TitleKind,
    pub selected_title: Option<String>,
    /// Total "previous page" clicks; monotonically non-decreasing
    pub prev_clicks: u64,
    /// Total "next page" clicks; monotonically non-decreasing
    pub next_clicks: u64,
}

impl SelectionState {
    /// The derived actor page index: `max(0, next_clicks - prev_clicks)`.
    ///
    /// Floored at zero but with no upper clamp — the counters are the
    /// literal paging mechanism, and advancing past the last page is
    /// allowed (it yields an empty page downstream).
    pub fn page_index(&self) -> usize {
        self.next_clicks.saturating_sub(self.prev_clicks) as usize
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_country: None,
            selected_kind: TitleKind::Movie,
            selected_title: None,
            prev_clicks: 0,
            next_clicks: 0,
        }
    }
}

/// One logical input event entering the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    SelectCountry(String),
    SelectKind(TitleKind),
    SelectTitle(String),
    /// A click on the map at the named location
    MapClick(String),
    PrevActorsPage,
    NextActorsPage,
}
