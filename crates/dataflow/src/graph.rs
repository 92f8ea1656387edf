//! # Selection Graph
//!
//! The dataflow evaluator wiring one input event to the recomputation
//! of every dependent output:
//! 1. The event mutates its own piece of `SelectionState`
//! 2. The set of changed inputs is determined (a map click may also
//!    change the country, via `MapSyncBridge`)
//! 3. Exactly the outputs whose declared inputs intersect that set are
//!    recomputed from the immutable catalog
//! 4. The refreshed `ViewOutputs` snapshot is handed back as plain data
//!
//! The dependency table is explicit (`OutputKind::dependencies`) so the
//! recomputation scope is inspectable and testable, instead of being
//! implied by callback registration order.
//!
//! There is intentionally no cross-field invalidation: selecting a new
//! country does not clear the selected title or the click counters, so
//! the title details may reference a title outside the new country.
//! That mirrors the reference behavior and is covered by tests.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::map_sync::MapSyncBridge;
use crate::state::{SelectionEvent, SelectionState};
use data_loader::{CatalogIndex, TitleKind, TitleRecord};
use query::{ACTORS_PER_PAGE, FilterEngine, paginate};

// =============================================================================
// Dependency declarations
// =============================================================================

/// The logical inputs an output can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    SelectedCountry,
    SelectedKind,
    SelectedTitle,
    PrevClicks,
    NextClicks,
    MapClick,
}

/// The recomputable outputs of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputKind {
    CountryStats,
    TitleOptions,
    TitleDetails,
    ActorPage,
    DropdownValue,
}

impl OutputKind {
    pub const ALL: [OutputKind; 5] = [
        OutputKind::CountryStats,
        OutputKind::TitleOptions,
        OutputKind::TitleDetails,
        OutputKind::ActorPage,
        OutputKind::DropdownValue,
    ];

    /// The declared inputs this output is a pure function of.
    pub fn dependencies(self) -> &'static [Input] {
        match self {
            OutputKind::CountryStats => &[Input::SelectedCountry],
            OutputKind::TitleOptions => &[Input::SelectedKind, Input::SelectedCountry],
            OutputKind::TitleDetails => &[Input::SelectedTitle],
            OutputKind::ActorPage => {
                &[Input::SelectedTitle, Input::PrevClicks, Input::NextClicks]
            }
            OutputKind::DropdownValue => &[Input::MapClick, Input::SelectedCountry],
        }
    }

    fn depends_on_any(self, changed: &[Input]) -> bool {
        self.dependencies().iter().any(|dep| changed.contains(dep))
    }
}

// =============================================================================
// Outputs
// =============================================================================

/// Movie/TV counts for the selected country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryStats {
    pub movies: usize,
    pub tv_shows: usize,
}

/// The full output snapshot consumed by the presentation layer.
///
/// Plain data only — absent values stay absent (`None`/empty) and are
/// never defaulted to display text here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewOutputs {
    /// Selectable countries, sorted; static for the life of the graph
    pub country_options: Vec<String>,
    /// `None` until a country is selected
    pub country_stats: Option<CountryStats>,
    /// Titles matching the current (country, kind) selection
    pub title_options: Vec<String>,
    /// Detail record for the selected title, `None` if unselected or
    /// unknown
    pub title_details: Option<TitleRecord>,
    /// The current page of actor names
    pub actor_page: Vec<String>,
    /// The resolved country dropdown value
    pub dropdown_value: Option<String>,
}

// =============================================================================
// SelectionGraph
// =============================================================================

/// Synchronous dataflow evaluator over one `SelectionState`.
///
/// Events are processed to completion one at a time; every `apply`
/// leaves a consistent `ViewOutputs` snapshot behind. The catalog is
/// shared read-only, so evaluation never mutates anything another
/// output depends on.
pub struct SelectionGraph {
    engine: FilterEngine,
    state: SelectionState,
    outputs: ViewOutputs,
    last_recomputed: Vec<OutputKind>,
}

impl SelectionGraph {
    /// Create a graph over a loaded catalog, with the default selection
    /// state and all outputs freshly computed.
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        let country_options = index.aggregates().countries().to_vec();
        let mut graph = Self {
            engine: FilterEngine::new(index),
            state: SelectionState::default(),
            outputs: ViewOutputs {
                country_options,
                ..ViewOutputs::default()
            },
            last_recomputed: Vec::new(),
        };
        graph.recompute(&[], true);
        graph
    }

    /// Current selection state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Current output snapshot.
    pub fn outputs(&self) -> &ViewOutputs {
        &self.outputs
    }

    /// The outputs recomputed by the most recent `apply`.
    pub fn last_recomputed(&self) -> &[OutputKind] {
        &self.last_recomputed
    }

    /// Process one event: mutate the state, then recompute exactly the
    /// outputs whose declared inputs changed.
    pub fn apply(&mut self, event: SelectionEvent) -> &ViewOutputs {
        let changed = self.apply_to_state(event);
        self.recompute(&changed, false);
        &self.outputs
    }

    /// Mutate the state for one event and report which inputs changed.
    fn apply_to_state(&mut self, event: SelectionEvent) -> Vec<Input> {
        match event {
            SelectionEvent::SelectCountry(country) => {
                self.state.selected_country = Some(country);
                vec![Input::SelectedCountry]
            }
            SelectionEvent::SelectKind(kind) => {
                self.state.selected_kind = kind;
                vec![Input::SelectedKind]
            }
            SelectionEvent::SelectTitle(title) => {
                self.state.selected_title = Some(title);
                vec![Input::SelectedTitle]
            }
            SelectionEvent::MapClick(location) => {
                // The click wins over the prior dropdown value; if that
                // actually moves the country, country-dependent outputs
                // cascade too.
                let resolved = MapSyncBridge::resolve_country(
                    Some(&location),
                    self.state.selected_country.as_deref(),
                );
                let mut changed = vec![Input::MapClick];
                if resolved != self.state.selected_country {
                    self.state.selected_country = resolved;
                    changed.push(Input::SelectedCountry);
                }
                changed
            }
            SelectionEvent::PrevActorsPage => {
                self.state.prev_clicks += 1;
                vec![Input::PrevClicks]
            }
            SelectionEvent::NextActorsPage => {
                self.state.next_clicks += 1;
                vec![Input::NextClicks]
            }
        }
    }

    /// Recompute the outputs whose dependencies intersect `changed`
    /// (or all of them when `force` is set, for initialization).
    fn recompute(&mut self, changed: &[Input], force: bool) {
        self.last_recomputed.clear();
        for output in OutputKind::ALL {
            if !force && !output.depends_on_any(changed) {
                continue;
            }
            match output {
                OutputKind::CountryStats => self.recompute_country_stats(),
                OutputKind::TitleOptions => self.recompute_title_options(),
                OutputKind::TitleDetails => self.recompute_title_details(),
                OutputKind::ActorPage => self.recompute_actor_page(),
                OutputKind::DropdownValue => self.recompute_dropdown_value(),
            }
            self.last_recomputed.push(output);
        }
        debug!(?changed, recomputed = ?self.last_recomputed, "graph evaluated");
    }

    fn recompute_country_stats(&mut self) {
        let country = self.state.selected_country.as_deref();
        self.outputs.country_stats = country.map(|c| CountryStats {
            movies: self.engine.titles_for(Some(c), TitleKind::Movie).len(),
            tv_shows: self.engine.titles_for(Some(c), TitleKind::TvShow).len(),
        });
    }

    fn recompute_title_options(&mut self) {
        self.outputs.title_options = self
            .engine
            .titles_for(
                self.state.selected_country.as_deref(),
                self.state.selected_kind,
            )
            .iter()
            .map(|record| record.title.clone())
            .collect();
    }

    fn recompute_title_details(&mut self) {
        self.outputs.title_details = self
            .state
            .selected_title
            .as_deref()
            .and_then(|title| self.engine.details_for(title))
            .cloned();
    }

    fn recompute_actor_page(&mut self) {
        self.outputs.actor_page = match self.state.selected_title.as_deref() {
            Some(title) => {
                let cast = self.engine.cast_for(title);
                paginate(&cast, self.state.page_index(), ACTORS_PER_PAGE).to_vec()
            }
            None => Vec::new(),
        };
    }

    fn recompute_dropdown_value(&mut self) {
        self.outputs.dropdown_value = self.state.selected_country.clone();
    }
}
