//! End-to-end event tests: raw rows in, one event at a time through the
//! graph, outputs checked after each step.

use data_loader::{CatalogIndex, RawTitleRow, TitleKind};
use dataflow::{OutputKind, SelectionEvent, SelectionGraph};
use std::sync::Arc;

fn raw(title: &str, kind: &str, country: &str, cast: &str) -> RawTitleRow {
    RawTitleRow {
        title: Some(title.to_string()),
        kind: Some(kind.to_string()),
        country: (!country.is_empty()).then(|| country.to_string()),
        cast: (!cast.is_empty()).then(|| cast.to_string()),
        director: Some("Someone".to_string()),
        release_year: Some("2020".to_string()),
        duration: Some("90 min".to_string()),
        rating: Some("PG".to_string()),
    }
}

fn big_cast(n: usize) -> String {
    (0..n)
        .map(|i| format!("Actor {i:02}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn fixture_graph() -> SelectionGraph {
    let rows = vec![
        raw("A", "Movie", "Spain", &big_cast(25)),
        raw("B", "Movie", "Spain, France", "Solo Star"),
        raw("C", "TV Show", "Spain", "X, Y, Z"),
        raw("D", "Movie", "France", ""),
    ];
    SelectionGraph::new(Arc::new(CatalogIndex::from_rows(rows).unwrap()))
}

#[test]
fn country_selection_drives_stats_and_titles() {
    let mut graph = fixture_graph();

    let outputs = graph.apply(SelectionEvent::SelectCountry("Spain".to_string()));

    let stats = outputs.country_stats.unwrap();
    assert_eq!(stats.movies, 2);
    assert_eq!(stats.tv_shows, 1);
    assert_eq!(outputs.title_options, vec!["A", "B"]);
    assert_eq!(outputs.dropdown_value.as_deref(), Some("Spain"));
}

#[test]
fn initial_outputs_are_empty_but_consistent() {
    let graph = fixture_graph();
    let outputs = graph.outputs();

    assert_eq!(outputs.country_options, vec!["France", "Spain"]);
    assert!(outputs.country_stats.is_none());
    assert!(outputs.title_options.is_empty());
    assert!(outputs.title_details.is_none());
    assert!(outputs.actor_page.is_empty());
    assert!(outputs.dropdown_value.is_none());
}

#[test]
fn kind_switch_refilters_titles_only() {
    let mut graph = fixture_graph();
    graph.apply(SelectionEvent::SelectCountry("Spain".to_string()));

    let outputs = graph.apply(SelectionEvent::SelectKind(TitleKind::TvShow));
    assert_eq!(outputs.title_options, vec!["C"]);
    assert_eq!(graph.last_recomputed(), &[OutputKind::TitleOptions]);
}

#[test]
fn title_selection_populates_details_and_first_page() {
    let mut graph = fixture_graph();
    graph.apply(SelectionEvent::SelectCountry("Spain".to_string()));

    let outputs = graph.apply(SelectionEvent::SelectTitle("A".to_string()));

    let details = outputs.title_details.as_ref().unwrap();
    assert_eq!(details.title, "A");
    assert_eq!(details.kind, Some(TitleKind::Movie));
    assert_eq!(outputs.actor_page.len(), 10);
    assert_eq!(outputs.actor_page[0], "Actor 00");
}

#[test]
fn pagination_walks_and_falls_off_the_end() {
    let mut graph = fixture_graph();
    graph.apply(SelectionEvent::SelectTitle("A".to_string()));

    // 25 actors: pages of 10, 10, 5, then empty forever.
    let page1 = graph.apply(SelectionEvent::NextActorsPage).actor_page.clone();
    assert_eq!(page1[0], "Actor 10");

    let page2 = graph.apply(SelectionEvent::NextActorsPage).actor_page.clone();
    assert_eq!(page2.len(), 5);
    assert_eq!(page2[4], "Actor 24");

    // No upper clamp: past the end is an empty page, no error.
    assert!(graph.apply(SelectionEvent::NextActorsPage).actor_page.is_empty());
    assert!(graph.apply(SelectionEvent::NextActorsPage).actor_page.is_empty());

    // Only the actor page is touched by a counter event.
    assert_eq!(graph.last_recomputed(), &[OutputKind::ActorPage]);
}

#[test]
fn prev_clicks_floor_the_page_at_zero() {
    let mut graph = fixture_graph();
    graph.apply(SelectionEvent::SelectTitle("A".to_string()));

    graph.apply(SelectionEvent::PrevActorsPage);
    graph.apply(SelectionEvent::PrevActorsPage);
    let outputs = graph.apply(SelectionEvent::PrevActorsPage);

    // Still page 0; the counters themselves keep counting.
    assert_eq!(outputs.actor_page[0], "Actor 00");
    assert_eq!(graph.state().prev_clicks, 3);
    assert_eq!(graph.state().page_index(), 0);

    // One forward click does not move off page 0 yet.
    let outputs = graph.apply(SelectionEvent::NextActorsPage);
    assert_eq!(outputs.actor_page[0], "Actor 00");
}

#[test]
fn map_click_overrides_dropdown_and_cascades() {
    let mut graph = fixture_graph();
    graph.apply(SelectionEvent::SelectCountry("France".to_string()));

    let outputs = graph.apply(SelectionEvent::MapClick("Spain".to_string()));

    assert_eq!(outputs.dropdown_value.as_deref(), Some("Spain"));
    let stats = outputs.country_stats.unwrap();
    assert_eq!(stats.movies, 2);
    assert_eq!(outputs.title_options, vec!["A", "B"]);
}

#[test]
fn map_click_on_current_country_recomputes_only_dropdown() {
    let mut graph = fixture_graph();
    graph.apply(SelectionEvent::SelectCountry("Spain".to_string()));

    graph.apply(SelectionEvent::MapClick("Spain".to_string()));
    assert_eq!(graph.last_recomputed(), &[OutputKind::DropdownValue]);
}

#[test]
fn country_change_does_not_invalidate_title_or_counters() {
    let mut graph = fixture_graph();
    graph.apply(SelectionEvent::SelectCountry("Spain".to_string()));
    graph.apply(SelectionEvent::SelectTitle("A".to_string()));
    graph.apply(SelectionEvent::NextActorsPage);

    let outputs = graph.apply(SelectionEvent::SelectCountry("France".to_string())).clone();

    // The selected title is not cleared even though "A" is not a French
    // title; details and pagination stay put.
    assert_eq!(graph.state().selected_title.as_deref(), Some("A"));
    assert_eq!(graph.state().next_clicks, 1);
    assert_eq!(outputs.title_details.as_ref().unwrap().title, "A");
    assert_eq!(outputs.actor_page[0], "Actor 10");

    // But the country-dependent outputs did move.
    assert_eq!(outputs.title_options, vec!["B", "D"]);
}

#[test]
fn selecting_title_with_absent_cast_yields_empty_page() {
    let mut graph = fixture_graph();
    let outputs = graph.apply(SelectionEvent::SelectTitle("D".to_string()));

    assert!(outputs.actor_page.is_empty());
    assert!(outputs.title_details.as_ref().unwrap().cast.is_none());
}

#[test]
fn unknown_title_selection_is_not_an_error() {
    let mut graph = fixture_graph();
    let outputs = graph.apply(SelectionEvent::SelectTitle("Nope".to_string()));

    assert!(outputs.title_details.is_none());
    assert!(outputs.actor_page.is_empty());
}
