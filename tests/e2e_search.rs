// PlantTox - tests/e2e_search.rs
//
// End-to-end tests for the load, search and export pipeline.
//
// These tests read a real dataset file from tests/fixtures, run searches
// through the same state object the GUI uses, and write exports to a
// temporary directory. No mocks.

use planttox::app::session;
use planttox::app::state::AppState;
use planttox::core::dataset::parse_dataset;
use planttox::core::export::{export_csv, export_html};
use planttox::core::filter::RowFilterer;
use planttox::platform::config::AppConfig;
use planttox::platform::fs::read_dataset_file;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_sample() -> AppState {
    let mut state = AppState::new(&AppConfig::default());
    state
        .load_dataset(&fixture("plants_sample.json"))
        .expect("fixture should load");
    state
}

fn visible_names(filterer: &RowFilterer) -> Vec<&str> {
    filterer
        .visible_rows()
        .map(|(_, row)| row.record.name.as_str())
        .collect()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn e2e_fixture_loads_without_warnings() {
    let path = fixture("plants_sample.json");
    let content = read_dataset_file(&path).unwrap();
    let (dataset, warnings) = parse_dataset(&content, &path).unwrap();

    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.animals, vec!["cats", "dogs", "horses"]);
}

#[test]
fn e2e_empty_query_shows_every_plant() {
    let state = load_sample();
    assert_eq!(state.filterer.visible_count(), 5);
    assert!(!state.filterer.no_results());
    assert_eq!(state.count_summary(), "5/5 plants");
}

// =============================================================================
// Searching
// =============================================================================

#[test]
fn e2e_search_is_case_insensitive_substring() {
    let mut state = load_sample();

    state.search_text = "LILY".to_string();
    state.apply_search();
    assert_eq!(
        visible_names(&state.filterer),
        vec!["Lily of the Valley", "Easter Lily"]
    );

    state.search_text = "the val".to_string();
    state.apply_search();
    assert_eq!(visible_names(&state.filterer), vec!["Lily of the Valley"]);
}

#[test]
fn e2e_search_matches_scientific_and_common_names() {
    let mut state = load_sample();

    state.search_text = "ivy".to_string();
    state.apply_search();
    assert_eq!(
        visible_names(&state.filterer),
        vec!["Golden Pothos", "Spider Plant"]
    );

    state.search_text = "rosa".to_string();
    state.apply_search();
    assert_eq!(visible_names(&state.filterer), vec!["Rose"]);
}

#[test]
fn e2e_clinical_signs_are_not_searched() {
    let mut state = load_sample();
    state.search_text = "vomiting".to_string();
    state.apply_search();
    assert!(state.filterer.no_results());
    assert_eq!(state.filterer.visible_count(), 0);
}

#[test]
fn e2e_unmatched_query_then_clear() {
    let mut state = load_sample();
    state.search_text = "zzzzz".to_string();
    state.apply_search();
    assert!(state.filterer.no_results());
    assert!(state.filterer.rows().iter().all(|row| !row.show));

    state.clear_search();
    assert_eq!(state.filterer.visible_count(), 5);
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn e2e_html_export_writes_escaped_tooltips() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("plants.html");

    let mut state = load_sample();
    state.search_text = "pothos".to_string();
    state.apply_search();

    let file = std::fs::File::create(&dest).unwrap();
    let n = export_html(&state.filterer, &state.animals, file, &dest).unwrap();
    assert_eq!(n, 1);

    let page = std::fs::read_to_string(&dest).unwrap();
    assert!(page.contains("<th>Cats</th><th>Dogs</th><th>Horses</th>"));
    assert!(page.contains(
        "aria-label=\"Not safe for cats: Oral irritation, drooling &amp; vomiting &lt;acute&gt;.\""
    ));
    assert!(!page.contains("Spider Plant"));
}

#[test]
fn e2e_html_export_of_no_results_has_message() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("empty.html");

    let mut state = load_sample();
    state.search_text = "zzzzz".to_string();
    state.apply_search();

    let file = std::fs::File::create(&dest).unwrap();
    assert_eq!(export_html(&state.filterer, &state.animals, file, &dest).unwrap(), 0);

    let page = std::fs::read_to_string(&dest).unwrap();
    assert!(page.contains("No plants match your search."));
    assert!(!page.contains("<table>"));
}

#[test]
fn e2e_csv_export_reads_back() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("plants.csv");

    let mut state = load_sample();
    state.search_text = "lily".to_string();
    state.apply_search();

    let file = std::fs::File::create(&dest).unwrap();
    assert_eq!(export_csv(&state.filterer, &state.animals, file, &dest).unwrap(), 2);

    let mut reader = csv::Reader::from_path(&dest).unwrap();
    let names: Vec<String> = reader
        .records()
        .map(|r| r.unwrap().get(0).unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Lily of the Valley", "Easter Lily"]);
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn e2e_session_restores_dataset_and_query() {
    let dir = TempDir::new().unwrap();
    let session_file = session::session_path(dir.path());

    let mut state = load_sample();
    state.session_path = Some(session_file.clone());
    state.restore_query("ivy");
    state.save_session();

    let restored = session::load(&session_file).expect("session should load");
    let mut next = AppState::new(&AppConfig::default());
    next.load_dataset(restored.dataset_path.as_deref().unwrap())
        .unwrap();
    next.restore_query(&restored.query);

    assert_eq!(visible_names(&next.filterer), vec!["Golden Pothos", "Spider Plant"]);
}
