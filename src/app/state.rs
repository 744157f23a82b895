// PlantTox - app/state.rs
//
// Application state management. Holds the row filterer, search input,
// selection and UI preferences.
// Owned by the eframe::App implementation.

use crate::app::session::{self, SessionData};
use crate::core::dataset;
use crate::core::filter::RowFilterer;
use crate::core::model::{Dataset, PlantRecord};
use crate::platform::config::{resolve_animal_columns, AppConfig};
use crate::platform::fs::read_dataset_file;
use crate::util::error::DatasetError;
use std::path::{Path, PathBuf};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Rows of the current dataset with their visibility flags.
    pub filterer: RowFilterer,

    /// Every animal the current dataset has toxicity data for, sorted.
    pub dataset_animals: Vec<String>,

    /// Animal columns shown in the table, in display order.
    pub animals: Vec<String>,

    /// Column order requested in config.toml. Empty = all dataset animals.
    pub configured_animals: Vec<String>,

    /// File the current dataset came from. `None` = built-in dataset.
    pub dataset_path: Option<PathBuf>,

    /// Search box contents, as typed.
    pub search_text: String,

    /// Index into `filterer.rows()` of the selected plant.
    pub selected_index: Option<usize>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings from config and dataset loading.
    pub warnings: Vec<String>,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Where the session is saved on exit. `None` disables persistence.
    pub session_path: Option<PathBuf>,
}

impl AppState {
    /// Create initial state with no dataset loaded.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            filterer: RowFilterer::default(),
            dataset_animals: Vec::new(),
            animals: Vec::new(),
            configured_animals: config.animals.clone(),
            dataset_path: None,
            search_text: String::new(),
            selected_index: None,
            status_message: "Ready.".to_string(),
            warnings: Vec::new(),
            show_about: false,
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            session_path: None,
        }
    }

    /// Re-run the filter from the search box and drop a selection that is
    /// no longer visible.
    pub fn apply_search(&mut self) {
        self.filterer.apply_search(&self.search_text);

        if let Some(idx) = self.selected_index {
            let visible = self.filterer.row(idx).is_some_and(|row| row.show);
            if !visible {
                self.selected_index = None;
            }
        }
    }

    /// Reset the search box and show every row again.
    pub fn clear_search(&mut self) {
        self.search_text.clear();
        self.apply_search();
    }

    /// Read and parse a dataset file, replacing the current records.
    ///
    /// On error the current dataset is left untouched.
    pub fn load_dataset(&mut self, path: &Path) -> Result<usize, DatasetError> {
        let content = read_dataset_file(path)?;
        let (dataset, warnings) = dataset::parse_dataset(&content, path)?;
        let count = dataset.len();
        self.replace_dataset(dataset, Some(path.to_path_buf()), warnings);
        self.status_message = format!("Loaded {count} plants from {}", path.display());
        Ok(count)
    }

    /// Load the dataset compiled into the binary.
    pub fn load_builtin(&mut self) {
        let (dataset, warnings) = dataset::load_builtin();
        let count = dataset.len();
        self.replace_dataset(dataset, None, warnings);
        self.status_message = format!("Loaded {count} plants (built-in dataset)");
    }

    /// Swap in a new record set and re-apply the current search.
    pub fn replace_dataset(
        &mut self,
        dataset: Dataset,
        source: Option<PathBuf>,
        mut warnings: Vec<String>,
    ) {
        let (columns, mut column_warnings) =
            resolve_animal_columns(&self.configured_animals, &dataset.animals);
        warnings.append(&mut column_warnings);
        for w in &warnings {
            tracing::warn!("{}", w);
        }

        self.dataset_animals = dataset.animals.clone();
        self.animals = columns;
        self.filterer = RowFilterer::from_dataset(dataset);
        self.dataset_path = source;
        self.selected_index = None;
        self.warnings = warnings;
        self.apply_search();
    }

    /// The selected plant, if it is still visible.
    pub fn selected_record(&self) -> Option<&PlantRecord> {
        self.selected_index
            .and_then(|idx| self.filterer.row(idx))
            .filter(|row| row.show)
            .map(|row| &row.record)
    }

    /// "visible/total plants" for the status bar.
    pub fn count_summary(&self) -> String {
        format!(
            "{}/{} plants",
            self.filterer.visible_count(),
            self.filterer.len()
        )
    }

    /// Restore the search text from a previous session.
    pub fn restore_query(&mut self, query: &str) {
        self.search_text = query.to_string();
        self.apply_search();
    }

    /// Snapshot of what is persisted between runs.
    pub fn session_data(&self) -> SessionData {
        SessionData::new(self.dataset_path.clone(), self.search_text.clone())
    }

    /// Save the session if persistence is enabled. Failures are logged.
    pub fn save_session(&self) {
        if let Some(ref path) = self.session_path {
            if let Err(e) = session::save(&self.session_data(), path) {
                tracing::warn!(error = %e, "Failed to save session");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{"data": [
        {"name": "Lily of the Valley", "scientific_name": "Convallaria majalis",
         "clinical_signs": "Vomiting, arrhythmia",
         "toxic_to_cats": true, "toxic_to_dogs": true, "toxic_to_horses": true},
        {"name": "Rose", "scientific_name": "Rosa spp.",
         "toxic_to_cats": false, "toxic_to_dogs": false, "toxic_to_horses": false}
    ]}"#;

    fn state_with_sample(config: &AppConfig) -> AppState {
        let mut state = AppState::new(config);
        let (dataset, warnings) = dataset::parse_dataset(SAMPLE, Path::new("sample.json")).unwrap();
        state.replace_dataset(dataset, None, warnings);
        state
    }

    #[test]
    fn test_replace_dataset_shows_all_rows() {
        let state = state_with_sample(&AppConfig::default());
        assert_eq!(state.filterer.visible_count(), 2);
        assert_eq!(state.animals, vec!["cats", "dogs", "horses"]);
        assert_eq!(state.count_summary(), "2/2 plants");
    }

    #[test]
    fn test_apply_search_clears_hidden_selection() {
        let mut state = state_with_sample(&AppConfig::default());
        state.selected_index = Some(1);
        assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("Rose"));

        state.search_text = "lily".to_string();
        state.apply_search();
        assert_eq!(state.selected_index, None);
        assert_eq!(state.count_summary(), "1/2 plants");
    }

    #[test]
    fn test_apply_search_keeps_visible_selection() {
        let mut state = state_with_sample(&AppConfig::default());
        state.selected_index = Some(0);
        state.search_text = "CONVALLARIA".to_string();
        state.apply_search();
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn test_clear_search_restores_all_rows() {
        let mut state = state_with_sample(&AppConfig::default());
        state.search_text = "zzzzz".to_string();
        state.apply_search();
        assert!(state.filterer.no_results());

        state.clear_search();
        assert!(!state.filterer.no_results());
        assert!(state.search_text.is_empty());
    }

    #[test]
    fn test_configured_columns_order_and_warning() {
        let config = AppConfig {
            animals: vec!["horses".to_string(), "birds".to_string(), "cats".to_string()],
            ..AppConfig::default()
        };
        let state = state_with_sample(&config);
        assert_eq!(state.animals, vec!["horses", "cats"]);
        assert!(state.warnings.iter().any(|w| w.contains("birds")));
    }

    #[test]
    fn test_replace_dataset_reapplies_current_query() {
        let mut state = state_with_sample(&AppConfig::default());
        state.search_text = "rose".to_string();
        let (dataset, _) = dataset::parse_dataset(SAMPLE, Path::new("again.json")).unwrap();
        state.replace_dataset(dataset, None, Vec::new());
        assert_eq!(state.filterer.visible_count(), 1);
    }

    #[test]
    fn test_load_dataset_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plants.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut state = AppState::new(&AppConfig::default());
        let count = state.load_dataset(&path).unwrap();
        assert_eq!(count, 2);
        assert_eq!(state.dataset_path.as_deref(), Some(path.as_path()));
        assert!(state.status_message.contains("Loaded 2 plants"));
    }

    #[test]
    fn test_load_dataset_error_keeps_current_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut state = state_with_sample(&AppConfig::default());
        assert!(matches!(
            state.load_dataset(&path),
            Err(DatasetError::Json { .. })
        ));
        assert_eq!(state.filterer.len(), 2);
    }

    #[test]
    fn test_load_builtin_has_rows() {
        let mut state = AppState::new(&AppConfig::default());
        state.load_builtin();
        assert!(!state.filterer.is_empty());
        assert_eq!(state.dataset_path, None);
    }

    #[test]
    fn test_session_round_trip_through_state() {
        let dir = TempDir::new().unwrap();
        let mut state = state_with_sample(&AppConfig::default());
        state.session_path = Some(session::session_path(dir.path()));
        state.restore_query("Rosa");
        state.save_session();

        let loaded = session::load(&session::session_path(dir.path())).unwrap();
        assert_eq!(loaded.query, "Rosa");
        assert_eq!(loaded.dataset_path, None);
    }
}
