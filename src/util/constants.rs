// PlantTox - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PlantTox";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PlantTox";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Dataset limits
// =============================================================================

/// Maximum size of a dataset JSON file in bytes.
///
/// The upstream plant list is well under 1 MB; anything far larger is almost
/// certainly the wrong file and would stall the UI thread while parsing.
pub const MAX_DATASET_FILE_SIZE: u64 = 32 * 1024 * 1024; // 32 MB

/// Maximum number of plant records accepted from a single dataset.
pub const MAX_RECORDS: usize = 50_000;

/// Key prefix that marks a per-animal toxicity flag in the dataset JSON,
/// e.g. `toxic_to_cats`.
pub const TOXIC_FLAG_PREFIX: &str = "toxic_to_";

/// Per-animal flag prefix written by the ASPCA scraper (`toxicity_cats`).
/// Read as an alias of `TOXIC_FLAG_PREFIX`; the canonical key wins when both
/// are present.
pub const SCRAPED_TOXIC_FLAG_PREFIX: &str = "toxicity_";

/// Maximum number of non-fatal dataset warnings kept for display.
/// Further warnings are counted but not stored.
pub const MAX_DATASET_WARNINGS: usize = 200;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Placeholder shown in the search box while it is empty.
pub const SEARCH_HINT: &str = "Search by name, scientific name or common name";

/// Message shown in place of the table when no row matches the query.
pub const NO_RESULTS_MESSAGE: &str = "No plants match your search.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Export
// =============================================================================

/// Maximum number of rows that can be exported in a single operation.
pub const MAX_EXPORT_ROWS: usize = MAX_RECORDS;

/// Title used for the exported HTML document.
pub const HTML_EXPORT_TITLE: &str = "Plant toxicity";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
