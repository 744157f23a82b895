// PlantTox - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PlantTox data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/planttox/ or %APPDATA%\PlantTox\config\)
    pub config_dir: PathBuf,

    /// Data directory for the session file.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[table]` section.
    pub table: TableSection,
    /// `[dataset]` section.
    pub dataset: DatasetSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[table]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct TableSection {
    /// Animal columns to show, in order. Empty or absent = all, sorted.
    pub animals: Option<Vec<String>>,
}

/// `[dataset]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DatasetSection {
    /// Dataset JSON to open at startup instead of the built-in one.
    pub path: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Animal column order. Empty = every animal in the dataset, sorted.
    pub animals: Vec<String>,
    /// Dataset path configured by the user.
    pub dataset_path: Option<PathBuf>,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            animals: Vec::new(),
            dataset_path: None,
            log_level: None,
        }
    }
}

/// Path of config.toml inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(constants::CONFIG_FILE_NAME)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let path = config_path(config_dir);
    let mut warnings: Vec<String> = Vec::new();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let (config, mut parse_warnings) = parse_config(&content, &path);
    warnings.append(&mut parse_warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Parse and validate config.toml content. `path` is used for messages only.
pub fn parse_config(content: &str, path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            };
            let msg = format!("{err}. Using defaults. See config.example.toml for the expected format.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[ui] theme".to_string(),
                    value: other.to_string(),
                    expected: "\"dark\" or \"light\"; using dark".to_string(),
                }
                .to_string(),
            ),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[ui] font_size".to_string(),
                    value: size.to_string(),
                    expected: format!(
                        "{}-{}; using {}",
                        constants::MIN_FONT_SIZE,
                        constants::MAX_FONT_SIZE,
                        constants::DEFAULT_FONT_SIZE
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Table: animals --
    if let Some(animals) = raw.table.animals {
        for animal in animals {
            let animal = animal.trim().to_lowercase();
            if animal.is_empty() {
                warnings.push("[table] animals contains an empty entry; ignored".to_string());
            } else if config.animals.contains(&animal) {
                warnings.push(format!("[table] animals lists \"{animal}\" twice; ignored"));
            } else {
                config.animals.push(animal);
            }
        }
    }

    // -- Dataset: path --
    if let Some(ref dataset) = raw.dataset.path {
        if !dataset.trim().is_empty() {
            config.dataset_path = Some(PathBuf::from(dataset));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[logging] level".to_string(),
                    value: level.clone(),
                    expected: "error, warn, info, debug, trace; using info".to_string(),
                }
                .to_string(),
            );
        }
    }

    (config, warnings)
}

/// Order the dataset's animals for display.
///
/// With no configured order every dataset animal is shown, sorted. Otherwise
/// the configured animals that exist in the dataset are shown in the
/// configured order; configured animals the dataset lacks are reported.
pub fn resolve_animal_columns(
    configured: &[String],
    dataset_animals: &[String],
) -> (Vec<String>, Vec<String>) {
    if configured.is_empty() {
        return (dataset_animals.to_vec(), Vec::new());
    }

    let mut columns = Vec::new();
    let mut warnings = Vec::new();
    for animal in configured {
        if dataset_animals.contains(animal) {
            columns.push(animal.clone());
        } else {
            warnings.push(format!(
                "[table] animals: dataset has no toxicity data for \"{animal}\"; column hidden"
            ));
        }
    }
    (columns, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> (AppConfig, Vec<String>) {
        parse_config(content, Path::new("config.toml"))
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_load_config_from_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            config_path(dir.path()),
            "[ui]\ntheme = \"light\"\n[dataset]\npath = \"/data/plants.json\"\n",
        )
        .unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.dataset_path, Some(PathBuf::from("/data/plants.json")));
    }

    #[test]
    fn test_valid_values_applied() {
        let (config, warnings) = parse(
            r#"
[ui]
theme = "Light"
font_size = 18.0

[table]
animals = ["Dogs", "cats"]

[logging]
level = "DEBUG"
"#,
        );
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 18.0);
        assert_eq!(config.animals, vec!["dogs", "cats"]);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_fall_back() {
        let (config, warnings) = parse(
            r#"
[ui]
theme = "purple"
font_size = 99.0

[logging]
level = "loud"
"#,
        );
        assert_eq!(warnings.len(), 3, "warnings: {warnings:?}");
        assert!(config.dark_mode);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert_eq!(config.log_level, None);
        assert!(warnings[1].contains("font_size"));
    }

    #[test]
    fn test_unparseable_config_warns() {
        let (config, warnings) = parse("[ui\ntheme = ");
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Using defaults"));
    }

    #[test]
    fn test_duplicate_and_empty_animals_ignored() {
        let (config, warnings) = parse("[table]\nanimals = [\"cats\", \"\", \"CATS\"]\n");
        assert_eq!(config.animals, vec!["cats"]);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_resolve_animal_columns() {
        let dataset = vec!["cats".to_string(), "dogs".to_string(), "horses".to_string()];

        let (columns, warnings) = resolve_animal_columns(&[], &dataset);
        assert_eq!(columns, dataset);
        assert!(warnings.is_empty());

        let configured = vec!["dogs".to_string(), "birds".to_string(), "cats".to_string()];
        let (columns, warnings) = resolve_animal_columns(&configured, &dataset);
        assert_eq!(columns, vec!["dogs", "cats"]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("birds"));
    }
}
