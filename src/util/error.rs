// PlantTox - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// Filtering and cell rendering are total and never produce errors; only the
// I/O edges (dataset loading, export, config) do.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all PlantTox operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum PlantToxError {
    /// Dataset loading or parsing failed.
    Dataset(DatasetError),

    /// Export operation failed.
    Export(ExportError),
}

impl fmt::Display for PlantToxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dataset(e) => write!(f, "Dataset error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for PlantToxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset errors
// ---------------------------------------------------------------------------

/// Errors related to loading the plant dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// I/O error reading the dataset file.
    Io { path: PathBuf, source: io::Error },

    /// Dataset file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The file is not valid JSON or a record has the wrong shape.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The top-level object has no `data` array.
    MissingDataArray { path: PathBuf },

    /// The dataset holds more records than the configured maximum.
    TooManyRecords { count: usize, max: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read dataset '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Dataset '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "Dataset '{}' is not valid: {source}", path.display())
            }
            Self::MissingDataArray { path } => write!(
                f,
                "Dataset '{}' has no top-level \"data\" array",
                path.display()
            ),
            Self::TooManyRecords { count, max } => {
                write!(f, "Dataset has {count} records, maximum is {max}")
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DatasetError> for PlantToxError {
    fn from(e: DatasetError) -> Self {
        Self::Dataset(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export would exceed maximum row count.
    TooManyRows { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::TooManyRows { count, max } => write!(
                f,
                "Export of {count} rows exceeds maximum of {max}. \
                 Narrow the search to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for PlantToxError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// `load_config` downgrades these to warnings so a bad config file never
/// prevents startup; the typed form is kept for messages and tests.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for PlantTox results.
pub type Result<T> = std::result::Result<T, PlantToxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_dataset_error_display_names_path() {
        let err = DatasetError::MissingDataArray {
            path: PathBuf::from("plants.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("plants.json"));
        assert!(msg.contains("\"data\""));
    }

    #[test]
    fn test_top_level_error_chains_source() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: PlantToxError = DatasetError::Io {
            path: PathBuf::from("x.json"),
            source: io,
        }
        .into();
        assert!(err.to_string().starts_with("Dataset error:"));
        let inner = err.source().expect("dataset error should be the source");
        assert!(inner.source().is_some(), "io error should be chained");
    }

    #[test]
    fn test_too_many_rows_message() {
        let err = ExportError::TooManyRows { count: 10, max: 5 };
        assert!(err.to_string().contains("exceeds maximum of 5"));
        assert!(err.source().is_none());
    }
}
