// PlantTox - platform/fs.rs
//
// Bounded file reads for the dataset loader.

use crate::util::constants::MAX_DATASET_FILE_SIZE;
use crate::util::error::DatasetError;
use std::path::Path;

/// Read a dataset file as text, refusing files larger than
/// `MAX_DATASET_FILE_SIZE`.
///
/// For files with invalid UTF-8, uses lossy conversion; the JSON parser then
/// reports the exact position of any damage.
pub fn read_dataset_file(path: &Path) -> Result<String, DatasetError> {
    let io_err = |e: std::io::Error| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > MAX_DATASET_FILE_SIZE {
        return Err(DatasetError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: MAX_DATASET_FILE_SIZE,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Dataset file read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_dataset_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plants.json");
        std::fs::write(&path, br#"{"data": []}"#).unwrap();
        assert_eq!(read_dataset_file(&path).unwrap(), r#"{"data": []}"#);
    }

    #[test]
    fn test_oversized_file_is_rejected_before_reading() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("huge.json");
        // Sparse file: the size check only looks at metadata.
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_DATASET_FILE_SIZE + 1).unwrap();
        drop(file);

        match read_dataset_file(&path) {
            Err(DatasetError::FileTooLarge { size, max_size, .. }) => {
                assert_eq!(size, MAX_DATASET_FILE_SIZE + 1);
                assert_eq!(max_size, MAX_DATASET_FILE_SIZE);
            }
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_file_at_limit_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("edge.json");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_DATASET_FILE_SIZE).unwrap();
        drop(file);

        let content = read_dataset_file(&path).unwrap();
        assert_eq!(content.len() as u64, MAX_DATASET_FILE_SIZE);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = read_dataset_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
