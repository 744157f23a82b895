// PlantTox - core/dataset.rs
//
// Parsing of the plant dataset JSON into `Dataset`.
// Core layer: takes already-read text; file access lives in platform::fs.
//
// Expected shape:
//   { "data": [ { "name": ..., "scientific_name": ..., "additional_common_names": ...,
//                 "clinical_signs": ..., "toxic_to_cats": true, ... }, ... ] }
//
// The scraper's own output names the flags `toxicity_<animal>`; those are
// accepted as aliases. `non_toxicity_<animal>` is its complement and ignored,
// as are keys other than the known fields.

use crate::core::model::{Dataset, PlantRecord};
use crate::util::constants::{
    MAX_DATASET_WARNINGS, MAX_RECORDS, SCRAPED_TOXIC_FLAG_PREFIX, TOXIC_FLAG_PREFIX,
};
use crate::util::error::DatasetError;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Dataset shipped inside the binary, used when no dataset path is configured.
const BUILTIN_DATASET: &str = include_str!("../../assets/plants.json");

/// Raw deserialisable shape of the dataset file.
#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    data: Option<Vec<RawRecord>>,
}

/// Raw shape of one record. Every field is optional so a sparse entry still
/// loads; `extra` collects the per-animal flags and any unknown keys.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    name: Option<String>,
    scientific_name: Option<String>,
    additional_common_names: Option<String>,
    clinical_signs: Option<String>,
    family: Option<String>,
    toxic_principles: Option<String>,
    url: Option<String>,
    image_url: Option<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// Bounded list of human-readable load warnings.
#[derive(Debug, Default)]
struct Warnings {
    messages: Vec<String>,
    suppressed: usize,
}

impl Warnings {
    fn push(&mut self, message: String) {
        if self.messages.len() < MAX_DATASET_WARNINGS {
            tracing::debug!(warning = %message, "Dataset warning");
            self.messages.push(message);
        } else {
            self.suppressed += 1;
        }
    }

    fn finish(mut self) -> Vec<String> {
        if self.suppressed > 0 {
            self.messages
                .push(format!("... and {} more dataset warnings", self.suppressed));
        }
        self.messages
    }
}

/// Parse dataset JSON.
///
/// `path` is used only for error messages. Returns the dataset plus non-fatal
/// warnings (malformed or missing toxicity flags).
pub fn parse_dataset(content: &str, path: &Path) -> Result<(Dataset, Vec<String>), DatasetError> {
    let raw: RawDataset = serde_json::from_str(content).map_err(|e| DatasetError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let raw_records = raw.data.ok_or_else(|| DatasetError::MissingDataArray {
        path: path.to_path_buf(),
    })?;

    if raw_records.len() > MAX_RECORDS {
        return Err(DatasetError::TooManyRecords {
            count: raw_records.len(),
            max: MAX_RECORDS,
        });
    }

    let mut warnings = Warnings::default();
    let mut animals: BTreeSet<String> = BTreeSet::new();
    let mut records: Vec<PlantRecord> = Vec::with_capacity(raw_records.len());

    for (index, raw) in raw_records.into_iter().enumerate() {
        let record = convert_record(raw, index, &mut warnings);
        animals.extend(record.toxicity.keys().cloned());
        records.push(record);
    }

    // Every record must carry a flag for every tracked animal so the table
    // has no holes. A missing flag reads as "not toxic" and is reported.
    for (index, record) in records.iter_mut().enumerate() {
        for animal in &animals {
            if !record.toxicity.contains_key(animal) {
                warnings.push(format!(
                    "{}: no {TOXIC_FLAG_PREFIX}{animal} flag; shown as safe for {animal}",
                    record_label(&record.name, index)
                ));
                record.toxicity.insert(animal.clone(), false);
            }
        }
    }

    if !records.is_empty() && animals.is_empty() {
        warnings.push(format!(
            "No record has a {TOXIC_FLAG_PREFIX}<animal> or {SCRAPED_TOXIC_FLAG_PREFIX}<animal> flag; \
             the table has no toxicity columns"
        ));
    }

    let dataset = Dataset {
        records,
        animals: animals.into_iter().collect(),
    };

    tracing::info!(
        path = %path.display(),
        records = dataset.len(),
        animals = ?dataset.animals,
        "Dataset parsed"
    );

    Ok((dataset, warnings.finish()))
}

/// Parse the dataset embedded in the binary.
///
/// A failure here is a packaging bug, but the application still starts with
/// an empty table rather than aborting.
pub fn load_builtin() -> (Dataset, Vec<String>) {
    let path = PathBuf::from("<builtin>/plants.json");
    match parse_dataset(BUILTIN_DATASET, &path) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load built-in dataset");
            (Dataset::default(), vec![format!("Built-in dataset is invalid: {e}")])
        }
    }
}

fn convert_record(raw: RawRecord, index: usize, warnings: &mut Warnings) -> PlantRecord {
    let name = non_blank(raw.name).unwrap_or_default();
    let mut toxicity = BTreeMap::new();
    let mut scraped: BTreeMap<String, bool> = BTreeMap::new();

    for (key, value) in &raw.extra {
        let (animal, canonical) = if let Some(animal) = key.strip_prefix(TOXIC_FLAG_PREFIX) {
            (animal, true)
        } else if let Some(animal) = key.strip_prefix(SCRAPED_TOXIC_FLAG_PREFIX) {
            (animal, false)
        } else {
            continue;
        };
        if animal.is_empty() {
            continue;
        }
        match value.as_bool() {
            Some(flag) if canonical => {
                toxicity.insert(animal.to_string(), flag);
            }
            Some(flag) => {
                scraped.insert(animal.to_string(), flag);
            }
            None => warnings.push(format!(
                "{}: '{key}' is {value}, expected true or false; ignored",
                record_label(&name, index)
            )),
        }
    }

    for (animal, flag) in scraped {
        match toxicity.get(&animal) {
            Some(&canonical) if canonical != flag => warnings.push(format!(
                "{}: {TOXIC_FLAG_PREFIX}{animal} and {SCRAPED_TOXIC_FLAG_PREFIX}{animal} disagree; \
                 using {TOXIC_FLAG_PREFIX}{animal}",
                record_label(&name, index)
            )),
            Some(_) => {}
            None => {
                toxicity.insert(animal, flag);
            }
        }
    }

    PlantRecord {
        name,
        scientific_name: non_blank(raw.scientific_name),
        additional_common_names: non_blank(raw.additional_common_names),
        clinical_signs: non_blank(raw.clinical_signs),
        toxicity,
        family: non_blank(raw.family),
        toxic_principles: non_blank(raw.toxic_principles),
        url: non_blank(raw.url),
        image_url: non_blank(raw.image_url),
    }
}

/// Treat whitespace-only strings the same as absent ones.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn record_label(name: &str, index: usize) -> String {
    if name.is_empty() {
        format!("record #{}", index + 1)
    } else {
        format!("'{name}'")
    }
}
