// PlantTox - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::collections::BTreeMap;

// =============================================================================
// Plant record
// =============================================================================

/// A single plant entry and its toxicity to each tracked animal.
///
/// Records are immutable after load; the only per-row mutable state is the
/// `show` flag on [`Row`], which belongs to the filter rather than the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlantRecord {
    /// Display name, e.g. "Lily of the Valley".
    pub name: String,

    /// Botanical name. `None` when the source left it blank.
    pub scientific_name: Option<String>,

    /// Comma-separated alternative common names.
    pub additional_common_names: Option<String>,

    /// Description of clinical signs; only meaningful when the plant is toxic
    /// to at least one animal.
    pub clinical_signs: Option<String>,

    /// Toxicity flag per animal label ("cats", "dogs", "horses", ...).
    pub toxicity: BTreeMap<String, bool>,

    /// Botanical family. Display only, never searched.
    pub family: Option<String>,

    /// Toxic principles (active compounds). Display only, never searched.
    pub toxic_principles: Option<String>,

    /// Source page for the entry. Display only, never searched.
    pub url: Option<String>,

    /// Image of the plant. Display only, never searched.
    pub image_url: Option<String>,
}

impl PlantRecord {
    /// The fields the search matches against, in order: name, scientific name,
    /// additional common names.
    ///
    /// Absent and empty fields are skipped, so they can never contribute a
    /// match, not even for the empty query.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            self.scientific_name.as_deref(),
            self.additional_common_names.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|field| !field.is_empty())
    }

    /// Whether the plant is toxic to `animal`. Unknown animals read as safe;
    /// the dataset loader fills every tracked animal so this only matters for
    /// callers asking about animals outside the dataset.
    pub fn is_toxic_to(&self, animal: &str) -> bool {
        self.toxicity.get(animal).copied().unwrap_or(false)
    }

    /// True if the plant is toxic to any tracked animal.
    pub fn is_toxic_to_any(&self) -> bool {
        self.toxicity.values().any(|&toxic| toxic)
    }

    /// Clinical signs, or the empty string when absent.
    pub fn clinical_signs_or_empty(&self) -> &str {
        self.clinical_signs.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// A fully loaded dataset: the records plus the animals they track.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Records in source order.
    pub records: Vec<PlantRecord>,

    /// Sorted union of every animal with a `toxic_to_<animal>` flag.
    pub animals: Vec<String>,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Row
// =============================================================================

/// A record paired with its current visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub record: PlantRecord,

    /// Derived from the record and the current query by the filter.
    pub show: bool,
}

impl Row {
    /// Wrap a record. Rows start visible until the first search pass.
    pub fn new(record: PlantRecord) -> Self {
        Self { record, show: true }
    }
}
