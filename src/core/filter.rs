// PlantTox - core/filter.rs
//
// Row filter for the plant table: case-insensitive substring search over the
// name fields of every record.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Dataset, PlantRecord, Row};

/// Returns true if any non-empty searchable field of `record` contains `query`,
/// ignoring case.
///
/// The query is case-folded here, so callers may pass it as typed. Absent or
/// empty fields never contribute a match; a record with no searchable text
/// therefore matches nothing, not even the empty query.
pub fn row_matches(record: &PlantRecord, query: &str) -> bool {
    matches_normalised(record, &query.to_lowercase())
}

/// Match against an already lower-cased query.
fn matches_normalised(record: &PlantRecord, query_lower: &str) -> bool {
    record
        .searchable_fields()
        .any(|field| field.to_lowercase().contains(query_lower))
}

/// Owns the ordered rows of the table and their visibility.
///
/// `show` on every row and `no_results` are always consistent with `query`:
/// they are only ever written together by [`RowFilterer::apply_search`].
#[derive(Debug, Clone)]
pub struct RowFilterer {
    rows: Vec<Row>,
    /// Source indices of the rows with `show == true`, ascending.
    visible: Vec<usize>,
    query: String,
    no_results: bool,
}

impl Default for RowFilterer {
    /// No rows, so `no_results` is already true.
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RowFilterer {
    /// Take ownership of `records` and run the empty search over them.
    pub fn new(records: Vec<PlantRecord>) -> Self {
        let mut filterer = Self {
            rows: records.into_iter().map(Row::new).collect(),
            visible: Vec::new(),
            query: String::new(),
            no_results: false,
        };
        filterer.apply_search("");
        filterer
    }

    /// Build from a loaded dataset (animals are tracked by the caller).
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(dataset.records)
    }

    /// Recompute `show` for every row and `no_results` for the whole table.
    ///
    /// Deterministic and idempotent: calling twice with the same query leaves
    /// every flag unchanged.
    pub fn apply_search(&mut self, query: &str) {
        self.query = query.to_lowercase();

        self.visible.clear();
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.show = matches_normalised(&row.record, &self.query);
            if row.show {
                self.visible.push(index);
            }
        }
        self.no_results = self.visible.is_empty();

        tracing::debug!(
            query = %self.query,
            visible = self.visible_count(),
            total = self.rows.len(),
            "Search applied"
        );
    }

    /// The current query, lower-cased.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True iff no row is currently visible.
    pub fn no_results(&self) -> bool {
        self.no_results
    }

    /// All rows in source order, visible or not.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index` in source order.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Visible rows with their source index, in source order.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.visible.iter().map(|&index| (index, &self.rows[index]))
    }

    /// Source indices of the visible rows, in source order. Lets the table
    /// lay out only the slice that is scrolled into view.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Number of visible rows.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Total number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
