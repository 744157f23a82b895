// PlantTox - core/export.rs
//
// CSV, JSON and HTML export of the rows currently visible in the table.
// Core layer: writes to any Write trait object.

use crate::core::filter::RowFilterer;
use crate::core::markup;
use crate::core::model::PlantRecord;
use crate::util::constants::{MAX_EXPORT_ROWS, TOXIC_FLAG_PREFIX};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

fn check_row_count(filterer: &RowFilterer) -> Result<usize, ExportError> {
    let count = filterer.visible_count();
    if count > MAX_EXPORT_ROWS {
        return Err(ExportError::TooManyRows {
            count,
            max: MAX_EXPORT_ROWS,
        });
    }
    Ok(count)
}

/// Export visible rows to CSV format.
///
/// Writes: name, scientific_name, additional_common_names, toxic_to_<animal>...,
/// clinical_signs
pub fn export_csv<W: Write>(
    filterer: &RowFilterer,
    animals: &[String],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_row_count(filterer)?;
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = vec![
        "name".to_string(),
        "scientific_name".to_string(),
        "additional_common_names".to_string(),
    ];
    header.extend(animals.iter().map(|a| format!("{TOXIC_FLAG_PREFIX}{a}")));
    header.push("clinical_signs".to_string());
    csv_writer.write_record(&header).map_err(csv_err)?;

    let mut count = 0;
    for (_, row) in filterer.visible_rows() {
        let record = &row.record;
        let mut fields: Vec<&str> = vec![
            record.name.as_str(),
            record.scientific_name.as_deref().unwrap_or(""),
            record.additional_common_names.as_deref().unwrap_or(""),
        ];
        for animal in animals {
            fields.push(if record.is_toxic_to(animal) { "true" } else { "false" });
        }
        fields.push(record.clinical_signs_or_empty());
        csv_writer.write_record(&fields).map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %export_path.display(), rows = count, "CSV export complete");
    Ok(count)
}

/// Export visible rows to JSON in the same `{"data": [...]}` shape the
/// dataset is loaded from, so an export can be reopened as a dataset.
pub fn export_json<W: Write>(
    filterer: &RowFilterer,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let count = check_row_count(filterer)?;

    let data: Vec<serde_json::Value> = filterer
        .visible_rows()
        .map(|(_, row)| record_to_json(&row.record))
        .collect();

    serde_json::to_writer_pretty(writer, &serde_json::json!({ "data": data })).map_err(|e| {
        ExportError::Json {
            path: export_path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::info!(path = %export_path.display(), rows = count, "JSON export complete");
    Ok(count)
}

/// Export visible rows as a standalone HTML page.
pub fn export_html<W: Write>(
    filterer: &RowFilterer,
    animals: &[String],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let count = check_row_count(filterer)?;
    let page = markup::render_table(filterer, animals);

    writer
        .write_all(page.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| ExportError::Io {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %export_path.display(), rows = count, "HTML export complete");
    Ok(count)
}

/// Flatten a record back to the dataset's key layout
/// (`toxicity` becomes `toxic_to_<animal>` keys).
fn record_to_json(record: &PlantRecord) -> serde_json::Value {
    let mut object = serde_json::Map::new();
    object.insert("name".into(), record.name.clone().into());
    let optional = [
        ("scientific_name", &record.scientific_name),
        ("additional_common_names", &record.additional_common_names),
        ("clinical_signs", &record.clinical_signs),
        ("family", &record.family),
        ("toxic_principles", &record.toxic_principles),
        ("url", &record.url),
        ("image_url", &record.image_url),
    ];
    for (key, value) in optional {
        object.insert(key.into(), value.clone().into());
    }
    for (animal, toxic) in &record.toxicity {
        object.insert(format!("{TOXIC_FLAG_PREFIX}{animal}"), (*toxic).into());
    }
    serde_json::Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::parse_dataset;

    const SAMPLE: &str = r#"{"data": [
        {"name": "Tulip", "scientific_name": "Tulipa spp.", "clinical_signs": "Vomiting, diarrhea",
         "toxic_to_cats": true, "toxic_to_dogs": true},
        {"name": "Rose", "scientific_name": null,
         "toxic_to_cats": false, "toxic_to_dogs": false}
    ]}"#;

    fn filterer(query: &str) -> (RowFilterer, Vec<String>) {
        let (dataset, _) = parse_dataset(SAMPLE, Path::new("sample.json")).unwrap();
        let animals = dataset.animals.clone();
        let mut filterer = RowFilterer::from_dataset(dataset);
        filterer.apply_search(query);
        (filterer, animals)
    }

    #[test]
    fn test_csv_export_visible_rows_only() {
        let (filterer, animals) = filterer("tulip");
        let mut buf = Vec::new();
        let count = export_csv(&filterer, &animals, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with(
            "name,scientific_name,additional_common_names,toxic_to_cats,toxic_to_dogs,clinical_signs"
        ));
        assert!(output.contains("Tulip,Tulipa spp.,,true,true,\"Vomiting, diarrhea\""));
        assert!(!output.contains("Rose"));
    }

    #[test]
    fn test_json_export_round_trips_as_dataset() {
        let (filterer, _) = filterer("");
        let mut buf = Vec::new();
        let count = export_json(&filterer, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let (reloaded, warnings) = parse_dataset(&output, Path::new("out.json")).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.animals, vec!["cats", "dogs"]);
        assert!(reloaded.records[0].is_toxic_to("cats"));
    }

    #[test]
    fn test_export_over_row_limit_is_refused() {
        let records = (0..=MAX_EXPORT_ROWS)
            .map(|i| PlantRecord {
                name: format!("Plant {i}"),
                ..PlantRecord::default()
            })
            .collect();
        let filterer = RowFilterer::new(records);
        assert_eq!(filterer.visible_count(), MAX_EXPORT_ROWS + 1);

        let mut buf = Vec::new();
        let result = export_csv(&filterer, &[], &mut buf, Path::new("out.csv"));
        assert!(
            matches!(
                result,
                Err(ExportError::TooManyRows { count, max })
                    if count == MAX_EXPORT_ROWS + 1 && max == MAX_EXPORT_ROWS
            ),
            "expected TooManyRows, got {result:?}"
        );
        assert!(buf.is_empty(), "nothing may be written past the limit");

        let mut buf = Vec::new();
        assert!(export_html(&filterer, &[], &mut buf, Path::new("out.html")).is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_html_export() {
        let (filterer, animals) = filterer("rose");
        let mut buf = Vec::new();
        let count = export_html(&filterer, &animals, &mut buf, Path::new("out.html")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("Safe for cats"));
        assert!(!output.contains("Tulip"));
    }
}
