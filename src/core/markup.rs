// PlantTox - core/markup.rs
//
// Static HTML rendering of the plant table. Turns the same `ToxicityCell`
// view-model the GUI uses into markup, so an exported page reads exactly like
// the on-screen table.
//
// All interpolated text goes through `escape_html`.

use crate::core::filter::RowFilterer;
use crate::core::indicator::{animal_heading, ToxicityCell};
use crate::core::model::PlantRecord;
use crate::util::constants::{HTML_EXPORT_TITLE, NO_RESULTS_MESSAGE};
use std::fmt::Write as _;

/// Minimal styling so the exported page is readable on its own and the
/// tooltip text stays reachable without scripts.
const PAGE_STYLE: &str = "\
table{border-collapse:collapse;font-family:sans-serif}\
th,td{border:1px solid #d1d5db;padding:4px 8px;text-align:left}\
.tox-cell{text-align:center}\
.tox-cell.safe .glyph{color:#16a34a}\
.tox-cell.toxic .glyph{color:#dc2626}\
.tox-cell a.tooltip{cursor:help;text-decoration:none}";

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render one indicator cell as a `<td>`.
///
/// Safe cells carry the accessible text as an `aria-label` on the glyph.
/// Toxic cells wrap the glyph in a focusable anchor whose `title` is the
/// clinical signs (hover/focus tooltip) and whose `aria-label` is the full
/// accessible description.
pub fn render_cell(cell: &ToxicityCell<'_>) -> String {
    let label = escape_html(&cell.accessible_text());
    match cell.tooltip() {
        None => format!(
            "<td class=\"tox-cell safe\"><span class=\"glyph\" role=\"img\" aria-label=\"{label}\">{}</span></td>",
            cell.glyph()
        ),
        Some(signs) => format!(
            "<td class=\"tox-cell toxic\"><a class=\"tooltip\" tabindex=\"0\" title=\"{}\" aria-label=\"{label}\">\
             <span class=\"glyph\" aria-hidden=\"true\">{}</span></a></td>",
            escape_html(signs),
            cell.glyph()
        ),
    }
}

/// Render one `<tr>` for `record` with a cell per animal in `animals` order.
pub fn render_row(record: &PlantRecord, animals: &[String]) -> String {
    let mut out = String::from("<tr>");
    let _ = write!(
        out,
        "<td>{}</td><td><em>{}</em></td><td>{}</td>",
        escape_html(&record.name),
        escape_html(record.scientific_name.as_deref().unwrap_or("")),
        escape_html(record.additional_common_names.as_deref().unwrap_or("")),
    );
    for animal in animals {
        let cell = ToxicityCell::new(
            record.is_toxic_to(animal),
            Some(animal.as_str()),
            record.clinical_signs.as_deref(),
        );
        out.push_str(&render_cell(&cell));
    }
    out.push_str("</tr>");
    out
}

/// Render the currently visible rows as a standalone HTML document.
///
/// When the filter has no results the table is replaced by the empty-state
/// message. `query` is echoed in the header so the page states what it shows.
pub fn render_table(filterer: &RowFilterer, animals: &[String]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(HTML_EXPORT_TITLE));
    let _ = writeln!(out, "<style>{PAGE_STYLE}</style>");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(HTML_EXPORT_TITLE));

    if !filterer.query().is_empty() {
        let _ = writeln!(
            out,
            "<p class=\"query\">Search: &ldquo;{}&rdquo; ({} of {} plants)</p>",
            escape_html(filterer.query()),
            filterer.visible_count(),
            filterer.len()
        );
    }

    if filterer.no_results() {
        let _ = writeln!(
            out,
            "<p class=\"no-results\">{}</p>",
            escape_html(NO_RESULTS_MESSAGE)
        );
    } else {
        out.push_str("<table>\n<thead><tr><th>Name</th><th>Scientific name</th><th>Also known as</th>");
        for animal in animals {
            let _ = write!(out, "<th>{}</th>", escape_html(&animal_heading(animal)));
        }
        out.push_str("</tr></thead>\n<tbody>\n");
        for (_, row) in filterer.visible_rows() {
            out.push_str(&render_row(&row.record, animals));
            out.push('\n');
        }
        out.push_str("</tbody>\n</table>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
