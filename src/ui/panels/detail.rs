// PlantTox - ui/panels/detail.rs
//
// Detail pane showing the full record of the selected plant.

use crate::app::state::AppState;
use crate::core::indicator::{animal_heading, ToxicityCell};
use crate::ui::panels::table::render_toxicity_cell;
use crate::ui::theme;

/// Render the detail pane (bottom panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(record) = state.selected_record() else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a plant to view details.");
        });
        return;
    };

    ui.heading(record.name.as_str());

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("detail_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                let optional = [
                    ("Scientific name:", &record.scientific_name),
                    ("Also known as:", &record.additional_common_names),
                    ("Family:", &record.family),
                    ("Toxic principles:", &record.toxic_principles),
                    ("Clinical signs:", &record.clinical_signs),
                ];
                for (label, value) in optional {
                    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                        ui.label(label);
                        ui.label(value);
                        ui.end_row();
                    }
                }

                ui.label("Toxicity:");
                ui.horizontal_wrapped(|ui| {
                    for animal in &state.dataset_animals {
                        let cell = ToxicityCell::new(
                            record.is_toxic_to(animal),
                            Some(animal.as_str()),
                            record.clinical_signs.as_deref(),
                        );
                        ui.label(animal_heading(animal));
                        render_toxicity_cell(ui, &cell);
                        ui.add_space(8.0);
                    }
                    if !record.is_toxic_to_any() {
                        ui.label(
                            egui::RichText::new("Not listed as toxic to any animal.")
                                .color(theme::MUTED_TEXT),
                        );
                    }
                });
                ui.end_row();

                if let Some(ref url) = record.url {
                    ui.label("Source:");
                    ui.hyperlink(url);
                    ui.end_row();
                }
            });
    });
}
