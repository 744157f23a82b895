// PlantTox - ui/panels/search.rs
//
// Search sidebar: the query box, match count and a Clear button.
// Every edit re-runs the filter immediately.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::SEARCH_HINT;

/// Render the search controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Search");
    ui.separator();
    ui.add_space(4.0);

    let response = ui.add(
        egui::TextEdit::singleline(&mut state.search_text)
            .hint_text(SEARCH_HINT)
            .desired_width(ui.available_width()),
    );
    if response.changed() {
        state.apply_search();
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let visible = state.filterer.visible_count();
        let total = state.filterer.len();
        ui.label(
            egui::RichText::new(format!("{visible} of {total} plants"))
                .color(theme::MUTED_TEXT),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let clear = ui.add_enabled(!state.search_text.is_empty(), egui::Button::new("Clear"));
            if clear.on_hover_text("Clear search").clicked() {
                state.clear_search();
            }
        });
    });

    ui.add_space(10.0);
    ui.separator();
    ui.label(
        egui::RichText::new(
            "Matches the common name, the scientific name and other common names. \
             Hover a \u{2716} to see clinical signs.",
        )
        .small()
        .color(theme::MUTED_TEXT),
    );

    if !state.warnings.is_empty() {
        ui.add_space(10.0);
        egui::CollapsingHeader::new(format!("Warnings ({})", state.warnings.len()))
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(200.0)
                    .show(ui, |ui| {
                        for warning in &state.warnings {
                            ui.label(egui::RichText::new(warning).small());
                        }
                    });
            });
    }
}
