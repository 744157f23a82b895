// PlantTox - ui/panels/about.rs
//
// About dialog: shown from Help > About.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, APP_VERSION};

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("\u{1f33f}  {APP_NAME}"))
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Look up whether a plant is toxic to cats, dogs or horses.");
                ui.label("Hover a \u{2716} for the clinical signs to watch for.");
            });

            ui.add_space(10.0);

            ui.vertical_centered(|ui| {
                let source = state
                    .dataset_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in dataset".to_string());
                ui.label(
                    egui::RichText::new(format!(
                        "{} plants \u{00b7} {source}",
                        state.filterer.len()
                    ))
                    .small()
                    .weak(),
                );
                ui.label(
                    egui::RichText::new(
                        "Not a substitute for veterinary advice. \
                         If you suspect poisoning, call your vet.",
                    )
                    .small()
                    .weak(),
                );
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });

            ui.add_space(8.0);
        });

    if !open {
        state.show_about = false;
    }
}
