// PlantTox - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels, the menu bar and file dialogs.

use crate::app::state::AppState;
use crate::core::export;
use crate::ui;
use crate::util::error::{ExportError, Result};
use std::io::BufWriter;
use std::path::Path;

/// Export formats offered in `File > Export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
    Html,
}

impl ExportFormat {
    fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Html => "HTML",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

/// The PlantTox application.
pub struct PlantToxApp {
    pub state: AppState,
}

impl PlantToxApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn open_dataset(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Plant dataset", &["json"])
            .pick_file()
        else {
            return;
        };

        if let Err(e) = self.state.load_dataset(&path) {
            tracing::error!(error = %e, "Failed to open dataset");
            self.state.status_message = format!("Cannot open dataset: {e}");
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(format.label(), &[format.extension()])
            .set_file_name(format!("plants.{}", format.extension()))
            .save_file()
        else {
            return;
        };

        self.state.status_message = match write_export(&self.state, format, &dest) {
            Ok(n) => format!("Exported {n} plants to {}.", format.label()),
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("{} export failed: {e}", format.label())
            }
        };
    }
}

fn write_export(state: &AppState, format: ExportFormat, dest: &Path) -> Result<usize> {
    let file = std::fs::File::create(dest).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    let writer = BufWriter::new(file);
    let written = match format {
        ExportFormat::Csv => export::export_csv(&state.filterer, &state.animals, writer, dest)?,
        ExportFormat::Json => export::export_json(&state.filterer, writer, dest)?,
        ExportFormat::Html => export::export_html(&state.filterer, &state.animals, writer, dest)?,
    };
    Ok(written)
}

impl eframe::App for PlantToxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && !self.state.search_text.is_empty() {
            self.state.clear_search();
        }

        // Top menu bar
        let mut pending_export: Option<ExportFormat> = None;
        let mut open_requested = false;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Dataset\u{2026}").clicked() {
                        open_requested = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only when rows are visible
                    let has_rows = self.state.filterer.visible_count() > 0;
                    ui.add_enabled_ui(has_rows, |ui| {
                        ui.menu_button("Export", |ui| {
                            for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Html] {
                                if ui.button(format!("Export {}\u{2026}", format.label())).clicked() {
                                    pending_export = Some(format);
                                    ui.close_menu();
                                }
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let label = if self.state.dark_mode {
                        "Light Theme"
                    } else {
                        "Dark Theme"
                    };
                    if ui.button(label).clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        ui::theme::apply(ctx, self.state.dark_mode, self.state.font_size);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Dialogs run outside the menu closure so they don't hold its borrow.
        if open_requested {
            self.open_dataset();
        }
        if let Some(format) = pending_export {
            self.export(format);
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(egui::Frame::default().fill(ui::theme::STATUS_BG).inner_margin(4.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&self.state.status_message)
                            .color(ui::theme::STATUS_TEXT),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(self.state.count_summary())
                                .color(ui::theme::STATUS_TEXT),
                        );
                    });
                });
            });

        // Detail pane (bottom)
        egui::TopBottomPanel::bottom("detail_pane")
            .resizable(true)
            .default_height(ui::theme::DETAIL_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::detail::render(ui, &self.state);
            });

        // Left sidebar
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::search::render(ui, &mut self.state);
            });

        // Central panel (plant table)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::table::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch can restore it.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}
