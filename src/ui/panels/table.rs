// PlantTox - ui/panels/table.rs
//
// Plant table: one row per visible plant, one toxicity column per animal.
// Hidden rows are skipped entirely; when nothing matches the empty-state
// message replaces the table.

use crate::app::state::AppState;
use crate::core::indicator::{animal_heading, ToxicityCell};
use crate::ui::theme;
use crate::util::constants::NO_RESULTS_MESSAGE;

/// Draw one toxicity indicator.
///
/// Safe: a plain check-mark label. Toxic: a focusable frameless button so the
/// clinical signs tooltip can be reached with the keyboard as well as the
/// mouse. Both carry the accessible text for screen readers.
pub fn render_toxicity_cell(ui: &mut egui::Ui, cell: &ToxicityCell<'_>) -> egui::Response {
    let accessible = cell.accessible_text();

    let response = match cell.tooltip() {
        None => ui.label(egui::RichText::new(cell.glyph()).color(theme::SAFE_COLOUR)),
        Some(signs) => {
            let hover = if signs.is_empty() {
                accessible.clone()
            } else {
                signs.to_string()
            };
            ui.add(
                egui::Button::new(egui::RichText::new(cell.glyph()).color(theme::TOXIC_COLOUR))
                    .small()
                    .frame(false),
            )
            .on_hover_text(hover)
        }
    };

    let enabled = ui.is_enabled();
    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Label, enabled, accessible.clone())
    });
    response
}

/// Lay out `add_contents` in a cell of exactly `width` x `height`, so every
/// row lines up with the header without a `Grid` measuring all rows.
fn fixed_cell<R>(
    ui: &mut egui::Ui,
    width: f32,
    height: f32,
    layout: egui::Layout,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let size = egui::vec2(width, height);
    ui.allocate_ui_with_layout(size, layout, |ui| {
        ui.set_min_size(size);
        ui.set_max_width(width);
        add_contents(ui)
    })
    .inner
}

fn text_layout() -> egui::Layout {
    egui::Layout::left_to_right(egui::Align::Center)
}

fn glyph_layout() -> egui::Layout {
    egui::Layout::centered_and_justified(egui::Direction::LeftToRight)
}

/// Render the plant table into the central panel.
///
/// Only the rows scrolled into view are laid out each frame
/// (`ScrollArea::show_rows` over the filter's visible indices), so the cost
/// of a frame does not grow with the size of the dataset.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.filterer.no_results() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(NO_RESULTS_MESSAGE).size(16.0).weak());
        });
        return;
    }

    // Selection changes are applied after show_rows releases its borrow of
    // `state.filterer`.
    let mut clicked: Option<usize> = None;
    let selected = state.selected_index;
    let animals = &state.animals;
    let filterer = &state.filterer;
    let visible = filterer.visible_indices();

    let row_height = ui.spacing().interact_size.y;
    let text_widths = [
        theme::NAME_COLUMN_WIDTH,
        theme::SCIENTIFIC_COLUMN_WIDTH,
        theme::COMMON_NAMES_COLUMN_WIDTH,
    ];
    let column_count = text_widths.len() + animals.len();
    let row_width = text_widths.iter().sum::<f32>()
        + animals.len() as f32 * theme::TOXICITY_COLUMN_WIDTH
        + column_count.saturating_sub(1) as f32 * ui.spacing().item_spacing.x;

    // Horizontal scrolling wraps header and body together so the columns
    // stay aligned; the body scrolls vertically on its own.
    egui::ScrollArea::horizontal()
        .id_salt("plant_table_h")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_min_width(row_width);

            ui.horizontal(|ui| {
                for (heading, width) in ["Name", "Scientific name", "Also known as"]
                    .into_iter()
                    .zip(text_widths)
                {
                    fixed_cell(ui, width, row_height, text_layout(), |ui| {
                        ui.strong(heading);
                    });
                }
                for animal in animals {
                    fixed_cell(ui, theme::TOXICITY_COLUMN_WIDTH, row_height, glyph_layout(), |ui| {
                        ui.strong(animal_heading(animal));
                    });
                }
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("plant_table_v")
                .auto_shrink([false; 2])
                .show_rows(ui, row_height, visible.len(), |ui, row_range| {
                    for display_idx in row_range {
                        let Some(&index) = visible.get(display_idx) else {
                            continue;
                        };
                        let Some(row) = filterer.row(index) else {
                            continue;
                        };
                        let record = &row.record;

                        if display_idx % 2 == 1 {
                            let stripe = egui::Rect::from_min_size(
                                ui.cursor().min,
                                egui::vec2(row_width, row_height),
                            );
                            ui.painter()
                                .rect_filled(stripe, 0.0, ui.visuals().faint_bg_color);
                        }

                        ui.horizontal(|ui| {
                            let name = fixed_cell(ui, text_widths[0], row_height, text_layout(), |ui| {
                                ui.add(
                                    egui::SelectableLabel::new(
                                        selected == Some(index),
                                        record.name.as_str(),
                                    ),
                                )
                            });
                            if name.clicked() {
                                clicked = Some(index);
                            }

                            fixed_cell(ui, text_widths[1], row_height, text_layout(), |ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(
                                            record.scientific_name.as_deref().unwrap_or(""),
                                        )
                                        .italics(),
                                    )
                                    .truncate(),
                                );
                            });
                            fixed_cell(ui, text_widths[2], row_height, text_layout(), |ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(
                                            record.additional_common_names.as_deref().unwrap_or(""),
                                        )
                                        .color(theme::MUTED_TEXT),
                                    )
                                    .truncate(),
                                );
                            });

                            for animal in animals {
                                let cell = ToxicityCell::new(
                                    record.is_toxic_to(animal),
                                    Some(animal.as_str()),
                                    record.clinical_signs.as_deref(),
                                );
                                fixed_cell(
                                    ui,
                                    theme::TOXICITY_COLUMN_WIDTH,
                                    row_height,
                                    glyph_layout(),
                                    |ui| {
                                        render_toxicity_cell(ui, &cell);
                                    },
                                );
                            }
                        });
                    }
                });
        });

    if let Some(index) = clicked {
        state.selected_index = if selected == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}
