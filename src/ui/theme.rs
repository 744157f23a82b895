// PlantTox - ui/theme.rs
//
// Colour scheme, toxicity colour mapping, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Check mark colour for plants safe for an animal.
pub const SAFE_COLOUR: Color32 = Color32::from_rgb(22, 163, 74); // Green 600

/// Cross colour for plants toxic to an animal.
pub const TOXIC_COLOUR: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Weak text for secondary columns and hints.
pub const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Status bar colours.
pub const STATUS_BG: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 250.0;
pub const DETAIL_PANE_HEIGHT: f32 = 180.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const NAME_COLUMN_WIDTH: f32 = 180.0;
pub const SCIENTIFIC_COLUMN_WIDTH: f32 = 190.0;
pub const COMMON_NAMES_COLUMN_WIDTH: f32 = 220.0;
pub const TOXICITY_COLUMN_WIDTH: f32 = 56.0;

/// Apply theme and body font size to the egui context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
    ctx.style_mut(|style| {
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(font_size),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(font_size),
        );
    });
}
