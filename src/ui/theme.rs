// SymptomLens - ui/theme.rs
//
// Visuals, chip colours, and layout constants.
// No dependencies on app state or business logic.

use egui::{Color32, TextStyle};

/// Chip fill when the symptom is selected.
pub fn chip_active_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(13, 148, 136) // Teal 600
    } else {
        Color32::from_rgb(153, 246, 228) // Teal 200
    }
}

/// Accent used for the region hint text.
pub const HINT_TEXT: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Status bar in-flight indicator.
pub const BUSY_TEXT: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const SELECTION_PANE_WIDTH: f32 = 260.0;
pub const RESULT_PANE_HEIGHT: f32 = 260.0;
pub const CHIP_SPACING: f32 = 6.0;

/// Apply light/dark visuals and scale every text style from the body size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                TextStyle::Heading => font_size * 1.4,
                TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });
}
