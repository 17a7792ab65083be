// SymptomLens - ui/panels/symptoms.rs
//
// Symptom chip list. Shows the chips for the current view (whole catalog or
// the active region filter); clicking a chip toggles its selection.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the chip list (central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let lang = state.lang;
    ui.heading(lang.symptoms_heading());
    ui.separator();

    if state.catalog_loading && state.catalog.is_empty() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
        return;
    }

    if state.visible_indices.is_empty() {
        ui.label(egui::RichText::new(lang.empty_catalog()).weak());
        return;
    }

    let dark_mode = ui.visuals().dark_mode;
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("symptom_chips")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(theme::CHIP_SPACING, theme::CHIP_SPACING);
            ui.horizontal_wrapped(|ui| {
                for symptom in state.visible_symptoms() {
                    let selected = state.selection.contains(&symptom.id);
                    let mut text = egui::RichText::new(symptom.label(lang));
                    if selected {
                        text = text.strong();
                    }
                    let mut button = egui::Button::new(text).selected(selected);
                    if selected {
                        button = button.fill(theme::chip_active_fill(dark_mode));
                    }
                    if ui.add(button).on_hover_text(&symptom.id).clicked() {
                        clicked = Some(symptom.id.clone());
                    }
                }
            });
        });

    if let Some(id) = clicked {
        state.toggle(&id);
    }
}
