// SymptomLens - ui/panels/result.rs
//
// Result area: the rendered analysis text, or the in-flight / error line.

use crate::app::state::AppState;

/// Render the result pane (bottom panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.strong(state.lang.result_fallback_title());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_text = !state.result_text.is_empty() && !state.analysis_in_flight;
            if ui
                .add_enabled(has_text, egui::Button::new("Copy"))
                .on_hover_text("Copy the result text to the clipboard")
                .clicked()
            {
                ui.ctx().copy_text(state.result_text.clone());
                state.status_message = "Result copied to clipboard.".to_string();
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("result_text")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.label(egui::RichText::new(&state.result_text).monospace());
        });
}
