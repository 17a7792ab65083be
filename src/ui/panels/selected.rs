// SymptomLens - ui/panels/selected.rs
//
// Selection summary with the Analyze and Clear actions.

use crate::app::state::AppState;

/// Render the selection summary (right sidebar).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let lang = state.lang;
    ui.heading(lang.selected_heading());
    ui.separator();

    ui.horizontal(|ui| {
        let analyze = egui::Button::new(lang.analyze_label());
        // Disabled for the duration of the request.
        if ui.add_enabled(!state.analysis_in_flight, analyze).clicked() {
            if let Some(request) = state.begin_analysis() {
                state.pending_analysis = Some(request);
            }
        }
        if ui.button(lang.clear_label()).clicked() {
            state.clear_selection();
        }
        if state.analysis_in_flight {
            ui.spinner();
        }
    });

    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_salt("selected_summary")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.label(state.selected_summary());
        });
}
