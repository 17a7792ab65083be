// SymptomLens - ui/panels/about.rs
//
// About dialog: shown from the Help menu.
// Rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState, base_url: &str) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new("About SymptomLens")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("SymptomLens").size(28.0).strong());
                ui.add_space(4.0);
                ui.label(egui::RichText::new(format!("v{VERSION}")).size(14.0).weak());
            });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.label("Pick symptoms, send them for analysis,");
                ui.label("and read the structured result.");
                ui.add_space(6.0);
                ui.label(egui::RichText::new(format!("Service: {base_url}")).monospace());
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Results are informational, not medical advice.")
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
