// SymptomLens - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and manages the request lifecycle.

use crate::app::requests::RequestManager;
use crate::app::state::{AppState, ResultFormat};
use crate::core::model::Lang;
use crate::ui;
use crate::util::constants::REQUEST_POLL_INTERVAL_MS;

/// The SymptomLens application.
pub struct SymptomLensApp {
    pub state: AppState,
    pub requests: RequestManager,
}

impl SymptomLensApp {
    /// Create a new application instance and start loading the catalog.
    pub fn new(mut state: AppState, mut requests: RequestManager) -> Self {
        state.begin_catalog_load();
        requests.start_catalog_load();
        Self { state, requests }
    }

    /// Ask for a destination and save the current result there.
    fn save_result(&mut self, format: ResultFormat) {
        let (filter_name, ext, default_name) = match format {
            ResultFormat::Text => ("Text", "txt", "analysis.txt"),
            ResultFormat::Json => ("JSON", "json", "analysis.json"),
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(filter_name, &[ext])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        match self.state.save_result(&dest, format) {
            Ok(()) => {
                self.state.status_message = format!("Saved result to {}.", dest.display());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saving result failed");
                self.state.status_message = format!("Save failed: {e}");
            }
        }
    }
}

impl eframe::App for SymptomLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for finished requests
        for msg in self.requests.poll_progress() {
            self.state.apply_progress(msg);
        }
        // Keep polling while anything is outstanding so results appear promptly.
        if self.requests.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                REQUEST_POLL_INTERVAL_MS,
            ));
        }

        // ---- Handle flags set by panels ----
        if let Some(request) = self.state.pending_analysis.take() {
            self.requests.start_analysis(request);
            ctx.request_repaint();
        }
        if self.state.request_reload {
            self.state.request_reload = false;
            self.state.begin_catalog_load();
            self.requests.start_catalog_load();
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_text = !self.state.result_text.is_empty()
                        && !self.state.analysis_in_flight;
                    ui.add_enabled_ui(has_text, |ui| {
                        if ui.button("Save Result as Text\u{2026}").clicked() {
                            self.save_result(ResultFormat::Text);
                            ui.close_menu();
                        }
                    });
                    let has_result = self.state.last_result.is_some();
                    ui.add_enabled_ui(has_result, |ui| {
                        if ui.button("Save Result as JSON\u{2026}").clicked() {
                            self.save_result(ResultFormat::Json);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.add_enabled_ui(!self.state.catalog_loading, |ui| {
                        if ui.button("Reload Catalog").clicked() {
                            self.state.request_reload = true;
                            ui.close_menu();
                        }
                    });
                    ui.add_enabled_ui(self.state.region_filter.is_some(), |ui| {
                        if ui.button("Show All Symptoms").clicked() {
                            self.state.show_all();
                            ui.close_menu();
                        }
                    });
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });

                // Language selector, right-aligned.
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut lang = self.state.lang;
                    egui::ComboBox::from_id_salt("lang_select")
                        .selected_text(lang.display_name())
                        .show_ui(ui, |ui| {
                            for candidate in Lang::all() {
                                ui.selectable_value(
                                    &mut lang,
                                    *candidate,
                                    candidate.display_name(),
                                );
                            }
                        });
                    if lang != self.state.lang {
                        self.state.set_language(lang);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.requests.is_busy() {
                    ui.label(
                        egui::RichText::new(" \u{25cf} BUSY ")
                            .strong()
                            .color(ui::theme::BUSY_TEXT),
                    );
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                if !self.state.warnings.is_empty() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "\u{26a0} {} warning(s)",
                            self.state.warnings.len()
                        ))
                        .color(ui::theme::HINT_TEXT),
                    )
                    .on_hover_text(self.state.warnings.join("\n"));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(at) = self.state.last_analysis_at {
                        ui.label(format!("Last analysis {}", at.format("%H:%M:%S")));
                        ui.separator();
                    }
                    ui.label(format!(
                        "{} selected / {} symptoms",
                        self.state.selection.len(),
                        self.state.catalog.len()
                    ));
                    if self.state.debug_mode {
                        ui.separator();
                        ui.label(egui::RichText::new(self.requests.base_url()).weak());
                    }
                });
            });
        });

        // Result pane (bottom)
        egui::TopBottomPanel::bottom("result_pane")
            .resizable(true)
            .default_height(ui::theme::RESULT_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::result::render(ui, &mut self.state);
            });

        // Left sidebar: body map
        egui::SidePanel::left("body_map")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("body_map_scroll")
                    .show(ui, |ui| {
                        ui::panels::body_map::render(ui, &mut self.state);
                    });
            });

        // Right sidebar: selection summary and actions
        egui::SidePanel::right("selection")
            .default_width(ui::theme::SELECTION_PANE_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::selected::render(ui, &mut self.state);
            });

        // Central panel (chips)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::symptoms::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state, self.requests.base_url());
    }
}
