// SymptomLens - ui/panels/body_map.rs
//
// Body map: one hotspot per region tag found in the catalog plus the
// whole-body hotspot. Clicking a hotspot applies the region filter.

use crate::app::state::AppState;
use crate::core::region;
use crate::ui::theme;
use crate::util::constants::WHOLE_REGION;

/// Render the body map (left sidebar).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let lang = state.lang;
    ui.heading(lang.body_map_heading());
    ui.separator();

    let active = state.region_filter.clone();
    let mut clicked: Option<String> = None;

    let whole_active = active.as_deref() == Some(WHOLE_REGION);
    if ui
        .selectable_label(whole_active, lang.whole_body_label())
        .clicked()
    {
        clicked = Some(WHOLE_REGION.to_string());
    }

    ui.add_space(4.0);

    for token in region::known_regions(&state.catalog) {
        let is_active = active.as_deref() == Some(token.as_str());
        if ui.selectable_label(is_active, &token).clicked() {
            clicked = Some(token);
        }
    }

    if let Some(token) = clicked {
        state.filter_by_region(&token);
    }

    if !state.region_hint.is_empty() {
        ui.add_space(8.0);
        ui.separator();
        ui.label(egui::RichText::new(&state.region_hint).color(theme::HINT_TEXT));
        if ui.small_button(lang.show_all_label()).clicked() {
            state.show_all();
        }
    }
}
