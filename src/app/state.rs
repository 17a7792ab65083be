// SymptomLens - app/state.rs
//
// Application state management. Holds the symptom catalog, the selection,
// the active region filter, language, and the result text.
// Owned by the eframe::App implementation; mutated only on the UI thread.

use crate::core::export;
use crate::core::model::{AnalysisResult, AnalyzeRequest, ApiProgress, Lang, Symptom};
use crate::core::region;
use crate::core::render;
use crate::core::selection::SelectionSet;
use crate::util::error::{Result, SymptomLensError};
use chrono::{DateTime, Local};
use std::path::Path;

/// On-disk format for a saved result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFormat {
    /// The rendered result text.
    Text,
    /// The raw response body, pretty-printed.
    Json,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Current display language.
    pub lang: Lang,

    /// Symptom catalog from the most recent successful load.
    pub catalog: Vec<Symptom>,

    /// Selected symptom ids.
    pub selection: SelectionSet,

    /// Active region token (None = whole catalog shown).
    pub region_filter: Option<String>,

    /// Indices of catalog entries shown as chips (into `catalog`).
    pub visible_indices: Vec<usize>,

    /// Region filter hint text (empty when no filter is active).
    pub region_hint: String,

    /// Text of the result area.
    pub result_text: String,

    /// Most recent successful analysis response, for copy/save.
    pub last_result: Option<AnalysisResult>,

    /// Whether an analysis request is outstanding (Analyze button disabled).
    pub analysis_in_flight: bool,

    /// Whether a catalog request is outstanding.
    pub catalog_loading: bool,

    /// Local time of the most recent completed analysis.
    pub last_analysis_at: Option<DateTime<Local>>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (config problems, failed catalog loads).
    pub warnings: Vec<String>,

    /// Analysis request waiting to be dispatched by the app loop.
    pub pending_analysis: Option<AnalyzeRequest>,

    /// Set by the UI to ask the app loop for a catalog reload.
    pub request_reload: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with an empty catalog.
    pub fn new(lang: Lang, debug_mode: bool) -> Self {
        Self {
            lang,
            catalog: Vec::new(),
            selection: SelectionSet::new(),
            region_filter: None,
            visible_indices: Vec::new(),
            region_hint: String::new(),
            result_text: String::new(),
            last_result: None,
            analysis_in_flight: false,
            catalog_loading: false,
            last_analysis_at: None,
            status_message: "Ready.".to_string(),
            warnings: Vec::new(),
            pending_analysis: None,
            request_reload: false,
            show_about: false,
            debug_mode,
        }
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Mark a catalog request as started.
    pub fn begin_catalog_load(&mut self) {
        self.catalog_loading = true;
        self.status_message = "Loading symptom catalog...".to_string();
    }

    /// Replace the catalog wholesale and show every chip.
    pub fn set_catalog(&mut self, symptoms: Vec<Symptom>) {
        self.catalog = symptoms;
        self.catalog_loading = false;
        self.show_all();
        self.status_message = format!("Loaded {} symptoms.", self.catalog.len());
    }

    /// Record a failed catalog load. The previous catalog stays in place.
    pub fn catalog_failed(&mut self, error: String) {
        self.catalog_loading = false;
        self.status_message = format!("Could not load symptom catalog: {error}");
        self.warnings.push(self.status_message.clone());
    }

    /// Symptoms currently shown as chips, in catalog order.
    pub fn visible_symptoms(&self) -> impl Iterator<Item = &Symptom> {
        self.visible_indices
            .iter()
            .filter_map(|&idx| self.catalog.get(idx))
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle a chip. Returns true if the symptom is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = self.selection.toggle(id);
        tracing::debug!(id, selected, "Symptom toggled");
        selected
    }

    /// Empty the selection, show the whole catalog, and clear the result.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.show_all();
        self.result_text.clear();
        self.last_result = None;
    }

    /// Selection summary in the current language.
    pub fn selected_summary(&self) -> String {
        self.selection.summary(&self.catalog, self.lang)
    }

    // -------------------------------------------------------------------------
    // Region filter
    // -------------------------------------------------------------------------

    /// Show only symptoms tagged with `region`. The selection is untouched.
    pub fn filter_by_region(&mut self, region: &str) {
        self.visible_indices = region::filter_by_region(&self.catalog, region);
        self.region_filter = Some(region.to_string());
        self.region_hint = self.lang.region_hint(region);
        tracing::debug!(
            region,
            matches = self.visible_indices.len(),
            "Region filter applied"
        );
    }

    /// Drop the region filter and show every chip.
    pub fn show_all(&mut self) {
        self.visible_indices = (0..self.catalog.len()).collect();
        self.region_filter = None;
        self.region_hint.clear();
    }

    // -------------------------------------------------------------------------
    // Language
    // -------------------------------------------------------------------------

    /// Switch language: show the whole catalog and clear hint and result.
    pub fn set_language(&mut self, lang: Lang) {
        self.lang = lang;
        self.show_all();
        self.result_text.clear();
        self.last_result = None;
        tracing::info!(lang = %lang, "Language changed");
    }

    // -------------------------------------------------------------------------
    // Analysis
    // -------------------------------------------------------------------------

    /// Build the analyze request for the current selection and mark it in
    /// flight. Returns None if an analysis is already outstanding.
    pub fn begin_analysis(&mut self) -> Option<AnalyzeRequest> {
        if self.analysis_in_flight {
            tracing::debug!("Analysis already in flight; ignoring request");
            return None;
        }
        self.analysis_in_flight = true;
        self.result_text = self.lang.analyzing().to_string();
        self.status_message = "Analyzing...".to_string();
        Some(AnalyzeRequest::new(self.lang, self.selection.ids()))
    }

    /// Render a successful response into the result area.
    pub fn finish_analysis(&mut self, result: AnalysisResult) {
        self.result_text = render::format_result(&result, self.lang);
        self.last_result = Some(result);
        self.analysis_in_flight = false;
        let now = Local::now();
        self.status_message = format!("Analysis completed at {}.", now.format("%H:%M:%S"));
        self.last_analysis_at = Some(now);
    }

    /// Show a failed analysis as a single error line.
    pub fn fail_analysis(&mut self, error: &str) {
        self.result_text = format!("Error: {error}");
        self.last_result = None;
        self.analysis_in_flight = false;
        self.status_message = "Analysis failed.".to_string();
    }

    /// Write the current result to `dest`.
    ///
    /// JSON export needs a successful response; text export writes whatever
    /// the result area shows (including an error line).
    pub fn save_result(&self, dest: &Path, format: ResultFormat) -> Result<()> {
        let file = std::fs::File::create(dest).map_err(|e| SymptomLensError::Io {
            path: dest.to_path_buf(),
            operation: "create",
            source: e,
        })?;

        match format {
            ResultFormat::Text => {
                export::export_text(&self.result_text, file, dest)?;
            }
            ResultFormat::Json => {
                let raw = self
                    .last_result
                    .as_ref()
                    .map(|r| r.raw.clone())
                    .unwrap_or_default();
                export::export_json(&raw, file, dest)?;
            }
        }

        tracing::info!(path = %dest.display(), ?format, "Result saved");
        Ok(())
    }

    /// Apply one message from the request manager.
    pub fn apply_progress(&mut self, msg: ApiProgress) {
        match msg {
            ApiProgress::CatalogLoaded { symptoms } => self.set_catalog(symptoms),
            ApiProgress::CatalogFailed { error } => self.catalog_failed(error),
            ApiProgress::AnalysisCompleted { result } => self.finish_analysis(result),
            ApiProgress::AnalysisFailed { error } => self.fail_analysis(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state_with_catalog() -> AppState {
        let mut state = AppState::new(Lang::En, false);
        let body = json!({"symptoms": [
            {"id": "a", "en": "Cough", "zh": "咳嗽", "regions": ["chest"]},
            {"id": "b", "en": "Fever", "zh": "发热", "regions": ["whole"]},
            {"id": "c", "en": "Chest pain", "zh": "胸痛", "regions": ["chest"]},
        ]});
        state.apply_progress(ApiProgress::CatalogLoaded {
            symptoms: crate::core::model::parse_catalog(&body),
        });
        state
    }

    fn visible_labels(state: &AppState) -> Vec<String> {
        state
            .visible_symptoms()
            .map(|s| s.label(state.lang).to_string())
            .collect()
    }

    #[test]
    fn test_single_symptom_catalog_renders_one_chip() {
        let mut state = AppState::new(Lang::En, false);
        let body = json!({"symptoms": [{"id": "a", "en": "Cough", "zh": "咳嗽", "regions": ["chest"]}]});
        state.apply_progress(ApiProgress::CatalogLoaded {
            symptoms: crate::core::model::parse_catalog(&body),
        });
        assert_eq!(visible_labels(&state), vec!["Cough"]);
    }

    #[test]
    fn test_region_filter_preserves_selection() {
        let mut state = state_with_catalog();
        state.toggle("b");
        state.filter_by_region("chest");

        assert_eq!(visible_labels(&state), vec!["Cough", "Chest pain"]);
        assert_eq!(state.region_hint, "Region filter: chest");
        assert!(state.selection.contains("b"));
        assert_eq!(state.selected_summary(), "• Fever");
    }

    #[test]
    fn test_unknown_region_shows_no_chips() {
        let mut state = state_with_catalog();
        state.filter_by_region("tail");
        assert!(visible_labels(&state).is_empty());
        assert_eq!(state.region_filter.as_deref(), Some("tail"));
    }

    #[test]
    fn test_language_switch_relabels_without_touching_ids() {
        let mut state = state_with_catalog();
        state.toggle("a");
        state.toggle("c");
        state.filter_by_region("whole");
        state.result_text = "old".to_string();
        let ids_before: Vec<String> = state.selection.ids().map(str::to_string).collect();

        state.set_language(Lang::Zh);

        let ids_after: Vec<String> = state.selection.ids().map(str::to_string).collect();
        assert_eq!(ids_before, ids_after);
        assert_eq!(state.selected_summary(), "• 咳嗽\n• 胸痛");
        assert_eq!(visible_labels(&state), vec!["咳嗽", "发热", "胸痛"]);
        assert!(state.region_hint.is_empty());
        assert!(state.result_text.is_empty());
    }

    #[test]
    fn test_clear_selection_resets_view() {
        let mut state = state_with_catalog();
        state.toggle("a");
        state.filter_by_region("chest");
        state.result_text = "something".to_string();

        state.clear_selection();

        assert!(state.selection.is_empty());
        assert_eq!(state.selected_summary(), "None");
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert!(state.result_text.is_empty());
    }

    #[test]
    fn test_analysis_lifecycle_success() {
        let mut state = state_with_catalog();
        state.toggle("c");
        state.toggle("a");

        let request = state.begin_analysis().unwrap();
        assert_eq!(request.lang, Lang::En);
        let ids: Vec<&str> = request.symptoms.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
        assert!(state.analysis_in_flight);
        assert_eq!(state.result_text, "Analyzing...");

        // A second click while in flight is ignored.
        assert!(state.begin_analysis().is_none());

        state.apply_progress(ApiProgress::AnalysisCompleted {
            result: AnalysisResult::from_value(json!({"title": "X", "warning": "W"})),
        });
        assert!(!state.analysis_in_flight);
        assert_eq!(state.result_text, "X\n\nW");
        assert!(state.last_result.is_some());
        assert!(state.last_analysis_at.is_some());
    }

    #[test]
    fn test_analysis_failure_shows_error_and_reenables() {
        let mut state = AppState::new(Lang::Zh, false);
        state.begin_analysis().unwrap();
        assert_eq!(state.result_text, "分析中…");

        state.apply_progress(ApiProgress::AnalysisFailed {
            error: "connection refused".to_string(),
        });
        assert!(!state.analysis_in_flight);
        assert_eq!(state.result_text, "Error: connection refused");
        assert!(state.begin_analysis().is_some());
    }

    #[test]
    fn test_failed_reload_keeps_catalog() {
        let mut state = state_with_catalog();
        state.begin_catalog_load();
        state.apply_progress(ApiProgress::CatalogFailed {
            error: "HTTP 503".to_string(),
        });
        assert_eq!(state.catalog.len(), 3);
        assert!(!state.catalog_loading);
        assert_eq!(state.warnings.len(), 1);
    }

    #[test]
    fn test_save_result_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_catalog();
        state.begin_analysis().unwrap();
        state.apply_progress(ApiProgress::AnalysisCompleted {
            result: AnalysisResult::from_value(json!({"title": "X", "warning": "W"})),
        });

        let txt = dir.path().join("result.txt");
        state.save_result(&txt, ResultFormat::Text).unwrap();
        assert_eq!(std::fs::read_to_string(&txt).unwrap(), "X\n\nW\n");

        let js = dir.path().join("result.json");
        state.save_result(&js, ResultFormat::Json).unwrap();
        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&js).unwrap()).unwrap();
        assert_eq!(saved, json!({"title": "X", "warning": "W"}));
    }

    #[test]
    fn test_save_result_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with_catalog();
        let dest = dir.path().join("no-such-dir").join("result.txt");
        let err = state.save_result(&dest, ResultFormat::Text).unwrap_err();
        assert!(matches!(err, SymptomLensError::Io { operation: "create", .. }));
    }

    #[test]
    fn test_reload_replaces_catalog_and_keeps_selection_ids() {
        let mut state = state_with_catalog();
        state.toggle("a");
        state.toggle("b");
        state.filter_by_region("chest");

        state.apply_progress(ApiProgress::CatalogLoaded {
            symptoms: vec![Symptom {
                id: "b".to_string(),
                en: "High fever".to_string(),
                zh: "高热".to_string(),
                regions: vec![],
            }],
        });

        assert_eq!(state.region_filter, None);
        assert_eq!(visible_labels(&state), vec!["High fever"]);
        assert_eq!(state.selection.len(), 2);
        assert_eq!(state.selected_summary(), "• High fever");
    }
}
