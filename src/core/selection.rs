// SymptomLens - core/selection.rs
//
// The set of selected symptom ids. Ids are unique; iteration follows the
// order in which they were selected so the summary reads naturally.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Lang, Symptom};

/// Selected symptom ids, unique, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present.
    ///
    /// Returns true if the id is selected after the call.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Remove every id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Selected symptoms that exist in `catalog`, in selection order.
    pub fn resolve<'a>(&'a self, catalog: &'a [Symptom]) -> impl Iterator<Item = &'a Symptom> {
        self.ids
            .iter()
            .filter_map(move |id| catalog.iter().find(|s| &s.id == id))
    }

    /// Render the selection as `• label` lines, or the localized "none"
    /// placeholder when no catalog symptom is selected.
    pub fn summary(&self, catalog: &[Symptom], lang: Lang) -> String {
        let lines: Vec<String> = self
            .resolve(catalog)
            .map(|s| format!("• {}", s.label(lang)))
            .collect();

        if lines.is_empty() {
            lang.none_placeholder().to_string()
        } else {
            lines.join("\n")
        }
    }
}
