// SymptomLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Language
// =============================================================================

/// Display language. Selects which label field of a symptom is shown and
/// which fixed UI strings are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Returns all variants in selector order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Zh]
    }

    /// Wire tag sent to the analysis endpoint.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Name shown in the language selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Zh => "中文",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "zh" => Ok(Lang::Zh),
            other => Err(format!(
                "unknown language '{other}', expected \"en\" or \"zh\""
            )),
        }
    }
}

// =============================================================================
// Symptom catalog
// =============================================================================

/// One selectable symptom from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    /// Stable identifier sent back to the analysis endpoint.
    pub id: String,

    /// English label.
    #[serde(default)]
    pub en: String,

    /// Chinese label.
    #[serde(default)]
    pub zh: String,

    /// Body-region tags used by the region filter.
    #[serde(default)]
    pub regions: Vec<String>,
}

impl Symptom {
    /// Label in the given language.
    pub fn label(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Zh => &self.zh,
        }
    }

    /// Read one catalog element leniently.
    ///
    /// Only `id` is mandatory (and must be a string). Non-string labels become
    /// empty, a non-array `regions` becomes empty, and non-string region tags
    /// are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = obj.get("id")?.as_str()?.to_string();
        let text = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let regions = obj
            .get("regions")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            en: text("en"),
            zh: text("zh"),
            id,
            regions,
        })
    }
}

/// Extract the symptom list from a `GET /api/symptoms` response body.
///
/// A missing or non-array `symptoms` field yields an empty catalog. Elements
/// without a string `id` are skipped.
pub fn parse_catalog(body: &Value) -> Vec<Symptom> {
    let Some(items) = body.get("symptoms").and_then(Value::as_array) else {
        tracing::debug!("Catalog response has no symptoms array; treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let symptom = Symptom::from_value(item);
            if symptom.is_none() {
                tracing::warn!(index = idx, "Skipping catalog entry without a string id");
            }
            symptom
        })
        .collect()
}

// =============================================================================
// Analyze request
// =============================================================================

/// Reference to a selected symptom in an analyze request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRef {
    pub id: String,
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub lang: Lang,
    pub symptoms: Vec<SymptomRef>,
}

impl AnalyzeRequest {
    /// Build a request from selected ids, preserving their order.
    pub fn new<'a, I>(lang: Lang, ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            lang,
            symptoms: ids
                .into_iter()
                .map(|id| SymptomRef { id: id.to_string() })
                .collect(),
        }
    }
}

// =============================================================================
// Analysis result
// =============================================================================

/// A loosely typed JSON value from the analysis response.
///
/// The backend does not guarantee field types, so values are kept as raw JSON
/// and interpreted with script-like truthiness and text conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FieldValue(pub Value);

impl FieldValue {
    /// Returns false for null, `false`, zero, NaN, and the empty string.
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Text form used when rendering the value.
    pub fn text(&self) -> String {
        value_text(&self.0)
    }

    /// Named member of an object value, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Elements of an array value, if it is one.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        self.0.as_array()
    }
}

/// Convert any JSON value to display text. Arrays join their elements with
/// commas; objects render as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Structured response of `POST /api/analyze`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub title: Option<FieldValue>,
    pub pattern: Option<FieldValue>,
    pub explanation: Option<FieldValue>,
    pub principle: Option<FieldValue>,
    pub acupuncture: Option<FieldValue>,
    pub herbal: Option<FieldValue>,
    pub ai_notes: Option<FieldValue>,
    pub ai_error: Option<FieldValue>,
    pub warning: Option<FieldValue>,
    pub eight_principles: Option<FieldValue>,
    pub eight_evidence: Option<FieldValue>,

    /// The response body exactly as received, kept for JSON export.
    #[serde(skip)]
    pub raw: Value,
}

impl AnalysisResult {
    /// Interpret a response body. Bodies that are not JSON objects yield a
    /// result with every section absent.
    pub fn from_value(value: Value) -> Self {
        let mut result: AnalysisResult = if value.is_object() {
            serde_json::from_value(value.clone()).unwrap_or_default()
        } else {
            AnalysisResult::default()
        };
        result.raw = value;
        result
    }
}

// =============================================================================
// Background request progress
// =============================================================================

/// Messages sent from request threads to the UI thread.
#[derive(Debug, Clone)]
pub enum ApiProgress {
    /// The catalog request finished (possibly with an empty catalog).
    CatalogLoaded { symptoms: Vec<Symptom> },

    /// The catalog request failed at the transport or HTTP level.
    CatalogFailed { error: String },

    /// The analysis request returned a result.
    AnalysisCompleted { result: AnalysisResult },

    /// The analysis request failed for any reason.
    AnalysisFailed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_catalog_single_symptom() {
        let body = json!({"symptoms": [{"id": "a", "en": "Cough", "zh": "咳嗽", "regions": ["chest"]}]});
        let catalog = parse_catalog(&body);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "a");
        assert_eq!(catalog[0].label(Lang::En), "Cough");
        assert_eq!(catalog[0].label(Lang::Zh), "咳嗽");
        assert_eq!(catalog[0].regions, vec!["chest".to_string()]);
    }

    #[test]
    fn test_parse_catalog_non_array_is_empty() {
        assert!(parse_catalog(&json!({"symptoms": "oops"})).is_empty());
        assert!(parse_catalog(&json!({})).is_empty());
        assert!(parse_catalog(&json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_parse_catalog_skips_entries_without_id() {
        let body = json!({"symptoms": [
            {"en": "No id"},
            {"id": 7, "en": "Numeric id"},
            {"id": "b", "en": "Fever", "regions": "whole"},
        ]});
        let catalog = parse_catalog(&body);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "b");
        assert_eq!(catalog[0].zh, "");
        assert!(catalog[0].regions.is_empty());
    }

    #[test]
    fn test_analyze_request_wire_shape() {
        let req = AnalyzeRequest::new(Lang::Zh, ["a", "c"]);
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(
            wire,
            json!({"lang": "zh", "symptoms": [{"id": "a"}, {"id": "c"}]})
        );
    }

    #[test]
    fn test_lang_from_str() {
        assert_eq!("EN".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!(" zh ".parse::<Lang>().unwrap(), Lang::Zh);
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn test_field_value_truthiness() {
        assert!(!FieldValue(json!(null)).is_truthy());
        assert!(!FieldValue(json!("")).is_truthy());
        assert!(!FieldValue(json!(0)).is_truthy());
        assert!(!FieldValue(json!(false)).is_truthy());
        assert!(FieldValue(json!("x")).is_truthy());
        assert!(FieldValue(json!([])).is_truthy());
        assert!(FieldValue(json!({})).is_truthy());
        assert!(FieldValue(json!(-1.5)).is_truthy());
    }

    #[test]
    fn test_value_text_forms() {
        assert_eq!(value_text(&json!("abc")), "abc");
        assert_eq!(value_text(&json!(3)), "3");
        assert_eq!(value_text(&json!(["a", 1, null])), "a,1,");
        assert_eq!(value_text(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn test_analysis_result_from_value() {
        let result = AnalysisResult::from_value(json!({
            "title": "X",
            "aiNotes": "n",
            "eightEvidence": ["e1"],
            "unknownField": true,
        }));
        assert_eq!(result.title, Some(FieldValue(json!("X"))));
        assert_eq!(result.ai_notes, Some(FieldValue(json!("n"))));
        assert!(result.eight_evidence.is_some());
        assert!(result.pattern.is_none());
        assert_eq!(result.raw["unknownField"], json!(true));

        let odd = AnalysisResult::from_value(json!(["not", "an", "object"]));
        assert!(odd.title.is_none());
        assert!(odd.raw.is_array());
    }
}
