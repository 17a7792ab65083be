// SymptomLens - core/render.rs
//
// Formats an analysis response as display lines.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{value_text, AnalysisResult, FieldValue, Lang};
use serde_json::Value;

/// Produce the ordered display lines for `result`.
///
/// The title (or a localized fallback) and a blank line always come first.
/// Every other section is emitted only when its field is present and truthy;
/// the evidence list additionally requires a non-empty array.
pub fn render_result(result: &AnalysisResult, lang: Lang) -> Vec<String> {
    let mut out = Vec::new();

    match truthy(&result.title) {
        Some(title) => out.push(title.text()),
        None => out.push(lang.result_fallback_title().to_string()),
    }
    out.push(String::new());

    let labelled = [
        ("Pattern hints: ", &result.pattern),
        ("Reasoning: ", &result.explanation),
        ("Principle: ", &result.principle),
        ("Acupuncture: ", &result.acupuncture),
        ("Herbal direction: ", &result.herbal),
        ("AI: ", &result.ai_notes),
        ("AI error: ", &result.ai_error),
    ];
    for (label, field) in labelled {
        if let Some(value) = truthy(field) {
            out.push(format!("{label}{}", value.text()));
        }
    }

    if let Some(warning) = truthy(&result.warning) {
        out.push(warning.text());
    }

    if let Some(principles) = truthy(&result.eight_principles) {
        let axis = |key: &str| principles.get(key).map(value_text).unwrap_or_default();
        out.push(String::new());
        out.push(lang.eight_principles_heading().to_string());
        out.push(format!(
            "{}{}",
            lang.interior_exterior_label(),
            axis("interiorExterior")
        ));
        out.push(format!("{}{}", lang.cold_heat_label(), axis("coldHeat")));
        out.push(format!("{}{}", lang.def_excess_label(), axis("defExcess")));
        out.push(format!("{}{}", lang.yin_yang_label(), axis("yinYang")));
    }

    if let Some(evidence) = result
        .eight_evidence
        .as_ref()
        .and_then(FieldValue::as_array)
        .filter(|items| !items.is_empty())
    {
        out.push(String::new());
        out.push(lang.evidence_heading().to_string());
        out.extend(evidence.iter().map(|e: &Value| format!("• {}", value_text(e))));
    }

    out
}

/// The rendered lines joined with newlines, as written into the result area.
pub fn format_result(result: &AnalysisResult, lang: Lang) -> String {
    render_result(result, lang).join("\n")
}

fn truthy(field: &Option<FieldValue>) -> Option<&FieldValue> {
    field.as_ref().filter(|v| v.is_truthy())
}
