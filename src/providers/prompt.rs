//! Prompt & schema contract for the model-backed strategy
//!
//! The instruction text is a rendering of the shared rule table in
//! `core::rules`: the model is told the exact rules the deterministic
//! validator runs, so the two strategies cannot drift apart.

use serde_json::{json, Value};

use crate::core::rules::all_rules;
use crate::core::validator::SUCCESS_MARKER;
use crate::models::NumericInputs;

/// Build the Indonesian-language instruction sent to Gemini.
/// Used both by direct mode here and (verbatim) by the backend function.
pub fn generate_prompt(shape_label: &str, numeric_inputs: &NumericInputs) -> String {
    // BTreeMap keys are ordered, so the serialized payload is stable
    let inputs_json = serde_json::to_string(numeric_inputs).unwrap_or_else(|_| "{}".to_string());

    let rule_lines: String = all_rules()
        .iter()
        .map(|rule| format!("- {}\n", rule.prompt_rule))
        .collect();

    format!(
        "\nAnda adalah seorang ahli geometri. Seorang pengguna telah memberikan ukuran untuk bangun datar tertentu.\n\
         Tugas Anda adalah memvalidasi apakah ukuran-ukuran ini dapat membentuk bangun yang ditentukan DAN menghitung kelilingnya jika valid.\n\
         \n\
         Bangun: {shape_label}\n\
         Ukuran: {inputs_json}\n\
         \n\
         Jawab dalam format JSON sesuai dengan skema yang diberikan.\n\
         - Jika ukurannya valid, 'explanation' HARUS berisi teks \"{SUCCESS_MARKER}\".\n\
         - Jika ukurannya tidak valid, 'explanation' harus berisi penjelasan singkat mengapa ukuran tersebut tidak valid dalam Bahasa Indonesia.\n\
         \n\
         Berikut adalah aturan validasi:\n\
         {rule_lines}\
         Pastikan sisi miring (hypotenuse) selalu sisi terpanjang untuk segitiga siku-siku.\n\
         \n\
         Jika ukurannya TIDAK VALID, nilai 'keliling' harus 0.\n"
    )
}

/// Gemini structured-output schema: exactly the three `ValidationResult`
/// fields, all required, keliling forced to 0 when invalid.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isValid": {
                "type": "BOOLEAN",
                "description": "Apakah ukurannya membentuk bangun yang valid."
            },
            "explanation": {
                "type": "STRING",
                "description": "Penjelasan singkat tentang hasil validasi dalam Bahasa Indonesia."
            },
            "keliling": {
                "type": "NUMBER",
                "description": "Keliling dari bangun tersebut jika ukurannya valid. Jika tidak valid, nilainya harus 0."
            }
        },
        "required": ["isValid", "explanation", "keliling"]
    })
}

/// Strip a surrounding markdown code fence (```json ... ```), if present.
/// Models sometimes wrap structured output in a fence even when asked for
/// raw JSON.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_close = without_open.strip_suffix("```").unwrap_or(without_open);
    without_close.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShapeKind;

    fn sample_inputs() -> NumericInputs {
        [("sisi1", 5.0), ("sisi2", 5.0), ("sisi3", 5.0), ("sisi4", 5.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_prompt_contains_label_and_inputs() {
        let prompt = generate_prompt(ShapeKind::Square.label(), &sample_inputs());
        assert!(prompt.contains("Bangun: Persegi"));
        assert!(prompt.contains("\"sisi1\":5.0"));
    }

    #[test]
    fn test_prompt_contains_every_rule_line() {
        let prompt = generate_prompt(ShapeKind::Square.label(), &sample_inputs());
        for rule in all_rules() {
            assert!(prompt.contains(rule.prompt_rule), "missing rule for {}", rule.label);
        }
    }

    #[test]
    fn test_prompt_mandates_success_marker_and_zero_keliling() {
        let prompt = generate_prompt(ShapeKind::RightTriangle.label(), &sample_inputs());
        assert!(prompt.contains(SUCCESS_MARKER));
        assert!(prompt.contains("nilai 'keliling' harus 0"));
    }

    #[test]
    fn test_schema_requires_three_fields() {
        let schema = response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        for field in ["isValid", "explanation", "keliling"] {
            assert!(required.iter().any(|v| v == field), "{} must be required", field);
            assert!(schema["properties"][field].is_object());
        }
    }

    #[test]
    fn test_strip_json_fence() {
        let fenced = "```json\n{\"isValid\": true}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"isValid\": true}");
    }

    #[test]
    fn test_strip_bare_fence() {
        let fenced = "```\n{\"isValid\": false}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"isValid\": false}");
    }

    #[test]
    fn test_strip_unfenced_passthrough() {
        let plain = "  {\"isValid\": true}  ";
        assert_eq!(strip_code_fence(plain), "{\"isValid\": true}");
    }
}
