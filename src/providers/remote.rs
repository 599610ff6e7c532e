//! Remote (model-backed) validation client
//!
//! Two transport modes behind one call:
//! - Delegated: POST to the backend-owned function that holds the API key
//! - Direct: call the Gemini REST endpoint with a local key (dev only)
//!
//! Whatever the transport, the response must be shaped exactly like a
//! `ValidationResult`. The geometric reasoning itself is the model's; this
//! client only enforces the envelope and the invalid ⇒ keliling = 0 rule.
//! Transport problems are raised as `AppError`, never as a geometric result.
//! One-shot: no retry, no coalescing; cancellation is caller-driven.

use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use crate::core::rules::rule_for;
use crate::core::validator::{parse_inputs, MSG_POSITIVE_INPUTS, MSG_UNKNOWN_SHAPE};
use crate::models::{
    AppError, AppResult, ErrorCode, NumericInputs, RawInputs, RemoteConfig, RemoteMode, ShapeKind,
    ValidationResult,
};
use crate::providers::prompt::{generate_prompt, response_schema, strip_code_fence};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// User-facing fault messages (Bahasa Indonesia, matching the product copy)
const MSG_SERVER_FAILED: &str =
    "Gagal memvalidasi lewat server. Pastikan Anda terhubung ke internet.";
const MSG_AI_FAILED: &str =
    "Gagal berkomunikasi dengan layanan AI (Local). Periksa API Key Anda.";
const MSG_EMPTY_RESPONSE: &str = "API mengembalikan respons kosong.";

/// Request body for the delegated backend function
#[derive(Debug, Serialize)]
struct BackendRequest<'a> {
    shape: ShapeKind,
    inputs: &'a NumericInputs,
    #[serde(rename = "shapeLabel")]
    shape_label: &'a str,
}

/// Gemini generateContent response envelope (only the fields we read)
#[derive(Debug, serde::Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, serde::Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, serde::Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, serde::Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

impl GeminiResponse {
    /// First candidate's concatenated text, if any
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Model-backed validation strategy
pub struct RemoteValidationClient {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl RemoteValidationClient {
    pub fn new(config: RemoteConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorCode::ConfigClientBuild, "Failed to create HTTP client", e)
            })?;
        Ok(Self { config, client })
    }

    /// Validate via the configured remote mode.
    ///
    /// Input parsing happens before any network call: a non-positive or
    /// non-numeric field short-circuits to the same positivity result the
    /// local validator returns (input errors are never transport faults,
    /// and NaN cannot ride in the JSON payload anyway).
    pub async fn validate(
        &self,
        shape: ShapeKind,
        inputs: &RawInputs,
    ) -> AppResult<ValidationResult> {
        let Some(rule) = rule_for(shape) else {
            return Ok(ValidationResult::invalid(MSG_UNKNOWN_SHAPE));
        };

        let Some(numeric) = parse_inputs(rule.fields, inputs) else {
            return Ok(ValidationResult::invalid(MSG_POSITIVE_INPUTS));
        };

        let result = match self.config.mode() {
            RemoteMode::Delegated => self.validate_via_backend(shape, rule.label, &numeric).await?,
            RemoteMode::Direct => self.validate_via_gemini(rule.label, &numeric).await?,
        };

        Ok(enforce_contract(result))
    }

    /// Delegated mode: the backend function owns the API key and the prompt
    async fn validate_via_backend(
        &self,
        shape: ShapeKind,
        shape_label: &str,
        numeric: &NumericInputs,
    ) -> AppResult<ValidationResult> {
        info!("🌐 Validating {} via backend function", shape_label);

        let body = BackendRequest {
            shape,
            inputs: numeric,
            shape_label,
        };

        let response = self
            .client
            .post(&self.config.backend_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Error calling backend function: {}", e);
                AppError::with_source(ErrorCode::RemoteUnreachable, MSG_SERVER_FAILED, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("❌ Backend returned {}: {}", status, detail);
            // Non-2xx body rides verbatim inside the fault message
            return Err(AppError::new(
                ErrorCode::RemoteBadStatus,
                format!("{} Server Error: {}", MSG_SERVER_FAILED, detail),
            ));
        }

        response.json::<ValidationResult>().await.map_err(|e| {
            error!("❌ Backend response was not a ValidationResult: {}", e);
            AppError::with_source(ErrorCode::RemoteMalformedBody, MSG_SERVER_FAILED, e)
        })
    }

    /// Direct mode: build the prompt locally and call Gemini ourselves
    async fn validate_via_gemini(
        &self,
        shape_label: &str,
        numeric: &NumericInputs,
    ) -> AppResult<ValidationResult> {
        info!("🤖 Validating {} via Gemini ({})", shape_label, self.config.model);

        // mode() returned Direct, so the key is present
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::new(ErrorCode::ConfigInvalidValue, "Direct mode without API key")
        })?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_BASE, self.config.model, api_key
        );

        let prompt = generate_prompt(shape_label, numeric);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            error!("❌ Error calling Gemini API: {}", e);
            AppError::with_source(ErrorCode::RemoteUnreachable, MSG_AI_FAILED, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("❌ Gemini API returned {}: {}", status, detail);
            return Err(AppError::new(ErrorCode::RemoteBadStatus, MSG_AI_FAILED));
        }

        let envelope: GeminiResponse = response.json().await.map_err(|e| {
            error!("❌ Gemini envelope parse failed: {}", e);
            AppError::with_source(ErrorCode::RemoteMalformedBody, MSG_AI_FAILED, e)
        })?;

        let text = envelope
            .text()
            .ok_or_else(|| AppError::new(ErrorCode::RemoteEmptyBody, MSG_EMPTY_RESPONSE))?;

        let cleaned = strip_code_fence(&text);
        serde_json::from_str::<ValidationResult>(cleaned).map_err(|e| {
            error!("❌ Gemini returned malformed result JSON: {}", e);
            AppError::with_source(ErrorCode::RemoteMalformedBody, MSG_AI_FAILED, e)
        })
    }
}

/// Contract enforcement: whatever the model said, an invalid result carries
/// keliling = 0.
fn enforce_contract(mut result: ValidationResult) -> ValidationResult {
    if !result.is_valid {
        result.keliling = 0.0;
    }
    result
}
