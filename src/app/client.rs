// SymptomLens - app/client.rs
//
// Blocking HTTP client for the symptom catalog and analysis endpoints.
// Always called from a background thread owned by `RequestManager`, never
// from the UI thread.
//
// Every failure (transport, HTTP status, JSON decode) is an `ApiError`; the
// caller decides how much of the distinction to surface.

use crate::core::model::{parse_catalog, AnalysisResult, AnalyzeRequest, Symptom};
use crate::util::constants::{ANALYZE_PATH, APP_NAME, APP_VERSION, SYMPTOMS_PATH};
use crate::util::error::ApiError;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Client for one analysis service, identified by its base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`. A trailing `/` is trimmed.
    ///
    /// The request timeout is disabled: an analysis call waits for as long as
    /// the server takes.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(format!("{APP_NAME}/{APP_VERSION}"))
            .build()
            .map_err(|e| ApiError::Client { source: e })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /api/symptoms`.
    ///
    /// A body without a `symptoms` array is not an error: it yields an empty
    /// catalog.
    pub fn fetch_catalog(&self) -> Result<Vec<Symptom>, ApiError> {
        let url = self.endpoint(SYMPTOMS_PATH);
        tracing::debug!(url = %url, "Fetching symptom catalog");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;
        let body = read_json(url, response)?;

        Ok(parse_catalog(&body))
    }

    /// `POST /api/analyze` with the given selection.
    pub fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, ApiError> {
        let url = self.endpoint(ANALYZE_PATH);
        tracing::debug!(
            url = %url,
            lang = %request.lang,
            ids = ?request.symptoms.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            "Submitting analysis request"
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;
        let body = read_json(url, response)?;

        Ok(AnalysisResult::from_value(body))
    }
}

/// Reject non-success statuses, then decode the body as JSON. A `null` body
/// carries no fields to read and is rejected too.
fn read_json(url: String, response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { url, status });
    }
    let body = response.json::<Value>().map_err(|e| ApiError::Decode {
        url: url.clone(),
        source: e,
    })?;
    if body.is_null() {
        return Err(ApiError::NullBody { url });
    }
    Ok(body)
}
