use crate::detect::config::{DetectorConfig, MIN_INPUT_CHARS};
use crate::detect::DetectionResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Operation ids the collaborator is allowed to suggest.
pub const SUGGESTIBLE_OPERATIONS: [&str; 6] = [
    "base64-decode",
    "hex-decode",
    "url-decode",
    "json-prettify",
    "rot13",
    "sha256",
];

/// Error types for collaborator requests.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Server error: {0}")]
    ServerError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Empty response from collaborator")]
    EmptyResponse,
}

/// Client for the format-detection collaborator.
///
/// Detection is advisory: every failure degrades to "no suggestion" and is
/// logged for diagnostics only. Overlapping calls are independent; results are
/// attributed to their own invocation and nothing tracks request generations.
pub struct DetectorClient {
    http: reqwest::Client,
    config: DetectorConfig,
}

impl DetectorClient {
    /// Create a new client from environment variables.
    /// Returns None if no API key is configured.
    pub fn from_env() -> Option<Self> {
        DetectorConfig::from_env().map(Self::new)
    }

    pub fn new(config: DetectorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Analyze the input and return a best-effort suggestion, or None.
    ///
    /// Inputs below the minimum length are never sent. Any collaborator-side
    /// fault is swallowed after a warning; the caller only ever sees an
    /// absent suggestion.
    pub async fn detect(&self, input: &str) -> Option<DetectionResult> {
        if input.trim().chars().count() < MIN_INPUT_CHARS {
            return None;
        }
        match self.request_detection(input).await {
            Ok(result) => {
                debug!(format = %result.format, confidence = result.confidence, "detection completed");
                Some(result)
            }
            Err(err) => {
                warn!(error = %err, "format detection degraded to no suggestion");
                None
            }
        }
    }

    /// Raw detection request without the advisory degradation.
    pub async fn request_detection(&self, input: &str) -> Result<DetectionResult, ClientError> {
        let sample = truncate_sample(input, self.config.sample_bytes);
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: build_prompt(sample),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let url = format!("{}?key={}", self.config.generate_url(), self.config.api_key);
        let response = self
            .http
            .post(&url)
            .json(&payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::ServerError(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ClientError::DeserializationError(e.to_string()))?;

        let text = body
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(ClientError::EmptyResponse)?;

        serde_json::from_str(text.trim()).map_err(|e| ClientError::DeserializationError(e.to_string()))
    }
}

/// Cap the sample forwarded to the collaborator, respecting char boundaries.
fn truncate_sample(input: &str, max_bytes: usize) -> &str {
    if input.len() <= max_bytes {
        return input;
    }
    let mut end = max_bytes;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}

fn build_prompt(sample: &str) -> String {
    format!(
        "Analyze the following data and detect its encoding, hash type, or data format.\n\
         Input Data: {}\n\
         Return a JSON object with format, confidence (0-1), explanation, and a list of \
         suggested operation IDs from this set: [{}].",
        sample,
        SUGGESTIBLE_OPERATIONS.join(", ")
    )
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Serialize)]
struct TextPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
