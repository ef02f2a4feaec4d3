use std::env;
use url::Url;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Largest input slice forwarded to the collaborator. Detection only needs a
/// prefix of the data, and the contract allows capping what is sent.
pub const DEFAULT_SAMPLE_BYTES: usize = 1000;

/// Inputs shorter than this are never sent for analysis.
pub const MIN_INPUT_CHARS: usize = 3;

/// Resolved collaborator configuration.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub api_key: String,
    pub endpoint: Url,
    pub model: String,
    pub sample_bytes: usize,
}

impl DetectorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is valid"),
            model: DEFAULT_MODEL.to_string(),
            sample_bytes: DEFAULT_SAMPLE_BYTES,
        }
    }

    /// Build configuration from environment variables.
    /// Returns None when no API key is configured.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("NOVACHEF_API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty())?;

        let mut config = Self::new(api_key);
        if let Ok(endpoint) = env::var("NOVACHEF_DETECT_URL") {
            config.endpoint = Url::parse(&endpoint).ok()?;
        }
        if let Ok(model) = env::var("NOVACHEF_DETECT_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(sample) = env::var("NOVACHEF_DETECT_SAMPLE_BYTES") {
            config.sample_bytes = sample.parse().ok()?;
        }
        Some(config)
    }

    /// Full generateContent URL for the configured model, without the key.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.as_str().trim_end_matches('/'),
            self.model
        )
    }
}
