pub mod client;
pub mod config;

pub use client::{ClientError, DetectorClient};
pub use config::DetectorConfig;

use serde::{Deserialize, Serialize};

/// Best-effort analysis of the raw input returned by the collaborator.
///
/// Transient: lives between a completed analysis call and either dismissal or
/// acceptance, never persisted. `confidence` is conventionally 0-1 but the
/// collaborator's value is passed through unclamped, and
/// `suggested_operations` may name ids unknown to the registry (the engine
/// skips those).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub format: String,
    pub confidence: f64,
    pub explanation: String,
    pub suggested_operations: Vec<String>,
}
