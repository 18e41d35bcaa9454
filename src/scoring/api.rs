//! HTTP client for the scoring, catalog, and health endpoints.

use serde::Deserialize;

use super::ScoringService;
use crate::config::AppConfig;
use crate::http_client;
use crate::transaction::{FieldExplanations, SampleTransaction, TransactionFeatures, Verdict};

const MAX_PREDICT_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_HEALTH_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_CATALOG_RESPONSE_BYTES: usize = 1024 * 1024;

/// A successful scoring result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    pub verdict: Verdict,
    /// Fraud likelihood in `[0, 1]` as reported by the service.
    pub fraud_probability: f64,
}

/// Sample transactions plus their field explanations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SampleCatalog {
    pub samples: Vec<SampleTransaction>,
    #[serde(default, rename = "explanation")]
    pub explanations: FieldExplanations,
}

/// Service liveness as reported by `/health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_ready(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") && self.model_loaded
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ScoringError {
    /// Non-success status; `detail` is the service's explanation when given.
    #[error("{}", rejected_message(.status, .detail))]
    Rejected { status: u16, detail: Option<String> },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

fn rejected_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("request failed with status {status}"),
    }
}

impl ScoringError {
    /// Text shown to the user for a failed submission.
    pub fn failure_message(&self) -> String {
        self.to_string()
    }
}

/// Failure of a read-only GET (catalog or health).
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Blocking HTTP implementation of [`ScoringService`].
pub struct HttpScoringService {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpScoringService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            agent: http_client::build_agent(&config.http),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn get_text(&self, path: &str, max_bytes: usize) -> Result<String, FetchError> {
        let url = self.endpoint(path);
        let response = match self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(err)) => {
                return Err(FetchError::Transport(err.to_string()));
            }
        };
        http_client::read_response_text(response, max_bytes)
            .map_err(|err| FetchError::InvalidResponse(err.to_string()))
    }
}

impl ScoringService for HttpScoringService {
    fn predict(&self, features: &TransactionFeatures) -> Result<Prediction, ScoringError> {
        let url = self.endpoint("predict");
        tracing::debug!(?features, %url, "Sending scoring request");
        let request = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match request.send_json(features) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_text(response, MAX_PREDICT_RESPONSE_BYTES)
                    .unwrap_or_default();
                return Err(ScoringError::Rejected {
                    status: code,
                    detail: parse_error_detail(&body),
                });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(ScoringError::Transport(err.to_string()));
            }
        };

        let body = http_client::read_response_text(response, MAX_PREDICT_RESPONSE_BYTES)
            .map_err(|err| ScoringError::InvalidResponse(err.to_string()))?;
        let prediction = parse_prediction(&body)?;
        tracing::debug!(?prediction, "Received scoring response");
        Ok(prediction)
    }

    fn sample_catalog(&self) -> Result<SampleCatalog, FetchError> {
        let body = self.get_text("sample-transactions", MAX_CATALOG_RESPONSE_BYTES)?;
        parse_catalog(&body)
    }

    fn health(&self) -> Result<HealthStatus, FetchError> {
        let body = self.get_text("health", MAX_HEALTH_RESPONSE_BYTES)?;
        serde_json::from_str(body.trim()).map_err(|err| FetchError::InvalidResponse(err.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct PredictionWire {
    prediction: i64,
    fraud_probability: f64,
}

fn parse_prediction(body: &str) -> Result<Prediction, ScoringError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ScoringError::InvalidResponse(
            "Empty response body".to_string(),
        ));
    }
    let wire: PredictionWire = serde_json::from_str(trimmed)
        .map_err(|err| ScoringError::InvalidResponse(err.to_string()))?;
    let verdict = Verdict::from_prediction(wire.prediction).ok_or_else(|| {
        ScoringError::InvalidResponse(format!("unexpected prediction {}", wire.prediction))
    })?;
    if !(0.0..=1.0).contains(&wire.fraud_probability) {
        return Err(ScoringError::InvalidResponse(format!(
            "fraud_probability {} outside [0, 1]",
            wire.fraud_probability
        )));
    }
    Ok(Prediction {
        verdict,
        fraud_probability: wire.fraud_probability,
    })
}

/// Extract `detail` from an error body. Non-string details are kept as JSON.
fn parse_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body.trim()).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) if text.trim().is_empty() => None,
        serde_json::Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn parse_catalog(body: &str) -> Result<SampleCatalog, FetchError> {
    serde_json::from_str(body.trim()).map_err(|err| FetchError::InvalidResponse(err.to_string()))
}
