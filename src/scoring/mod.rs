//! Client side of the fraud scoring service.
//!
//! [`ScoringService`] is the seam the controller talks through; the HTTP
//! implementation lives in [`api`].

pub mod api;

#[cfg(test)]
pub(crate) mod fake;

pub use api::{
    FetchError, HealthStatus, HttpScoringService, Prediction, SampleCatalog, ScoringError,
};

use crate::transaction::TransactionFeatures;

/// Operations the UI needs from the remote service.
///
/// Calls block; the controller runs them on worker threads.
pub trait ScoringService: Send + Sync {
    /// `POST /predict` with the six features.
    fn predict(&self, features: &TransactionFeatures) -> Result<Prediction, ScoringError>;

    /// `GET /sample-transactions`.
    fn sample_catalog(&self) -> Result<SampleCatalog, FetchError>;

    /// `GET /health`.
    fn health(&self) -> Result<HealthStatus, FetchError>;
}
