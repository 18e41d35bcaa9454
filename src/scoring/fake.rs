//! Scripted in-memory service used by controller tests.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};

use super::{FetchError, HealthStatus, Prediction, SampleCatalog, ScoringError, ScoringService};
use crate::transaction::TransactionFeatures;

#[derive(Default)]
struct Script {
    predictions: VecDeque<Result<Prediction, ScoringError>>,
    catalog: Option<Result<SampleCatalog, FetchError>>,
    health: Option<Result<HealthStatus, FetchError>>,
    predict_calls: Vec<TransactionFeatures>,
    catalog_calls: usize,
    health_calls: usize,
}

/// Returns queued results in order and records every call.
///
/// When gated, `predict` blocks until the paired sender fires or is dropped.
#[derive(Clone, Default)]
pub(crate) struct FakeScoringService {
    script: Arc<Mutex<Script>>,
    gate: Option<Arc<Mutex<Receiver<()>>>>,
}

impl FakeScoringService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A fake whose `predict` calls wait for a release signal.
    pub(crate) fn gated() -> (Self, Sender<()>) {
        let (tx, rx) = channel();
        let fake = Self {
            gate: Some(Arc::new(Mutex::new(rx))),
            ..Self::default()
        };
        (fake, tx)
    }

    pub(crate) fn push_prediction(&self, result: Result<Prediction, ScoringError>) {
        self.lock().predictions.push_back(result);
    }

    pub(crate) fn set_catalog(&self, result: Result<SampleCatalog, FetchError>) {
        self.lock().catalog = Some(result);
    }

    pub(crate) fn set_health(&self, result: Result<HealthStatus, FetchError>) {
        self.lock().health = Some(result);
    }

    pub(crate) fn predict_calls(&self) -> Vec<TransactionFeatures> {
        self.lock().predict_calls.clone()
    }

    pub(crate) fn catalog_calls(&self) -> usize {
        self.lock().catalog_calls
    }

    pub(crate) fn health_calls(&self) -> usize {
        self.lock().health_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl ScoringService for FakeScoringService {
    fn predict(&self, features: &TransactionFeatures) -> Result<Prediction, ScoringError> {
        self.lock().predict_calls.push(*features);
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap_or_else(|err| err.into_inner()).recv();
        }
        self.lock()
            .predictions
            .pop_front()
            .unwrap_or_else(|| Err(ScoringError::Transport("no scripted response".to_string())))
    }

    fn sample_catalog(&self) -> Result<SampleCatalog, FetchError> {
        let mut script = self.lock();
        script.catalog_calls += 1;
        script
            .catalog
            .clone()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted catalog".to_string())))
    }

    fn health(&self) -> Result<HealthStatus, FetchError> {
        let mut script = self.lock();
        script.health_calls += 1;
        script
            .health
            .clone()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted health".to_string())))
    }
}
