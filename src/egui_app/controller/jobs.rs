use crate::scoring::{
    FetchError, HealthStatus, Prediction, SampleCatalog, ScoringError, ScoringService,
};
use crate::transaction::TransactionFeatures;
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread::{self, JoinHandle},
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    Scored(ScoreResult),
    CatalogLoaded(CatalogLoadResult),
    HealthChecked(HealthCheckResult),
}

#[derive(Debug)]
pub(crate) struct ScoreResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<Prediction, ScoringError>,
}

#[derive(Debug)]
pub(crate) struct CatalogLoadResult {
    pub(crate) result: Result<SampleCatalog, FetchError>,
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) result: Result<HealthStatus, FetchError>,
}

/// Runs service calls on worker threads and funnels results back to the UI
/// thread through a single channel.
///
/// Dropping this drops the receiver, so results that arrive afterwards fail
/// to send and are discarded by the worker.
pub(crate) struct ControllerJobs {
    service: Arc<dyn ScoringService>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    scoring_request: Option<u64>,
    next_request_id: u64,
    catalog_load_in_progress: bool,
    health_check_in_progress: bool,
}

impl ControllerJobs {
    pub(crate) fn new(service: Arc<dyn ScoringService>) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            service,
            message_tx,
            message_rx,
            scoring_request: None,
            next_request_id: 1,
            catalog_load_in_progress: false,
            health_check_in_progress: false,
        }
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.scoring_request.is_some()
            || self.catalog_load_in_progress
            || self.health_check_in_progress
    }

    pub(crate) fn scoring_in_progress(&self) -> bool {
        self.scoring_request.is_some()
    }

    /// Start a scoring request unless one is already in flight.
    ///
    /// The handle yields whether the result reached the controller.
    pub(crate) fn begin_scoring(
        &mut self,
        features: TransactionFeatures,
    ) -> Option<(u64, JoinHandle<bool>)> {
        if self.scoring_request.is_some() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        self.scoring_request = Some(request_id);
        let service = Arc::clone(&self.service);
        let tx = self.message_tx.clone();
        let handle = thread::spawn(move || {
            let result = service.predict(&features);
            deliver(&tx, JobMessage::Scored(ScoreResult { request_id, result }), "scoring")
        });
        Some((request_id, handle))
    }

    /// Mark the scoring request finished; false if `request_id` is not the one in flight.
    pub(crate) fn finish_scoring(&mut self, request_id: u64) -> bool {
        if self.scoring_request != Some(request_id) {
            return false;
        }
        self.scoring_request = None;
        true
    }

    pub(crate) fn begin_catalog_load(&mut self) -> Option<JoinHandle<bool>> {
        if self.catalog_load_in_progress {
            return None;
        }
        self.catalog_load_in_progress = true;
        let service = Arc::clone(&self.service);
        let tx = self.message_tx.clone();
        Some(thread::spawn(move || {
            let result = service.sample_catalog();
            deliver(
                &tx,
                JobMessage::CatalogLoaded(CatalogLoadResult { result }),
                "catalog",
            )
        }))
    }

    pub(crate) fn clear_catalog_load(&mut self) {
        self.catalog_load_in_progress = false;
    }

    pub(crate) fn begin_health_check(&mut self) -> Option<JoinHandle<bool>> {
        if self.health_check_in_progress {
            return None;
        }
        self.health_check_in_progress = true;
        let service = Arc::clone(&self.service);
        let tx = self.message_tx.clone();
        Some(thread::spawn(move || {
            let result = service.health();
            deliver(
                &tx,
                JobMessage::HealthChecked(HealthCheckResult { result }),
                "health",
            )
        }))
    }

    pub(crate) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}

fn deliver(tx: &Sender<JobMessage>, message: JobMessage, job: &'static str) -> bool {
    let delivered = tx.send(message).is_ok();
    if !delivered {
        tracing::debug!(job, "Controller dropped; discarding late result");
    }
    delivered
}
