use super::jobs::{CatalogLoadResult, HealthCheckResult, JobMessage, ScoreResult};
use super::*;

impl EguiController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            };
            match message {
                JobMessage::Scored(ScoreResult { request_id, result }) => {
                    self.handle_score_result(request_id, result);
                }
                JobMessage::CatalogLoaded(CatalogLoadResult { result }) => {
                    self.jobs.clear_catalog_load();
                    self.handle_catalog_loaded(result);
                }
                JobMessage::HealthChecked(HealthCheckResult { result }) => {
                    self.jobs.clear_health_check();
                    self.handle_health_checked(result);
                }
            }
        }
    }
}
