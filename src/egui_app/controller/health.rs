use super::*;
use crate::scoring::{FetchError, HealthStatus};

impl EguiController {
    pub(super) fn check_health(&mut self) {
        if self.jobs.begin_health_check().is_some() {
            self.set_status("Checking scoring service...", StatusTone::Busy);
        }
    }

    pub(super) fn handle_health_checked(&mut self, result: Result<HealthStatus, FetchError>) {
        match result {
            Ok(health) if health.is_ready() => {
                self.set_status("Service healthy", StatusTone::Info);
            }
            Ok(health) => {
                tracing::warn!(status = %health.status, model_loaded = health.model_loaded, "Scoring service not ready");
                self.set_status("Service up, model not loaded", StatusTone::Warning);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Health check failed");
                self.set_status("Service unreachable", StatusTone::Error);
            }
        }
    }
}
