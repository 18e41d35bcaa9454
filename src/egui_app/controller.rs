//! Controller that owns the UI state and runs service calls off the UI thread.

mod background_jobs;
mod catalog;
mod health;
mod jobs;
mod submission;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::scoring::{HttpScoringService, ScoringService};
use jobs::ControllerJobs;
use std::sync::Arc;

/// Maintains app state and bridges the scoring service to the egui UI.
pub struct EguiController {
    ui: UiState,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(service: Arc<dyn ScoringService>) -> Self {
        Self {
            ui: UiState::default(),
            jobs: ControllerJobs::new(service),
        }
    }

    /// Controller backed by the HTTP client for `config.api_base_url`.
    pub fn from_config(config: &AppConfig) -> Self {
        let service = HttpScoringService::new(config);
        tracing::info!(base_url = service.base_url(), "Using scoring service");
        Self::new(Arc::new(service))
    }

    /// Kick off the one-time startup jobs: catalog load and health probe.
    pub fn start(&mut self) {
        self.load_catalog();
        self.check_health();
    }

    /// Read-only view of the UI model.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Apply every finished background result. Call once per frame.
    pub fn poll_jobs(&mut self) {
        self.poll_background_jobs();
    }

    /// True while any request is in flight and the UI should keep repainting.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.has_pending()
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text.into(), tone);
    }
}
