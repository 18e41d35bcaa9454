use super::*;
use crate::scoring::{FetchError, SampleCatalog};

impl EguiController {
    /// Request the sample catalog. Only the first call per controller does anything.
    pub fn load_catalog(&mut self) {
        if !matches!(self.ui.catalog, CatalogState::NotRequested) {
            return;
        }
        if self.jobs.begin_catalog_load().is_some() {
            self.ui.catalog = CatalogState::Loading;
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.ui.catalog
    }

    pub(super) fn handle_catalog_loaded(&mut self, result: Result<SampleCatalog, FetchError>) {
        match result {
            Ok(catalog) => {
                tracing::info!(samples = catalog.samples.len(), "Sample catalog loaded");
                self.ui.catalog = CatalogState::Loaded(catalog);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch sample transactions");
                self.ui.catalog = CatalogState::Degraded;
            }
        }
    }
}
