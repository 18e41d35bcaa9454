//! Shared state types for the egui UI.

mod catalog;
mod status;
mod submission;

pub use catalog::*;
pub use status::*;
pub use submission::*;

use crate::transaction::FormFields;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Raw text of the six inputs.
    pub form: FormFields,
    pub outcome: SubmissionOutcome,
    pub catalog: CatalogState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: FormFields::default(),
            outcome: SubmissionOutcome::default(),
            catalog: CatalogState::default(),
        }
    }
}
