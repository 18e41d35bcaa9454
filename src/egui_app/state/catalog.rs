use crate::scoring::SampleCatalog;

/// Lifecycle of the sample catalog for one controller.
///
/// `Loaded` and `Degraded` are terminal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    /// No request has been issued yet.
    #[default]
    NotRequested,
    /// The single catalog request is in flight.
    Loading,
    /// Samples and explanations are available; the list may be empty.
    Loaded(SampleCatalog),
    /// The catalog could not be fetched; manual entry still works.
    Degraded,
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn catalog(&self) -> Option<&SampleCatalog> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }
}
