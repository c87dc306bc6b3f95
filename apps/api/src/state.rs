use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::maps_client::PlacesLookup;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
    /// `None` when no maps credential is configured.
    pub places: Option<Arc<dyn PlacesLookup>>,
}
