use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::sheets::SheetStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the backing spreadsheet. Constructed once at startup and
    /// injected everywhere — a trait object so tests can swap in a fake.
    pub sheets: Arc<dyn SheetStore>,
    pub llm: LlmClient,
}
