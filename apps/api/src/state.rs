use std::sync::Arc;

use crate::analysis::AnalysisBackend;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-session flow state, keyed by session id. In-memory only.
    pub sessions: SessionStore,
    /// Pluggable narrative backend. Default: LlmAnalysisBackend over Claude.
    pub analysis: Arc<dyn AnalysisBackend>,
}
