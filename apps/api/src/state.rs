use std::sync::Arc;

use crate::chat::SessionStore;
use crate::classifier::ClassifierService;
use crate::clusters::ClusterMap;
use crate::config::Config;
use crate::llm_client::GenerativeGateway;

/// Shared application state injected into all route handlers via Axum
/// extractors. The classifier and cluster map are loaded once at startup and
/// only read afterwards; `None` means the artifact failed to load and
/// prediction answers 503 until restart.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Option<Arc<ClassifierService>>,
    pub clusters: Arc<ClusterMap>,
    /// Pluggable generator. Production: `GeminiClient`. Tests swap stubs.
    pub gateway: Arc<dyn GenerativeGateway>,
    pub sessions: SessionStore,
    pub config: Config,
}
