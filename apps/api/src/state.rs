use std::sync::Arc;

use crate::config::Config;
use crate::hierarchy::registry::HierarchyRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded hierarchy, seeds and the similarity backend chosen via HIERARCHY_SIMILARITY.
    pub registry: Arc<HierarchyRegistry>,
    pub config: Config,
}
