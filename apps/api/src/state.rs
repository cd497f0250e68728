use std::sync::Arc;

use crate::config::Config;
use crate::resources::ResourceRecommender;
use crate::store::CareerStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Positions, focus sets and skill profiles. Default: `PgStore`.
    pub store: Arc<dyn CareerStore>,
    /// Learning-resource lookup for missing skills. Default: `CatalogRecommender`.
    pub recommender: Arc<dyn ResourceRecommender>,
    pub config: Config,
}
