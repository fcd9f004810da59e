use auto_finder::catalog::{Catalog, CatalogLoader};
use auto_finder::error::AppError;
use auto_finder::recommendation::{PreferenceBounds, Recommender};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only state shared by the recommendation handlers.
#[derive(Debug, Clone)]
pub(crate) struct RecommendationContext {
    pub(crate) recommender: Recommender,
    pub(crate) bounds: PreferenceBounds,
}

impl RecommendationContext {
    pub(crate) fn new(catalog: Catalog) -> Self {
        Self {
            recommender: Recommender::new(Arc::new(catalog)),
            bounds: PreferenceBounds::default(),
        }
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        self.recommender.catalog()
    }
}

/// Command-line path wins over the configured one; neither means embedded.
pub(crate) fn load_catalog(
    cli_path: Option<&Path>,
    configured: Option<&Path>,
) -> Result<Catalog, AppError> {
    Ok(CatalogLoader::load(cli_path.or(configured))?)
}
