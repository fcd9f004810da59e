use crate::infra::{AppState, RecommendationContext};
use auto_finder::catalog::VehicleRecord;
use auto_finder::error::AppError;
use auto_finder::recommendation::{PreferenceBounds, PreferenceSet, Recommendation};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) vehicles: Vec<VehicleRecord>,
    pub(crate) body_types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PreferenceDefaultsResponse {
    pub(crate) preferences: PreferenceSet,
    pub(crate) bounds: PreferenceBounds,
}

pub(crate) fn with_recommendation_routes(context: Arc<RecommendationContext>) -> Router {
    Router::new()
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route(
            "/api/v1/preferences/defaults",
            get(preference_defaults_endpoint),
        )
        .route("/api/v1/recommendations", post(recommendation_endpoint))
        .with_state(context)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint(
    State(context): State<Arc<RecommendationContext>>,
) -> Json<CatalogResponse> {
    let catalog = context.catalog();
    Json(CatalogResponse {
        vehicles: catalog.vehicles().to_vec(),
        body_types: catalog.body_types(),
    })
}

pub(crate) async fn preference_defaults_endpoint(
    State(context): State<Arc<RecommendationContext>>,
) -> Json<PreferenceDefaultsResponse> {
    Json(PreferenceDefaultsResponse {
        preferences: PreferenceSet::defaults_for(context.catalog(), &context.bounds),
        bounds: context.bounds,
    })
}

pub(crate) async fn recommendation_endpoint(
    State(context): State<Arc<RecommendationContext>>,
    Json(prefs): Json<PreferenceSet>,
) -> Result<Json<Recommendation>, AppError> {
    context.bounds.check(&prefs, context.catalog())?;
    let recommendation = context.recommender.recommend(&prefs)?;

    info!(
        top_pick = %recommendation.top_pick.vehicle.display_name(),
        score = recommendation.top_pick.score,
        "recommendation served"
    );

    Ok(Json(recommendation))
}
