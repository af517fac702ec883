//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    fallback,
    api::{api_all_subjects, api_health, api_stage_grid, api_subject},
    hub::hub_page,
    subject::subject_page,
    wizard::wizard_page,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.static_dir);
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                      get(hub_page))
        .route("/subjects/{subject_id}", get(subject_page))
        .route("/wizard",                get(wizard_page))

        // API endpoints
        .route("/api/health",                                     get(api_health))
        .route("/api/subjects/all",                               get(api_all_subjects))
        .route("/api/subjects/{subject_id}",                      get(api_subject))
        .route("/api/subjects/{subject_id}/stages/{stage_id}/grid", get(api_stage_grid))

        // Static files
        .nest_service("/static", static_dir)
        .fallback(fallback)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
