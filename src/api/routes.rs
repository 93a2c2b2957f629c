use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Selection
        .route("/colors", post(handlers::add_color))
        .route("/colors", get(handlers::list_colors))
        .route("/colors", delete(handlers::clear_colors))
        .route("/colors/:index", delete(handlers::remove_color))
        // Inference & recommendations
        .route("/emotions", get(handlers::inferred_emotions))
        .route("/recommendations", post(handlers::recommend))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
