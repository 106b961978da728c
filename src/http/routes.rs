use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .route("/languages", get(handlers::list_languages))
        // Scanner view
        .route("/scanner", get(handlers::get_scanner))
        .route("/scanner/language", put(handlers::set_language))
        .route(
            "/scanner/file",
            post(handlers::upload_file).delete(handlers::remove_file),
        )
        .route("/scanner/analyze", post(handlers::analyze))
        .route("/scanner/view", put(handlers::set_view))
        .route("/scanner/render", get(handlers::render_view))
        // Archive view
        .route(
            "/archive",
            get(handlers::get_archive).delete(handlers::clear_archive),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
