//! Application route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{health_routes, school_routes, student_routes};
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .nest("/health", health_routes())
        .nest("/schools", school_routes())
        .nest("/students", student_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
