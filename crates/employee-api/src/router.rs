//! Route table and middleware wiring

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::metrics::middleware::track_requests;
use crate::state::AppState;

/// Build the application router. Every route is wrapped by the metrics
/// middleware, including the scrape endpoint itself.
pub fn build_router(state: AppState) -> Router {
    let metrics = state.metrics.clone();

    Router::new()
        .route(
            "/api/employees",
            post(handlers::employees::create_employee).get(handlers::employees::list_employees),
        )
        .route(
            "/api/employees/{id}",
            delete(handlers::employees::delete_employee),
        )
        .route("/metrics", get(handlers::metrics::metrics_handler))
        .route("/health", get(handlers::health::health_check))
        .route_service("/", ServeFile::new("static/index.html"))
        .nest_service("/static", ServeDir::new("static"))
        .layer(middleware::from_fn_with_state(metrics, track_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
