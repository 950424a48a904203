//! Request metrics middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use super::Metrics;

/// Wraps every dispatched request: times the handler and records the
/// counter and latency histogram keyed by method and literal path with
/// the final status code.
pub async fn track_requests(
    State(metrics): State<Arc<Metrics>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let endpoint = request.uri().path().to_string();

    let response = next.run(request).await;

    metrics.record_request(&method, &endpoint, response.status().as_u16(), started);
    response
}
