//! Request logging middleware.
//!
//! Every request is logged as `[METHOD] /path` before it reaches a handler,
//! and its completion is logged with status and duration afterwards.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Requests slower than this are logged as warnings.
const SLOW_REQUEST_MS: u128 = 100;

/// Middleware that logs each request and its timing.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, middleware};
/// use repo_registry_server::middleware::log_request;
///
/// let app = Router::new()
///     .route("/repositories", get(handler))
///     .layer(middleware::from_fn(log_request));
/// ```
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let start = Instant::now();

    tracing::info!(method = %method, path = %uri, "[{}] {}", method, uri);

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status().as_u16();

    if duration.as_millis() > SLOW_REQUEST_MS {
        tracing::warn!(
            method = %method,
            path = %uri,
            status = status,
            duration_ms = duration.as_millis(),
            "Slow request"
        );
    } else {
        tracing::debug!(
            method = %method,
            path = %uri,
            status = status,
            duration_ms = duration.as_millis(),
            "Request completed"
        );
    }

    response
}
