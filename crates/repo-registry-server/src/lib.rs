//! Repository Registry Server
//!
//! An Axum-based web server exposing the in-memory repository registry:
//! - `GET /repositories` and `POST /repositories`
//! - `PUT` and `DELETE /repositories/:id`
//! - `POST /repositories/:id/like`
//! - `GET /health`

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

use axum::routing::{get, post, put};
use axum::{middleware as axum_middleware, Router};
use tower_http::cors::{Any, CorsLayer};

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody};
pub use state::{AppState, SharedRegistry};

/// Health check endpoint.
///
/// Returns "ok" to indicate the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Build the application router around `state`.
///
/// Every `/repositories/:id` route sits behind the identifier-existence
/// check. All requests pass through the logging hook and a permissive CORS
/// layer.
pub fn router(state: AppState) -> Router {
    // CORS layer for cross-origin requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let by_id = Router::new()
        .route(
            "/repositories/:id",
            put(api::repositories::update_repository).delete(api::repositories::delete_repository),
        )
        .route(
            "/repositories/:id/like",
            post(api::repositories::like_repository),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_existing_repository,
        ));

    Router::new()
        .route("/health", get(health))
        .route(
            "/repositories",
            get(api::repositories::list_repositories).post(api::repositories::create_repository),
        )
        .merge(by_id)
        .with_state(state)
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::log_request))
}
