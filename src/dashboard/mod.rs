//! Dashboard service: calls the query API over HTTP and serves page models,
//! a pass-through proxy and its own health check.

pub mod client;
pub mod format;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use client::ApiClient;

/// Shared state for dashboard handlers.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub client: ApiClient,
}

/// Build the dashboard router.
pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/country/{name}", get(routes::country))
        .route("/api/proxy/{*endpoint}", get(routes::proxy))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
