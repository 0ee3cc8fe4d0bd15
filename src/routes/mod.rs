//! Route definitions for the Dengue Data API.

pub mod health;
pub mod national;
pub mod root;
pub mod spatial;
pub mod temporal;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full query-service router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root::index))
        .route("/health", get(health::health))
        .route("/national/stats", get(national::stats))
        .route("/national/countries", get(national::countries))
        .route("/national/yearly", get(national::yearly))
        .route("/spatial/regions", get(spatial::regions))
        .route("/temporal/data", get(temporal::data))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
