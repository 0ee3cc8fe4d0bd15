//! Health check endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::observation::DengueTable;
use crate::services::national;
use crate::AppState;

/// Health detail. Not wrapped in the envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database_connection: String,
    pub records_count: i64,
}

/// GET /health — counts the national table to prove the store is reachable.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthStatus>, AppError> {
    let records_count = national::count_records(&state.db, DengueTable::National).await?;

    Ok(Json(HealthStatus {
        status: "healthy".to_string(),
        database_connection: "ok".to_string(),
        records_count,
    }))
}
