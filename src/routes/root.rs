//! API metadata at the root path.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::ApiResponse;

pub const API_NAME: &str = "Dengue Data API";
pub const API_VERSION: &str = "1.0.0";

/// Public query endpoints advertised by the root path.
pub const ENDPOINTS: [&str; 6] = [
    "/national/stats",
    "/national/countries",
    "/national/yearly",
    "/spatial/regions",
    "/temporal/data",
    "/health",
];

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMetadata {
    pub api_name: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// GET / — API name, version and endpoint list.
pub async fn index() -> Json<ApiResponse<ApiMetadata>> {
    ApiResponse::success_with_message(
        ApiMetadata {
            api_name: API_NAME.to_string(),
            version: API_VERSION.to_string(),
            endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        },
        "Welcome to the Dengue Data API",
    )
}
