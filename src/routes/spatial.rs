//! Spatial routes.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::query::ApiQuery;
use crate::models::aggregates::{RegionalTotal, RegionsQuery};
use crate::models::observation::DengueTable;
use crate::services::spatial::{self, RegionFilters};
use crate::AppState;

/// GET /spatial/regions?country=&year=&limit= — regions ranked by total cases.
pub async fn regions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RegionsQuery>,
) -> Result<Json<ApiResponse<Vec<RegionalTotal>>>, AppError> {
    let filters = RegionFilters {
        country: params.country(),
        year: params.year,
    };
    let limit = params.limit(state.config.max_query_limit);
    let rows = spatial::regional_totals(&state.db, DengueTable::Spatial, &filters, limit).await?;
    Ok(ApiResponse::success(rows))
}
