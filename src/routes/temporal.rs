//! Temporal routes.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::query::ApiQuery;
use crate::models::aggregates::{TemporalQuery, TemporalRecord};
use crate::models::observation::DengueTable;
use crate::services::temporal::{self, SeriesFilters};
use crate::AppState;

/// GET /temporal/data?country=&start_date=&end_date=&limit= — a country's time series.
pub async fn data(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TemporalQuery>,
) -> Result<Json<ApiResponse<Vec<TemporalRecord>>>, AppError> {
    if params.country.trim().is_empty() {
        return Err(AppError::Validation("country must not be empty".to_string()));
    }

    let filters = SeriesFilters {
        country: &params.country,
        start_date: params.start_date,
        end_date: params.end_date,
    };
    let limit = params.limit(state.config.max_query_limit);
    let rows = temporal::series(&state.db, DengueTable::Temporal, &filters, limit).await?;
    Ok(ApiResponse::success(rows))
}
