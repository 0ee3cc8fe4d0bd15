//! National routes: overall statistics, top countries and yearly totals.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::query::ApiQuery;
use crate::models::aggregates::{
    CountriesQuery, CountryTotal, DengueStats, YearlyQuery, YearlyTotal,
};
use crate::models::observation::DengueTable;
use crate::services::national;
use crate::AppState;

/// GET /national/stats — record count, case total, country count and year span.
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DengueStats>>, AppError> {
    let stats = national::get_stats(&state.db, DengueTable::National).await?;
    Ok(ApiResponse::success(stats))
}

/// GET /national/countries?limit= — countries ranked by total cases.
pub async fn countries(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CountriesQuery>,
) -> Result<Json<ApiResponse<Vec<CountryTotal>>>, AppError> {
    let limit = params.limit(state.config.max_query_limit);
    let rows = national::top_countries(&state.db, DengueTable::National, limit).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /national/yearly?country= — yearly totals, optionally for one country.
pub async fn yearly(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<YearlyQuery>,
) -> Result<Json<ApiResponse<Vec<YearlyTotal>>>, AppError> {
    let rows = national::yearly_totals(&state.db, DengueTable::National, params.country()).await?;
    Ok(ApiResponse::success(rows))
}
