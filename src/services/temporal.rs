//! Time series for a single country.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::aggregates::TemporalRecord;
use crate::models::observation::DengueTable;

/// Filters for a country's time series. The country is mandatory.
#[derive(Debug, Clone)]
pub struct SeriesFilters<'a> {
    pub country: &'a str,
    /// Inclusive lower bound on `calendar_start_date`.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on `calendar_end_date`.
    pub end_date: Option<NaiveDate>,
}

/// Observations for one country ordered by window start.
///
/// A `start_date` after `end_date` is not rejected; it simply matches nothing.
pub async fn series(
    pool: &PgPool,
    table: DengueTable,
    filters: &SeriesFilters<'_>,
    limit: i64,
) -> Result<Vec<TemporalRecord>, AppError> {
    let mut conditions = vec!["LOWER(adm_0_name) = LOWER($1)".to_string()];
    let mut param_index = 1u32;

    if filters.start_date.is_some() {
        param_index += 1;
        conditions.push(format!("calendar_start_date >= ${param_index}"));
    }
    if filters.end_date.is_some() {
        param_index += 1;
        conditions.push(format!("calendar_end_date <= ${param_index}"));
    }
    param_index += 1;

    let sql = format!(
        r#"
        SELECT
            adm_0_name AS country,
            calendar_start_date AS start_date,
            calendar_end_date AS end_date,
            year,
            dengue_total AS dengue_cases,
            t_res AS time_resolution
        FROM {table}
        WHERE {}
        ORDER BY calendar_start_date ASC NULLS LAST, id ASC
        LIMIT ${param_index}
        "#,
        conditions.join(" AND ")
    );

    let mut query = sqlx::query_as::<_, TemporalRecord>(&sql).bind(filters.country);
    if let Some(start) = filters.start_date {
        query = query.bind(start);
    }
    if let Some(end) = filters.end_date {
        query = query.bind(end);
    }
    query = query.bind(limit);

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}
