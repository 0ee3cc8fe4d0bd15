//! Regional aggregation over the sub-national table.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::aggregates::{RegionalTotal, UNKNOWN_REGION};
use crate::models::observation::DengueTable;

/// Filters for the regional ranking. All are optional.
#[derive(Debug, Clone, Default)]
pub struct RegionFilters<'a> {
    pub country: Option<&'a str>,
    pub year: Option<i32>,
}

#[derive(Debug, sqlx::FromRow)]
struct RegionRow {
    country: String,
    region: String,
    total_cases: f64,
}

impl From<RegionRow> for RegionalTotal {
    fn from(row: RegionRow) -> Self {
        let region = if row.region.is_empty() {
            UNKNOWN_REGION.to_string()
        } else {
            row.region
        };
        Self {
            country: row.country,
            region,
            total_cases: row.total_cases,
        }
    }
}

/// `(country, region)` pairs ranked by summed case count, highest first.
///
/// Rows without a region never reach the aggregation.
pub async fn regional_totals(
    pool: &PgPool,
    table: DengueTable,
    filters: &RegionFilters<'_>,
    limit: i64,
) -> Result<Vec<RegionalTotal>, AppError> {
    let mut conditions = vec![
        "adm_0_name IS NOT NULL".to_string(),
        "adm_1_name IS NOT NULL".to_string(),
    ];
    let mut param_index = 0u32;

    if filters.country.is_some() {
        param_index += 1;
        conditions.push(format!("LOWER(adm_0_name) = LOWER(${param_index})"));
    }
    if filters.year.is_some() {
        param_index += 1;
        conditions.push(format!("year = ${param_index}"));
    }
    param_index += 1;

    let sql = format!(
        r#"
        SELECT
            adm_0_name AS country,
            adm_1_name AS region,
            COALESCE(SUM(dengue_total), 0)::DOUBLE PRECISION AS total_cases
        FROM {table}
        WHERE {}
        GROUP BY adm_0_name, adm_1_name
        ORDER BY total_cases DESC, country ASC, region ASC
        LIMIT ${param_index}
        "#,
        conditions.join(" AND ")
    );

    let mut query = sqlx::query_as::<_, RegionRow>(&sql);
    if let Some(country) = filters.country {
        query = query.bind(country);
    }
    if let Some(year) = filters.year {
        query = query.bind(year);
    }
    query = query.bind(limit);

    let rows = query.fetch_all(pool).await?;
    Ok(rows.into_iter().map(RegionalTotal::from).collect())
}
