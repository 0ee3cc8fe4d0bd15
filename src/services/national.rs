//! Country-level aggregation queries: overall statistics, top countries, yearly totals.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::aggregates::{year_range, CountryTotal, DengueStats, YearlyTotal};
use crate::models::observation::DengueTable;

/// Intermediate row for the single-pass statistics query.
#[derive(Debug, sqlx::FromRow)]
struct StatsRow {
    total_records: i64,
    total_cases: f64,
    countries_count: i64,
    min_year: Option<i32>,
    max_year: Option<i32>,
}

impl From<StatsRow> for DengueStats {
    fn from(row: StatsRow) -> Self {
        Self {
            total_records: row.total_records,
            total_cases: row.total_cases,
            countries_count: row.countries_count,
            year_range: year_range(row.min_year, row.max_year),
        }
    }
}

/// Record count, case total, distinct countries and year span for a table.
pub async fn get_stats(pool: &PgPool, table: DengueTable) -> Result<DengueStats, AppError> {
    let sql = format!(
        r#"
        SELECT
            COUNT(*) AS total_records,
            COALESCE(SUM(dengue_total), 0)::DOUBLE PRECISION AS total_cases,
            COUNT(DISTINCT adm_0_name) AS countries_count,
            MIN(year) AS min_year,
            MAX(year) AS max_year
        FROM {table}
        "#
    );

    let row = sqlx::query_as::<_, StatsRow>(&sql).fetch_one(pool).await?;
    Ok(row.into())
}

/// Total number of rows in a table.
pub async fn count_records(pool: &PgPool, table: DengueTable) -> Result<i64, AppError> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let count = sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await?;
    Ok(count)
}

/// Countries ranked by summed case count, highest first.
///
/// Equal sums are ordered by country name so the ranking is stable.
pub async fn top_countries(
    pool: &PgPool,
    table: DengueTable,
    limit: i64,
) -> Result<Vec<CountryTotal>, AppError> {
    let sql = format!(
        r#"
        SELECT
            adm_0_name AS country,
            COALESCE(SUM(dengue_total), 0)::DOUBLE PRECISION AS total_cases
        FROM {table}
        WHERE adm_0_name IS NOT NULL
        GROUP BY adm_0_name
        ORDER BY total_cases DESC, country ASC
        LIMIT $1
        "#
    );

    let rows = sqlx::query_as::<_, CountryTotal>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Case totals per year, oldest first, optionally for a single country.
pub async fn yearly_totals(
    pool: &PgPool,
    table: DengueTable,
    country: Option<&str>,
) -> Result<Vec<YearlyTotal>, AppError> {
    let mut conditions = vec!["year IS NOT NULL".to_string()];
    if country.is_some() {
        conditions.push("LOWER(adm_0_name) = LOWER($1)".to_string());
    }

    let sql = format!(
        r#"
        SELECT
            year,
            COALESCE(SUM(dengue_total), 0)::DOUBLE PRECISION AS total_cases
        FROM {table}
        WHERE {}
        GROUP BY year
        ORDER BY year ASC
        "#,
        conditions.join(" AND ")
    );

    let mut query = sqlx::query_as::<_, YearlyTotal>(&sql);
    if let Some(country) = country {
        query = query.bind(country);
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}
