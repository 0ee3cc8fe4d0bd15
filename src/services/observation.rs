//! Raw observation access. The API only reads; `insert` backs the seed tool
//! and the database-backed tests.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::observation::{
    DengueObservation, DengueTable, ObservationFields, OBSERVATION_COLUMNS,
};

/// Insert one observation and return it with its assigned id.
pub async fn insert(
    pool: &PgPool,
    table: DengueTable,
    fields: &ObservationFields,
) -> Result<DengueObservation, AppError> {
    let sql = format!(
        "INSERT INTO {table} ({OBSERVATION_COLUMNS}) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
         RETURNING id, {OBSERVATION_COLUMNS}"
    );

    let row = sqlx::query_as::<_, DengueObservation>(&sql)
        .bind(&fields.adm_0_name)
        .bind(&fields.adm_1_name)
        .bind(&fields.adm_2_name)
        .bind(&fields.full_name)
        .bind(&fields.iso_a0)
        .bind(fields.fao_gaul_code)
        .bind(&fields.rne_iso_code)
        .bind(&fields.ibge_code)
        .bind(fields.calendar_start_date)
        .bind(fields.calendar_end_date)
        .bind(fields.year)
        .bind(fields.dengue_total)
        .bind(&fields.case_definition_standardised)
        .bind(&fields.s_res)
        .bind(&fields.t_res)
        .bind(&fields.uuid)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Fetch a single observation by id, if present.
pub async fn find_by_id(
    pool: &PgPool,
    table: DengueTable,
    id: i32,
) -> Result<Option<DengueObservation>, AppError> {
    let sql = format!("SELECT id, {OBSERVATION_COLUMNS} FROM {table} WHERE id = $1");
    let row = sqlx::query_as::<_, DengueObservation>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}
