//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (or `DB_USER`/`DB_PASSWORD`) environment variables (reads .env).

use chrono::NaiveDate;
use dengue_api::config::AppConfig;
use dengue_api::db;
use dengue_api::models::observation::{DengueTable, ObservationFields};
use dengue_api::services::observation;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let pool = db::create_pool(&config.database_url, 5).await?;

    // Run migrations first
    db::run_migrations(&pool).await?;

    println!("=== Dengue Data Seed Script ===");

    for table in DengueTable::ALL {
        let existing: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await?;
        if existing > 0 {
            println!("[skip] {table} already has {existing} rows");
            continue;
        }

        let inserted = match table {
            DengueTable::National => seed_national(&pool).await?,
            DengueTable::Spatial => seed_spatial(&pool).await?,
            DengueTable::Temporal => seed_temporal(&pool).await?,
        };
        println!("[done] Inserted {inserted} rows into {table}");
    }

    println!("\n=== Seed complete! ===");
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn national_row(country: &str, iso: &str, year: i32, cases: f64) -> ObservationFields {
    ObservationFields {
        adm_0_name: Some(country.to_string()),
        full_name: Some(country.to_string()),
        iso_a0: Some(iso.to_string()),
        calendar_start_date: date(year, 1, 1),
        calendar_end_date: date(year, 12, 31),
        year: Some(year),
        dengue_total: Some(cases),
        case_definition_standardised: Some("Total".to_string()),
        s_res: Some("Admin0".to_string()),
        t_res: Some("Year".to_string()),
        ..Default::default()
    }
}

async fn seed_national(pool: &PgPool) -> anyhow::Result<usize> {
    let rows = [
        ("Brazil", "BRA", 2020, 987_173.0),
        ("Brazil", "BRA", 2021, 544_460.0),
        ("Brazil", "BRA", 2022, 1_450_270.0),
        ("Thailand", "THA", 2020, 71_293.0),
        ("Thailand", "THA", 2021, 9_979.0),
        ("Thailand", "THA", 2022, 45_145.0),
        ("Mexico", "MEX", 2020, 120_639.0),
        ("Mexico", "MEX", 2021, 36_742.0),
        ("Mexico", "MEX", 2022, 59_918.0),
        ("Viet Nam", "VNM", 2022, 367_729.0),
    ];

    for (country, iso, year, cases) in rows {
        observation::insert(pool, DengueTable::National, &national_row(country, iso, year, cases))
            .await?;
    }
    Ok(rows.len())
}

async fn seed_spatial(pool: &PgPool) -> anyhow::Result<usize> {
    let rows = [
        ("Brazil", "BRA", "Sao Paulo", 2022, 640_510.0),
        ("Brazil", "BRA", "Goias", 2022, 203_785.0),
        ("Brazil", "BRA", "Minas Gerais", 2022, 188_620.0),
        ("Brazil", "BRA", "Rio de Janeiro", 2021, 12_348.0),
        ("Mexico", "MEX", "Jalisco", 2022, 11_201.0),
        ("Mexico", "MEX", "Veracruz", 2022, 8_504.0),
    ];

    for (country, iso, region, year, cases) in rows {
        let fields = ObservationFields {
            adm_1_name: Some(region.to_string()),
            full_name: Some(format!("{region}, {country}")),
            s_res: Some("Admin1".to_string()),
            ..national_row(country, iso, year, cases)
        };
        observation::insert(pool, DengueTable::Spatial, &fields).await?;
    }
    Ok(rows.len())
}

async fn seed_temporal(pool: &PgPool) -> anyhow::Result<usize> {
    let mut inserted = 0;
    let mut start = NaiveDate::from_ymd_opt(2022, 1, 2)
        .ok_or_else(|| anyhow::anyhow!("invalid seed start date"))?;

    for week in 0..12_i32 {
        let end = start + chrono::Duration::days(6);
        let fields = ObservationFields {
            calendar_start_date: Some(start),
            calendar_end_date: Some(end),
            t_res: Some("Week".to_string()),
            ..national_row("Brazil", "BRA", 2022, 5_000.0 + f64::from(week) * 750.0)
        };
        observation::insert(pool, DengueTable::Temporal, &fields).await?;
        start = end + chrono::Duration::days(1);
        inserted += 1;
    }
    Ok(inserted)
}
