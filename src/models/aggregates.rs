//! Aggregated response records and the query parameters that produce them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Default number of countries returned by `/national/countries`.
pub const DEFAULT_COUNTRIES_LIMIT: i64 = 10;
/// Default number of regions returned by `/spatial/regions`.
pub const DEFAULT_REGIONS_LIMIT: i64 = 20;
/// Default number of rows returned by `/temporal/data`.
pub const DEFAULT_TEMPORAL_LIMIT: i64 = 100;

/// Display string for a region that is present but blank.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Resolve a caller-supplied limit: apply the default, then clamp into `0..=max`.
pub fn effective_limit(requested: Option<i64>, default: i64, max: i64) -> i64 {
    requested.unwrap_or(default).clamp(0, max.max(0))
}

/// Treat a blank optional name filter the same as an absent one. A non-blank
/// value is returned as given; matching stays exact.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Overall statistics for one table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DengueStats {
    pub total_records: i64,
    pub total_cases: f64,
    pub countries_count: i64,
    pub year_range: Vec<i32>,
}

/// Every year from `min` to `max` inclusive; empty when either bound is missing.
pub fn year_range(min: Option<i32>, max: Option<i32>) -> Vec<i32> {
    match (min, max) {
        (Some(min), Some(max)) => (min..=max).collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CountryTotal {
    pub country: String,
    pub total_cases: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct YearlyTotal {
    pub year: i32,
    pub total_cases: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionalTotal {
    pub country: String,
    pub region: String,
    pub total_cases: f64,
}

/// One slice of a country's time series.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct TemporalRecord {
    pub country: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub dengue_cases: Option<f64>,
    pub time_resolution: Option<String>,
}

/// Query parameters for `/national/countries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountriesQuery {
    pub limit: Option<i64>,
}

impl CountriesQuery {
    pub fn limit(&self, max: i64) -> i64 {
        effective_limit(self.limit, DEFAULT_COUNTRIES_LIMIT, max)
    }
}

/// Query parameters for `/national/yearly`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearlyQuery {
    pub country: Option<String>,
}

impl YearlyQuery {
    pub fn country(&self) -> Option<&str> {
        non_blank(&self.country)
    }
}

/// Query parameters for `/spatial/regions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionsQuery {
    pub country: Option<String>,
    pub year: Option<i32>,
    pub limit: Option<i64>,
}

impl RegionsQuery {
    pub fn country(&self) -> Option<&str> {
        non_blank(&self.country)
    }

    pub fn limit(&self, max: i64) -> i64 {
        effective_limit(self.limit, DEFAULT_REGIONS_LIMIT, max)
    }
}

/// Query parameters for `/temporal/data`. `country` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct TemporalQuery {
    pub country: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl TemporalQuery {
    pub fn limit(&self, max: i64) -> i64 {
        effective_limit(self.limit, DEFAULT_TEMPORAL_LIMIT, max)
    }
}
