//! Dengue observation record shared by the national, spatial and temporal tables.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The three observation tables. They share one column layout and differ only
/// in the granularity of the rows stored in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DengueTable {
    /// Country-level rollups.
    National,
    /// Sub-national regions.
    Spatial,
    /// Time-sliced series.
    Temporal,
}

impl DengueTable {
    pub const ALL: [DengueTable; 3] = [Self::National, Self::Spatial, Self::Temporal];

    /// SQL table name. Only ever interpolated from this fixed set.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::National => "national_data",
            Self::Spatial => "spatial_data",
            Self::Temporal => "temporal_data",
        }
    }
}

impl fmt::Display for DengueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// One row: a dengue case count for a place and time slice.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct DengueObservation {
    pub id: i32,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: ObservationFields,
}

/// Every column except the surrogate key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ObservationFields {
    pub adm_0_name: Option<String>,
    pub adm_1_name: Option<String>,
    pub adm_2_name: Option<String>,
    pub full_name: Option<String>,
    pub iso_a0: Option<String>,
    pub fao_gaul_code: Option<i32>,
    pub rne_iso_code: Option<String>,
    pub ibge_code: Option<String>,
    pub calendar_start_date: Option<NaiveDate>,
    pub calendar_end_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub dengue_total: Option<f64>,
    pub case_definition_standardised: Option<String>,
    pub s_res: Option<String>,
    pub t_res: Option<String>,
    pub uuid: Option<String>,
}

/// Column list in declaration order, used by the insert and select statements.
pub const OBSERVATION_COLUMNS: &str = "adm_0_name, adm_1_name, adm_2_name, full_name, iso_a0, \
     fao_gaul_code, rne_iso_code, ibge_code, calendar_start_date, calendar_end_date, year, \
     dengue_total, case_definition_standardised, s_res, t_res, uuid";
