//! Dashboard routes: page models, API proxy and health.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::client::{data_or, status_of};
use super::format::format_number;
use super::DashboardState;

/// Headline numbers, preformatted for display.
#[derive(Debug, Serialize)]
pub struct StatsDisplay {
    pub total_records: String,
    pub total_cases: String,
    pub countries_count: String,
}

impl StatsDisplay {
    fn from_stats(stats: &Value) -> Self {
        let field = |name: &str| format_number(stats.get(name).unwrap_or(&Value::Null));
        Self {
            total_records: field("total_records"),
            total_cases: field("total_cases"),
            countries_count: field("countries_count"),
        }
    }
}

/// Model behind the main dashboard page.
#[derive(Debug, Serialize)]
pub struct IndexPage {
    pub api_status: String,
    pub stats: Value,
    pub display: StatsDisplay,
    pub countries: Value,
    pub yearly_data: Value,
}

/// Model behind a country detail page.
#[derive(Debug, Serialize)]
pub struct CountryPage {
    pub country: String,
    pub api_status: String,
    pub yearly_data: Value,
    pub regions: Value,
    pub temporal_data: Value,
}

#[derive(Debug, Serialize)]
pub struct DashboardHealth {
    pub status: String,
    pub api_status: String,
    pub api_connection: String,
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// GET / — overall stats, top 10 countries and yearly totals.
pub async fn index(State(state): State<DashboardState>) -> Json<IndexPage> {
    let countries_params = pairs(&[("limit", "10")]);
    let (stats_response, countries_response, yearly_response) = tokio::join!(
        state.client.get("/national/stats", &[]),
        state.client.get("/national/countries", &countries_params),
        state.client.get("/national/yearly", &[]),
    );

    let stats = data_or(&stats_response, json!({}));
    Json(IndexPage {
        api_status: status_of(&stats_response),
        display: StatsDisplay::from_stats(&stats),
        stats,
        countries: data_or(&countries_response, json!([])),
        yearly_data: data_or(&yearly_response, json!([])),
    })
}

/// GET /country/{name} — yearly totals, top regions and time series for one country.
pub async fn country(
    State(state): State<DashboardState>,
    Path(name): Path<String>,
) -> Json<CountryPage> {
    let yearly_params = pairs(&[("country", name.as_str())]);
    let regions_params = pairs(&[("country", name.as_str()), ("limit", "20")]);
    let temporal_params = pairs(&[("country", name.as_str()), ("limit", "100")]);
    let (yearly_response, regions_response, temporal_response) = tokio::join!(
        state.client.get("/national/yearly", &yearly_params),
        state.client.get("/spatial/regions", &regions_params),
        state.client.get("/temporal/data", &temporal_params),
    );

    Json(CountryPage {
        api_status: status_of(&yearly_response),
        yearly_data: data_or(&yearly_response, json!([])),
        regions: data_or(&regions_response, json!([])),
        temporal_data: data_or(&temporal_response, json!([])),
        country: name,
    })
}

/// GET /api/proxy/{*endpoint} — forward the query string verbatim to the API.
pub async fn proxy(
    State(state): State<DashboardState>,
    Path(endpoint): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Value> {
    tracing::debug!(endpoint = %endpoint, params = params.len(), "Proxying API request");
    Json(state.client.get(&format!("/{endpoint}"), &params).await)
}

/// GET /health — dashboard liveness plus reachability of the API.
pub async fn health(State(state): State<DashboardState>) -> Json<DashboardHealth> {
    let api_health = state.client.get("/health", &[]).await;
    let api_status = status_of(&api_health);
    let api_connection = if api_status == "healthy" { "ok" } else { "error" };

    Json(DashboardHealth {
        status: "healthy".to_string(),
        api_connection: api_connection.to_string(),
        api_status,
    })
}
