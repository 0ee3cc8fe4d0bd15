//! Dashboard server: page models and an API proxy in front of the query service.
//!
//! Usage: `cargo run --bin dashboard`
//!
//! Reads `API_HOST`/`API_PORT` for the upstream API and
//! `DASHBOARD_HOST`/`DASHBOARD_PORT` for its own listener (reads .env).

use std::net::SocketAddr;
use std::time::Duration;

use dengue_api::config::DashboardConfig;
use dengue_api::dashboard::{self, client::ApiClient, DashboardState};
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dengue_api=debug,dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = DashboardConfig::from_env()?;
    let client = ApiClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.api_timeout_secs),
    )?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(host = %addr, api = %config.api_base_url, "Starting dashboard server");

    let app = dashboard::router(DashboardState { client });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
