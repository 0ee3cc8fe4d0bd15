use std::env;

/// Query service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Upper bound applied to every caller-supplied `limit`.
    pub max_query_limit: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => database_url_from_parts(
                &env::var("DB_HOST").unwrap_or_else(|_| "postgresql".to_string()),
                &env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                &env::var("DB_NAME").unwrap_or_else(|_| "sampledb".to_string()),
                &env::var("DB_USER")?,
                &env::var("DB_PASSWORD")?,
            ),
        };

        Ok(Self {
            database_url,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            max_query_limit: env::var("MAX_QUERY_LIMIT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap_or(10_000),
        })
    }
}

/// Assemble a PostgreSQL connection string from its individual settings.
pub fn database_url_from_parts(
    host: &str,
    port: &str,
    name: &str,
    user: &str,
    password: &str,
) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

/// Dashboard configuration: where to listen and which query service to call.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub api_timeout_secs: u64,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "dengue-api".to_string());
        let api_port = env::var("API_PORT").unwrap_or_else(|_| "8000".to_string());

        Ok(Self {
            api_base_url: format!("http://{api_host}:{api_port}"),
            host: env::var("DASHBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("DASHBOARD_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            api_timeout_secs: env::var("API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}
