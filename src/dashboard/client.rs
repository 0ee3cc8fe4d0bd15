//! HTTP client for the query service. Failures never escape as errors: they
//! come back as an error-shaped envelope so pages can still render.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

/// Why a call to the query service produced no usable body.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("API returned HTTP {0}")]
    Status(StatusCode),
}

/// Thin wrapper over a pooled `reqwest::Client` bound to one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GET `endpoint` with the given query pairs, returning the JSON body or
    /// `{status: "error", data: null, message}` on any failure.
    pub async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Value {
        match self.fetch(endpoint, params).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "API error");
                error_payload(&e.to_string())
            }
        }
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ClientError> {
        let response = self.http.get(self.url(endpoint)).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Keep the upstream message when it already answered in the envelope.
            let body = response.json::<Value>().await.ok();
            return match body.filter(is_error_envelope) {
                Some(envelope) => Ok(envelope),
                None => Err(ClientError::Status(status)),
            };
        }

        Ok(response.json::<Value>().await?)
    }
}

/// The payload substituted for a failed call.
pub fn error_payload(message: &str) -> Value {
    json!({ "status": "error", "data": null, "message": message })
}

fn is_error_envelope(body: &Value) -> bool {
    body.get("status").and_then(Value::as_str) == Some("error") && body.get("data").is_some()
}

/// `status` field of a response, or `"error"` when missing.
pub fn status_of(response: &Value) -> String {
    response
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("error")
        .to_string()
}

/// `data` field of a response, or `default` when missing or null.
pub fn data_or(response: &Value, default: Value) -> Value {
    match response.get("data") {
        Some(Value::Null) | None => default,
        Some(data) => data.clone(),
    }
}
