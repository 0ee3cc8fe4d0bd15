//! Unified error handling with consistent API response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Outcome tag carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Consistent JSON envelope for all API responses.
///
/// `data` is always present in the serialized form (`null` on failure);
/// `message` is omitted when there is nothing to say.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: None,
        })
    }

    /// Wrap a successful result with an informational message.
    pub fn success_with_message(data: T, message: &str) -> Json<Self> {
        Json(Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: Some(message.to_string()),
        })
    }

    /// Wrap an error in the envelope.
    pub fn error(message: &str) -> Json<Self> {
        Json(Self {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message.to_string()),
        })
    }
}

impl<T> ApiResponse<T> {
    /// Collapse the envelope back into a `Result`, as a consumer sees it.
    #[cfg(test)]
    pub(crate) fn into_result(self) -> Result<Option<T>, String> {
        match self.status {
            ResponseStatus::Success => Ok(self.data),
            ResponseStatus::Error => Err(self.message.unwrap_or_default()),
        }
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Check if this error was raised before the query service was reached.
    #[cfg(test)]
    pub(crate) fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                e.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                msg.clone()
            }
        };

        let body = ApiResponse::<()> {
            status: ResponseStatus::Error,
            data: None,
            message: Some(message),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
