use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Data access failed in {operation}: {source}")]
    DataAccess {
        operation: &'static str,
        ticker: String,
        reference_timestamp: String,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DataAccess { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(details) => {
                tracing::debug!(?details, "Request rejected");
                ErrorBody {
                    success: false,
                    error: "Validation failed".into(),
                    details,
                }
            }
            AppError::DataAccess {
                operation,
                ticker,
                reference_timestamp,
                source,
            } => {
                tracing::error!(
                    operation,
                    ticker = %ticker,
                    reference_timestamp = %reference_timestamp,
                    kind = failure_kind(&source),
                    error = %source,
                    "Database error"
                );
                ErrorBody {
                    success: false,
                    error: "Internal server error".into(),
                    details: Vec::new(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Coarse category of a database failure, safe to log and label metrics with.
pub fn failure_kind(e: &sqlx::Error) -> &'static str {
    match e {
        sqlx::Error::PoolTimedOut => "pool_timeout",
        sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => "pool_closed",
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => "connection",
        sqlx::Error::Database(_) | sqlx::Error::Protocol(_) | sqlx::Error::RowNotFound => "query",
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_) => "decode",
        _ => "other",
    }
}

/// True when the failure means the store could not be reached at all.
pub fn is_unreachable(e: &sqlx::Error) -> bool {
    matches!(failure_kind(e), "pool_timeout" | "pool_closed" | "connection")
}
