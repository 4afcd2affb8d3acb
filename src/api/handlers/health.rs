use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::errors::{failure_kind, is_unreachable};
use crate::metrics;
use crate::AppState;

/// GET /health — round-trips `SELECT 1` through the read pool.
///
/// The degraded body says whether the store was unreachable or answered with
/// an error; the error itself is only logged.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => {
            metrics::record_health(true);
            (
                StatusCode::OK,
                Json(json!({ "status": "healthy", "database": "connected" })),
            )
        }
        Err(e) => {
            metrics::record_health(false);
            let database = if is_unreachable(&e) { "unreachable" } else { "error" };
            tracing::warn!(kind = failure_kind(&e), error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "database": database })),
            )
        }
    }
}
