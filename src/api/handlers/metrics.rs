use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::metrics;
use crate::AppState;

pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// GET /metrics: pool gauges are refreshed before rendering so a scrape
/// never reports a stale connection count.
pub async fn scrape(State(state): State<AppState>) -> impl IntoResponse {
    metrics::record_pool(&state.db);
    state.metrics_handle.run_upkeep();
    ([(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], state.metrics_handle.render())
}
