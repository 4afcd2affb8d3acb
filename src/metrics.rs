use std::time::Duration;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const OPERATIONS: [&str; 2] = ["prior-news-context", "traded-news-context"];

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    for operation in OPERATIONS {
        for outcome in ["ok", "validation_error", "data_access_error"] {
            counter!("context_requests_total", "operation" => operation, "outcome" => outcome)
                .absolute(0);
        }
    }
    counter!("health_checks_total", "status" => "healthy").absolute(0);
    counter!("health_checks_total", "status" => "unhealthy").absolute(0);

    Ok(handle)
}

/// Count a finished context request.
pub fn record_request(operation: &'static str, outcome: &'static str) {
    counter!("context_requests_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}

/// Record latency and result size of a successful context query.
pub fn record_query(operation: &'static str, elapsed: Duration, rows: usize) {
    histogram!("context_query_duration_seconds", "operation" => operation)
        .record(elapsed.as_secs_f64());
    histogram!("context_rows_returned", "operation" => operation).record(rows as f64);
}

pub fn record_health(healthy: bool) {
    let status = if healthy { "healthy" } else { "unhealthy" };
    counter!("health_checks_total", "status" => status).increment(1);
}

/// Snapshot connection pool occupancy; called on every scrape.
pub fn record_pool(db: &sqlx::PgPool) {
    let size = db.size();
    let idle = db.num_idle();
    gauge!("db_pool_connections", "state" => "open").set(f64::from(size));
    gauge!("db_pool_connections", "state" => "idle").set(idle as f64);
}
