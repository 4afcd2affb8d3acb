pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod models;

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
