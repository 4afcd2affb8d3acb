use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let operational = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::scrape));

    let context = Router::new()
        .route(
            "/api/prior-news-context",
            post(handlers::context::prior_news_context),
        )
        .route(
            "/api/traded-news-context",
            post(handlers::context::traded_news_context),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    operational
        .merge(context)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
