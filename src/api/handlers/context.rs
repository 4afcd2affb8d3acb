use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::db::context_repo;
use crate::db::window::LookbackWindow;
use crate::errors::{AppError, FieldError};
use crate::metrics;
use crate::models::{ContextRequest, ContextRequestBody, PriorNewsResponse, TradedNewsResponse};
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextOperation {
    PriorNews,
    TradedNews,
}

impl ContextOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextOperation::PriorNews => "prior-news-context",
            ContextOperation::TradedNews => "traded-news-context",
        }
    }
}

/// Turn the raw JSON payload into a validated request.
pub fn parse_request(
    operation: ContextOperation,
    payload: Result<Json<ContextRequestBody>, JsonRejection>,
) -> Result<ContextRequest, AppError> {
    let result = match payload {
        Ok(Json(body)) => ContextRequest::validate(body),
        Err(rejection) => Err(AppError::Validation(vec![FieldError::new(
            "body",
            rejection.body_text(),
        )])),
    };

    if result.is_err() {
        metrics::record_request(operation.as_str(), "validation_error");
    }
    result
}

fn out_of_range(operation: ContextOperation) -> AppError {
    metrics::record_request(operation.as_str(), "validation_error");
    AppError::Validation(vec![FieldError::new(
        "reference_timestamp",
        "reference_timestamp must fall between years 1 and 9999",
    )])
}

fn data_access_error(
    operation: ContextOperation,
    request: &ContextRequest,
    source: sqlx::Error,
) -> AppError {
    metrics::record_request(operation.as_str(), "data_access_error");
    AppError::DataAccess {
        operation: operation.as_str(),
        ticker: request.ticker.clone(),
        reference_timestamp: request.reference_input.clone(),
        source,
    }
}

/// POST /api/prior-news-context — news about a ticker from the 48 hours
/// before the reference timestamp.
pub async fn prior_news_context(
    State(state): State<AppState>,
    payload: Result<Json<ContextRequestBody>, JsonRejection>,
) -> Result<Json<PriorNewsResponse>, AppError> {
    let operation = ContextOperation::PriorNews;
    let request = parse_request(operation, payload)?;
    let window = LookbackWindow::prior_news(request.reference_utc())
        .ok_or_else(|| out_of_range(operation))?;

    let started = Instant::now();
    let articles = context_repo::get_prior_news(&state.db, &request.ticker, &window)
        .await
        .map_err(|e| data_access_error(operation, &request, e))?;

    metrics::record_query(operation.as_str(), started.elapsed(), articles.len());
    metrics::record_request(operation.as_str(), "ok");
    tracing::debug!(
        ticker = %request.ticker,
        window_start = %window.start,
        articles = articles.len(),
        "Prior news context served"
    );

    Ok(Json(PriorNewsResponse::new(
        request.ticker,
        request.reference_input,
        articles,
    )))
}

/// POST /api/traded-news-context — entry fills of news-driven trades from
/// the 14 days before the reference timestamp.
pub async fn traded_news_context(
    State(state): State<AppState>,
    payload: Result<Json<ContextRequestBody>, JsonRejection>,
) -> Result<Json<TradedNewsResponse>, AppError> {
    let operation = ContextOperation::TradedNews;
    let request = parse_request(operation, payload)?;
    let window = LookbackWindow::traded_news(request.reference_utc())
        .ok_or_else(|| out_of_range(operation))?;

    let started = Instant::now();
    let trades = context_repo::get_traded_news(&state.db, &request.ticker, &window)
        .await
        .map_err(|e| data_access_error(operation, &request, e))?;

    metrics::record_query(operation.as_str(), started.elapsed(), trades.len());
    metrics::record_request(operation.as_str(), "ok");
    tracing::debug!(
        ticker = %request.ticker,
        window_start = %window.start,
        trades = trades.len(),
        "Traded news context served"
    );

    Ok(Json(TradedNewsResponse::new(
        request.ticker,
        request.reference_input,
        trades,
    )))
}
