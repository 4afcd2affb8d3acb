use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An entry-leg fill joined back to the submission and article that caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TradedNewsTrade {
    pub article_id: String,
    pub title: String,
    pub published_utc: DateTime<Utc>,
    pub trade_executed_at: DateTime<Utc>,
    pub side: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub fill_price: Decimal,
}
