use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw row produced by the prior-news query.
#[derive(Debug, Clone, FromRow)]
pub struct PriorNewsRow {
    pub id: String,
    pub title: String,
    pub published_utc: DateTime<Utc>,
    pub channels: Vec<String>,
    pub tags: Vec<String>,
    pub sentiment: Option<String>,
    pub sentiment_score: Option<f64>,
    pub was_traded: bool,
    pub trade_side: Option<String>,
}

/// A news article mentioning the ticker, with the decision recorded for it.
///
/// Nullable fields are always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorNewsArticle {
    pub id: String,
    pub title: String,
    pub published_utc: DateTime<Utc>,
    pub channels: Vec<String>,
    pub tags: Vec<String>,
    pub sentiment: Option<String>,
    pub sentiment_score: Option<f64>,
    pub was_traded: bool,
    pub trade_side: Option<String>,
}

impl From<PriorNewsRow> for PriorNewsArticle {
    fn from(row: PriorNewsRow) -> Self {
        // trade_side only exists for articles that were actually traded.
        let trade_side = if row.was_traded { row.trade_side } else { None };

        Self {
            id: row.id,
            title: row.title,
            published_utc: row.published_utc,
            channels: row.channels,
            tags: row.tags,
            sentiment: row.sentiment,
            sentiment_score: row.sentiment_score,
            was_traded: row.was_traded,
            trade_side,
        }
    }
}
