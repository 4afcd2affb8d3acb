use serde::Serialize;

use super::{PriorNewsArticle, TradedNewsTrade};
use crate::db::window::{PRIOR_NEWS_LOOKBACK_HOURS, TRADED_NEWS_LOOKBACK_DAYS};

// Fields are private: the counts are always derived from the sequence.
// `reference_timestamp` is the caller's text, echoed unchanged.

#[derive(Debug, Clone, Serialize)]
pub struct PriorNewsResponse {
    ticker: String,
    reference_timestamp: String,
    lookback_hours: i64,
    articles: Vec<PriorNewsArticle>,
    article_count: usize,
}

impl PriorNewsResponse {
    pub fn new(
        ticker: String,
        reference_timestamp: String,
        articles: Vec<PriorNewsArticle>,
    ) -> Self {
        Self {
            ticker,
            reference_timestamp,
            lookback_hours: PRIOR_NEWS_LOOKBACK_HOURS,
            article_count: articles.len(),
            articles,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn reference_timestamp(&self) -> &str {
        &self.reference_timestamp
    }

    pub fn lookback_hours(&self) -> i64 {
        self.lookback_hours
    }

    pub fn articles(&self) -> &[PriorNewsArticle] {
        &self.articles
    }

    pub fn article_count(&self) -> usize {
        self.article_count
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TradedNewsResponse {
    ticker: String,
    reference_timestamp: String,
    lookback_days: i64,
    trades: Vec<TradedNewsTrade>,
    trade_count: usize,
}

impl TradedNewsResponse {
    pub fn new(
        ticker: String,
        reference_timestamp: String,
        trades: Vec<TradedNewsTrade>,
    ) -> Self {
        Self {
            ticker,
            reference_timestamp,
            lookback_days: TRADED_NEWS_LOOKBACK_DAYS,
            trade_count: trades.len(),
            trades,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn reference_timestamp(&self) -> &str {
        &self.reference_timestamp
    }

    pub fn lookback_days(&self) -> i64 {
        self.lookback_days
    }

    pub fn trades(&self) -> &[TradedNewsTrade] {
        &self.trades
    }

    pub fn trade_count(&self) -> usize {
        self.trade_count
    }
}
