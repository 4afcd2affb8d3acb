use sqlx::PgPool;

use super::queries::{PRIOR_NEWS_QUERY, TRADED_NEWS_QUERY};
use super::window::LookbackWindow;
use crate::models::{decision, order_leg, PriorNewsArticle, PriorNewsRow, TradedNewsTrade};

// Each lookup holds one pooled connection for exactly one query. The
// connection goes back to the pool when `conn` drops, on success or error.

/// Articles mentioning `ticker` inside `window`, newest first.
pub async fn get_prior_news(
    pool: &PgPool,
    ticker: &str,
    window: &LookbackWindow,
) -> Result<Vec<PriorNewsArticle>, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let rows = sqlx::query_as::<_, PriorNewsRow>(PRIOR_NEWS_QUERY)
        .bind(ticker)
        .bind(window.start)
        .bind(window.end)
        .bind(decision::TRADE)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(PriorNewsArticle::from).collect())
}

/// Entry fills for `symbol` executed inside `window`, newest first.
pub async fn get_traded_news(
    pool: &PgPool,
    symbol: &str,
    window: &LookbackWindow,
) -> Result<Vec<TradedNewsTrade>, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let trades = sqlx::query_as::<_, TradedNewsTrade>(TRADED_NEWS_QUERY)
        .bind(symbol)
        .bind(window.start)
        .bind(window.end)
        .bind(order_leg::ENTRY)
        .fetch_all(&mut *conn)
        .await?;

    Ok(trades)
}
