//! SQL for the two context lookups.
//!
//! Both queries take the window bounds as parameters (`$2` inclusive start,
//! `$3` exclusive end) so the window is computed in one place, see
//! [`crate::db::window::LookbackWindow`].

/// Articles mentioning `$1` published in `[$2, $3)`, newest first.
///
/// `$4` is the decision value that counts as traded. The order side is only
/// looked up for traded articles.
pub const PRIOR_NEWS_QUERY: &str = r#"
SELECT
    na.id::text AS id,
    na.title,
    na.published_utc,
    COALESCE(na.channels, ARRAY[]::text[]) AS channels,
    COALESCE(na.tags, ARRAY[]::text[]) AS tags,
    td.sentiment,
    td.confidence::float8 AS sentiment_score,
    COALESCE(td.decision = $4, FALSE) AS was_traded,
    CASE WHEN td.decision = $4 THEN
        (SELECT os.side
         FROM order_submissions os
         WHERE os.article_id = na.id AND os.ticker = $1
         ORDER BY os.client_order_id
         LIMIT 1)
    ELSE NULL END AS trade_side
FROM news_articles na
LEFT JOIN trading_decisions td
    ON td.article_id = na.id AND td.ticker = $1
WHERE $1 = ANY(na.tickers)
  AND na.published_utc >= $2
  AND na.published_utc < $3
ORDER BY na.published_utc DESC, na.id
"#;

/// Fills of leg `$4` for symbol `$1` executed in `[$2, $3)`, newest first.
///
/// Inner joins throughout: a submission without a matching fill, or a fill
/// without its article, produces no row.
pub const TRADED_NEWS_QUERY: &str = r#"
SELECT
    na.id::text AS article_id,
    na.title,
    na.published_utc,
    fl.filled_at AS trade_executed_at,
    os.side,
    fl.fill_price::numeric AS fill_price
FROM news_articles na
INNER JOIN order_submissions os
    ON os.article_id = na.id
INNER JOIN order_fills fl
    ON fl.client_order_id = os.client_order_id
WHERE os.symbol = $1
  AND fl.order_leg = $4
  AND fl.filled_at >= $2
  AND fl.filled_at < $3
ORDER BY fl.filled_at DESC, os.client_order_id
"#;
