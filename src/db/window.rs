use chrono::{DateTime, Duration, Utc};

/// Prior-news lookback, in hours.
pub const PRIOR_NEWS_LOOKBACK_HOURS: i64 = 48;
/// Traded-news lookback, in days.
pub const TRADED_NEWS_LOOKBACK_DAYS: i64 = 14;

/// Half-open time window `[start, end)` ending at a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl LookbackWindow {
    /// `None` when `reference - span` falls outside the representable range.
    pub fn ending_at(reference: DateTime<Utc>, span: Duration) -> Option<Self> {
        let start = reference.checked_sub_signed(span)?;
        Some(Self {
            start,
            end: reference,
        })
    }

    pub fn prior_news(reference: DateTime<Utc>) -> Option<Self> {
        Self::ending_at(reference, Duration::hours(PRIOR_NEWS_LOOKBACK_HOURS))
    }

    pub fn traded_news(reference: DateTime<Utc>) -> Option<Self> {
        Self::ending_at(reference, Duration::days(TRADED_NEWS_LOOKBACK_DAYS))
    }

    /// `start` is inclusive, `end` exclusive.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 21, 17, 0, 0).unwrap()
    }

    #[test]
    fn test_prior_news_bounds() {
        let window = LookbackWindow::prior_news(reference()).unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 1, 19, 17, 0, 0).unwrap());
        assert_eq!(window.end, reference());

        assert!(window.contains(window.start));
        assert!(!window.contains(reference()));
        assert!(!window.contains(window.start - Duration::microseconds(1)));
        assert!(window.contains(reference() - Duration::microseconds(1)));
    }

    #[test]
    fn test_traded_news_bounds() {
        let window = LookbackWindow::traded_news(reference()).unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 1, 7, 17, 0, 0).unwrap());
        assert!(window.contains(Utc.with_ymd_and_hms(2026, 1, 8, 9, 30, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2026, 1, 7, 16, 59, 59).unwrap()));
        assert!(!window.contains(reference()));
    }

    #[test]
    fn test_article_times_near_lower_bound() {
        let window = LookbackWindow::prior_news(reference()).unwrap();
        assert!(window.contains(Utc.with_ymd_and_hms(2026, 1, 20, 14, 30, 0).unwrap()));
        assert!(window.contains(Utc.with_ymd_and_hms(2026, 1, 19, 17, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2026, 1, 19, 10, 15, 0).unwrap()));
    }

    #[test]
    fn test_window_at_start_of_time_is_none() {
        assert!(LookbackWindow::traded_news(DateTime::<Utc>::MIN_UTC).is_none());
        assert!(LookbackWindow::prior_news(DateTime::<Utc>::MIN_UTC).is_none());
    }
}
