use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::db::window::LookbackWindow;
use crate::errors::{AppError, FieldError};

const MAX_TICKER_LEN: usize = 32;

/// Accepted years, judged on the UTC instant.
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Offset-carrying formats accepted besides strict RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Request body shared by both context endpoints, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct ContextRequestBody {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub reference_timestamp: Option<String>,
}

/// A validated context request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRequest {
    pub ticker: String,
    pub reference_timestamp: DateTime<FixedOffset>,
    /// The timestamp exactly as sent (trimmed), echoed in the response.
    pub reference_input: String,
}

impl ContextRequest {
    /// Validate both fields, reporting every problem at once.
    pub fn validate(body: ContextRequestBody) -> Result<Self, AppError> {
        let mut errors = Vec::new();

        let ticker = match body.ticker.as_deref() {
            None => {
                errors.push(FieldError::new("ticker", "ticker is required"));
                None
            }
            Some(raw) => match validate_ticker(raw) {
                Ok(()) => Some(raw.to_string()),
                Err(msg) => {
                    errors.push(FieldError::new("ticker", msg));
                    None
                }
            },
        };

        let reference_timestamp = match body.reference_timestamp.as_deref() {
            None => {
                errors.push(FieldError::new(
                    "reference_timestamp",
                    "reference_timestamp is required",
                ));
                None
            }
            Some(raw) => match parse_reference_timestamp(raw) {
                Ok(ts) => Some((ts, raw.trim().to_string())),
                Err(msg) => {
                    errors.push(FieldError::new("reference_timestamp", msg));
                    None
                }
            },
        };

        match (ticker, reference_timestamp) {
            (Some(ticker), Some((reference_timestamp, reference_input))) if errors.is_empty() => {
                Ok(Self {
                    ticker,
                    reference_timestamp,
                    reference_input,
                })
            }
            _ => Err(AppError::Validation(errors)),
        }
    }

    pub fn reference_utc(&self) -> DateTime<Utc> {
        self.reference_timestamp.with_timezone(&Utc)
    }
}

fn validate_ticker(raw: &str) -> Result<(), &'static str> {
    if raw.trim().is_empty() {
        return Err("ticker must not be empty");
    }
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("ticker must not contain whitespace or control characters");
    }
    if raw.chars().count() > MAX_TICKER_LEN {
        return Err("ticker must be at most 32 characters");
    }
    Ok(())
}

/// Parse an ISO-8601 instant that carries an explicit UTC offset and lies
/// in years 1..=9999 (UTC).
pub fn parse_reference_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("reference_timestamp must not be empty");
    }

    let parsed = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    });
    if let Some(ts) = parsed {
        return check_range(ts);
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok();
    if naive {
        Err("reference_timestamp must include a timezone offset")
    } else {
        Err("reference_timestamp is not a valid ISO-8601 timestamp")
    }
}

fn check_range(ts: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>, &'static str> {
    let utc = ts.with_timezone(&Utc);
    let in_range = SUPPORTED_YEARS.contains(&utc.year())
        && LookbackWindow::traded_news(utc).is_some()
        && LookbackWindow::prior_news(utc).is_some();
    if in_range {
        Ok(ts)
    } else {
        Err("reference_timestamp must fall between years 1 and 9999")
    }
}
