use chrono::{DateTime, NaiveDate, NaiveDateTime, ParseError};

/// Parses an ISO-8601 timestamp into epoch milliseconds.
///
/// A literal trailing `Z` is rewritten to `+00:00` before parsing. Fractional
/// seconds are accepted. Timestamps without an offset, and bare dates, are
/// read as UTC.
pub fn parse_timestamp_ms(value: &str) -> Result<i64, ParseError> {
    let value = value.trim();
    let normalized = match value.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => value.to_string(),
    };

    match DateTime::parse_from_rfc3339(&normalized) {
        Ok(dt) => Ok(dt.timestamp_millis()),
        Err(err) => NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc().timestamp_millis())
            .or_else(|_| {
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").map(|date| {
                    date.and_hms_opt(0, 0, 0)
                        .map(|naive| naive.and_utc().timestamp_millis())
                        .unwrap_or_default()
                })
            })
            .map_err(|_| err),
    }
}

/// Closed interval `[start_ms, end_ms]` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, ts_ms: i64) -> bool {
        ts_ms >= self.start_ms && ts_ms <= self.end_ms
    }

    pub fn is_before_start(&self, ts_ms: i64) -> bool {
        ts_ms < self.start_ms
    }

    /// A window whose start lies after its end matches nothing.
    pub fn is_empty(&self) -> bool {
        self.start_ms > self.end_ms
    }
}

/// Number of batches needed to send `len` items `size` at a time.
pub fn batch_count(len: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    len.div_ceil(size)
}
