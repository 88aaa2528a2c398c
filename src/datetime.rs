//! Rendering of stored timestamps for API responses.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Storage format of `created_at` columns (`datetime('now')`, UTC).
pub const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts stored UTC timestamps to a display timezone and format.
#[derive(Debug, Clone)]
pub struct DateTimeFormatter {
    tz: Tz,
    format: String,
}

impl DateTimeFormatter {
    /// Create a formatter. An unknown timezone name falls back to UTC.
    pub fn new(timezone: &str, format: impl Into<String>) -> Self {
        let tz = timezone.parse().unwrap_or_else(|_| {
            tracing::warn!(timezone, "Unknown timezone, using UTC");
            Tz::UTC
        });
        Self {
            tz,
            format: format.into(),
        }
    }

    /// Format a stored timestamp.
    ///
    /// Accepts the SQLite storage format and RFC3339. Anything else is
    /// returned unchanged.
    pub fn format(&self, stored: &str) -> String {
        let utc = if let Ok(naive) = NaiveDateTime::parse_from_str(stored, SQLITE_DATETIME_FORMAT)
        {
            naive.and_utc()
        } else if let Ok(dt) = DateTime::parse_from_rfc3339(stored) {
            dt.with_timezone(&Utc)
        } else {
            return stored.to_string();
        };
        utc.with_timezone(&self.tz).format(&self.format).to_string()
    }
}

impl Default for DateTimeFormatter {
    fn default() -> Self {
        Self::new("UTC", SQLITE_DATETIME_FORMAT)
    }
}
