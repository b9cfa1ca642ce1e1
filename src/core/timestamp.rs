//! Timestamp formatting utilities
//!
//! Renders the `{{Time}}` field of a record. RFC 3339 in the local timezone
//! is the default; custom strftime specifiers are validated before they are
//! stored so that rendering never fails at log time.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_hierarchical_logger::TimestampFormat;
///
/// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
/// assert!(format.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with the timezone offset: `2025-01-08T10:30:45+01:00`
    #[default]
    Rfc3339,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 in UTC with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_hierarchical_logger::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Reject custom specifiers chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::time_format(format_str.as_str()));
            }
        }
        Ok(())
    }

    /// Format a datetime according to this format
    ///
    /// A custom specifier that slipped past [`validate`](Self::validate)
    /// falls back to RFC 3339 instead of panicking.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Iso8601Micros => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.6fZ")
                .to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return datetime.to_rfc3339();
                }
                out
            }
        }
    }

    /// Format the current local time
    #[must_use]
    pub fn format_now(&self) -> String {
        self.format(&Local::now())
    }
}

impl From<&str> for TimestampFormat {
    fn from(format_str: &str) -> Self {
        TimestampFormat::Custom(format_str.to_string())
    }
}

impl From<String> for TimestampFormat {
    fn from(format_str: String) -> Self {
        TimestampFormat::Custom(format_str)
    }
}
