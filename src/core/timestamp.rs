//! Timestamp formatting utilities
//!
//! Provides the timestamp formats accepted by [`Logger::set_time_format`].
//! The default renders `DD.MM.YYYY hh:mm:ss.mmm` in local time; any other
//! strftime pattern can be supplied as a plain string.
//!
//! [`Logger::set_time_format`]: crate::Logger::set_time_format

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// strftime pattern behind [`TimestampFormat::Default`].
pub const DEFAULT_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S%.3f";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use leveled_logger::TimestampFormat;
///
/// // Day-first with milliseconds: "08.01.2025 10:30:45.123"
/// let format = TimestampFormat::default();
///
/// // Any strftime pattern converts into a custom format
/// let format: TimestampFormat = "%Y/%m/%d %H:%M".into();
/// assert_eq!(format, TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Day-first with milliseconds: `08.01.2025 10:30:45.123`
    #[default]
    Default,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+00:00`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// The pattern is not validated. A pattern chrono cannot render is
    /// emitted verbatim in place of the timestamp.
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime according to this format
    ///
    /// Never panics, whatever the pattern.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Default => render(datetime, DEFAULT_TIME_FORMAT),
            TimestampFormat::Iso8601 => render(datetime, "%Y-%m-%dT%H:%M:%S%.3f%:z"),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => render(datetime, format_str),
        }
    }

    /// Get a description of this format
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TimestampFormat::Default => "Day-first with milliseconds (08.01.2025 10:30:45.123)",
            TimestampFormat::Iso8601 => "ISO 8601 with milliseconds (2025-01-08T10:30:45.123+00:00)",
            TimestampFormat::Rfc3339 => "RFC 3339 with timezone (2025-01-08T10:30:45+00:00)",
            TimestampFormat::UnixMillis => "Unix timestamp in milliseconds (1736332245123)",
            TimestampFormat::Custom(_) => "Custom strftime format",
        }
    }
}

// chrono reports unknown specifiers as fmt::Error, which `to_string` turns into a panic.
fn render<Tz>(datetime: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::with_capacity(pattern.len() + 8);
    if write!(out, "{}", datetime.format(pattern)).is_err() {
        return pattern.to_string();
    }
    out
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_default_format() {
        let result = TimestampFormat::Default.format(&fixed_datetime());
        assert_eq!(result, "08.01.2025 10:30:45.123");
    }

    #[test]
    fn test_default_format_zero_pads() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).single().expect("valid datetime")
            + chrono::Duration::milliseconds(7);
        assert_eq!(TimestampFormat::Default.format(&dt), "03.02.2024 04:05:06.007");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123+00:00");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.ends_with("+00:00"));
    }

    #[test]
    fn test_unix_millis_format() {
        let result = TimestampFormat::UnixMillis.format(&fixed_datetime());
        assert_eq!(result, "1736332245123");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        let result = format.format(&fixed_datetime());
        assert_eq!(result, "2025/01/08 10:30");
    }

    #[test]
    fn test_malformed_custom_format_does_not_panic() {
        let format: TimestampFormat = "%Y-%Q".into();
        assert_eq!(format.format(&fixed_datetime()), "%Y-%Q");
    }

    #[test]
    fn test_literal_only_format() {
        let format: TimestampFormat = "no specifiers".into();
        assert_eq!(format.format(&fixed_datetime()), "no specifiers");
    }

    #[test]
    fn test_from_string() {
        let format = TimestampFormat::from(String::from("%H"));
        assert_eq!(format, TimestampFormat::Custom("%H".to_string()));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Default).expect("serialize");
        assert_eq!(json, "\"Default\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
