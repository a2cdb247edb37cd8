//! Timestamp formatting utilities
//!
//! Layouts prefix every line with a timestamp. All built-in formats render in
//! UTC with ASCII digits only, so they do not depend on the process locale,
//! and all but `Custom` have a fixed width so log lines sort lexically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standardized timestamp format options
///
/// # Examples
///
/// ```
/// use rust_log4::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Simple.format(&Utc::now());
/// assert_eq!(Some(stamp.len()), TimestampFormat::Simple.fixed_width());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025.01.08-10:30:45`
    ///
    /// The prefix used by the simple layout.
    #[default]
    Simple,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    ///
    /// Provides higher precision for ordering concurrent log entries.
    Iso8601Micros,

    /// RFC 3339 with explicit offset: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// Width and locale independence are up to the format string.
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Simple => datetime.format("%Y.%m.%d-%H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f+00:00").to_string(),
            TimestampFormat::UnixMillis => format!("{:013}", datetime.timestamp_millis()),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Width of the rendered timestamp, `None` for custom formats
    ///
    /// Holds for years 0000 through 9999 (and Unix millis up to 2286).
    #[must_use]
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            TimestampFormat::Simple => Some(19),
            TimestampFormat::Iso8601 => Some(24),
            TimestampFormat::Iso8601Micros => Some(27),
            TimestampFormat::Rfc3339 => Some(29),
            TimestampFormat::UnixMillis => Some(13),
            TimestampFormat::Custom(_) => None,
        }
    }
}
