//! Log level definitions
//!
//! Levels form a closed, totally ordered set backed by an integer rank.
//! Filtering only ever compares ranks; name and rank parsing are kept on
//! separate lenient paths that fall back to a caller-supplied level.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    All,
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

impl Level {
    pub const ALL_RANK: i32 = i32::MIN;
    pub const TRACE_RANK: i32 = 5_000;
    pub const DEBUG_RANK: i32 = 10_000;
    pub const INFO_RANK: i32 = 20_000;
    pub const WARN_RANK: i32 = 30_000;
    pub const ERROR_RANK: i32 = 40_000;
    pub const FATAL_RANK: i32 = 50_000;
    pub const OFF_RANK: i32 = i32::MAX;

    /// Every level, lowest rank first
    pub const ALL_LEVELS: [Level; 8] = [
        Level::All,
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Off,
    ];

    #[inline]
    pub const fn rank(self) -> i32 {
        match self {
            Level::All => Self::ALL_RANK,
            Level::Trace => Self::TRACE_RANK,
            Level::Debug => Self::DEBUG_RANK,
            Level::Info => Self::INFO_RANK,
            Level::Warn => Self::WARN_RANK,
            Level::Error => Self::ERROR_RANK,
            Level::Fatal => Self::FATAL_RANK,
            Level::Off => Self::OFF_RANK,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "OFF",
        }
    }

    /// Compare two levels by rank
    #[inline]
    pub fn compare(self, other: Level) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// Case-insensitive lookup in the name table
    ///
    /// Returns `fallback` for a missing, empty or unknown name.
    ///
    /// ```
    /// use rust_log4::Level;
    ///
    /// assert_eq!(Level::from_name(Some("warn"), Level::Info), Level::Warn);
    /// assert_eq!(Level::from_name(Some("loud"), Level::Info), Level::Info);
    /// assert_eq!(Level::from_name(None, Level::Debug), Level::Debug);
    /// ```
    pub fn from_name(name: Option<&str>, fallback: Level) -> Level {
        name.and_then(Self::lookup_name).unwrap_or(fallback)
    }

    /// Exact lookup in the rank table, no nearest-rank coercion
    ///
    /// ```
    /// use rust_log4::Level;
    ///
    /// assert_eq!(Level::from_rank(40_000, Level::Info), Level::Error);
    /// assert_eq!(Level::from_rank(40_001, Level::Info), Level::Info);
    /// ```
    pub fn from_rank(rank: i64, fallback: Level) -> Level {
        Self::lookup_rank(rank).unwrap_or(fallback)
    }

    fn lookup_name(name: &str) -> Option<Level> {
        Self::ALL_LEVELS
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }

    fn lookup_rank(rank: i64) -> Option<Level> {
        Self::ALL_LEVELS
            .into_iter()
            .find(|level| i64::from(level.rank()) == rank)
    }

    #[cfg(feature = "color")]
    pub fn color(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::All | Level::Trace => BrightBlack,
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::Fatal | Level::Off => BrightRed,
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.rank()
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, LoggerError> {
        Self::lookup_name(s).ok_or_else(|| LoggerError::invalid_level(s))
    }
}

impl TryFrom<i64> for Level {
    type Error = LoggerError;

    fn try_from(rank: i64) -> Result<Self, LoggerError> {
        Self::lookup_rank(rank).ok_or_else(|| LoggerError::invalid_level(rank.to_string()))
    }
}

/// Lenient conversion into a [`Level`]
///
/// Used by [`Logger::set_level`](super::Logger::set_level): anything that
/// does not name or rank a level resolves to `fallback`.
pub trait ToLevel {
    fn to_level(&self, fallback: Level) -> Level;
}

impl ToLevel for Level {
    fn to_level(&self, _fallback: Level) -> Level {
        *self
    }
}

impl ToLevel for &str {
    fn to_level(&self, fallback: Level) -> Level {
        Level::from_name(Some(self), fallback)
    }
}

impl ToLevel for String {
    fn to_level(&self, fallback: Level) -> Level {
        Level::from_name(Some(self), fallback)
    }
}

impl ToLevel for Option<&str> {
    fn to_level(&self, fallback: Level) -> Level {
        Level::from_name(*self, fallback)
    }
}

impl ToLevel for i32 {
    fn to_level(&self, fallback: Level) -> Level {
        Level::from_rank(i64::from(*self), fallback)
    }
}

impl ToLevel for i64 {
    fn to_level(&self, fallback: Level) -> Level {
        Level::from_rank(*self, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        for (i, a) in Level::ALL_LEVELS.iter().enumerate() {
            for (j, b) in Level::ALL_LEVELS.iter().enumerate() {
                assert_eq!(a.compare(*b), i.cmp(&j), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_sentinels_bound_the_table() {
        assert_eq!(Level::All.rank(), i32::MIN);
        assert_eq!(Level::Off.rank(), i32::MAX);
        assert!(Level::ALL_LEVELS.iter().all(|l| *l >= Level::All && *l <= Level::Off));
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Level::from_name(Some("TrAcE"), Level::Off), Level::Trace);
        assert_eq!(Level::from_name(Some("off"), Level::Info), Level::Off);
        assert_eq!(Level::from_name(Some("all"), Level::Info), Level::All);
    }

    #[test]
    fn test_from_name_fallback() {
        assert_eq!(Level::from_name(Some(""), Level::Warn), Level::Warn);
        assert_eq!(Level::from_name(Some("WARNING"), Level::Warn), Level::Warn);
        assert_eq!(Level::from_name(Some(" info"), Level::Fatal), Level::Fatal);
        assert_eq!(Level::from_name(None, Level::Error), Level::Error);
    }

    #[test]
    fn test_from_rank_exact_only() {
        assert_eq!(Level::from_rank(5_000, Level::Off), Level::Trace);
        assert_eq!(Level::from_rank(i64::from(i32::MIN), Level::Off), Level::All);
        assert_eq!(Level::from_rank(i64::from(i32::MAX), Level::Info), Level::Off);
        assert_eq!(Level::from_rank(19_999, Level::Debug), Level::Debug);
        assert_eq!(Level::from_rank(0, Level::Debug), Level::Debug);
    }

    #[test]
    fn test_strict_parsing() {
        assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(LoggerError::InvalidLevel { .. })
        ));
        assert_eq!(Level::try_from(30_000_i64).unwrap(), Level::Warn);
        assert!(Level::try_from(1_i64).is_err());
    }

    #[test]
    fn test_display_and_rank_coercion() {
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(format!("{:5}|", Level::Info), "INFO |");
        assert_eq!(i32::from(Level::Error), 40_000);
    }

    #[test]
    fn test_to_level() {
        assert_eq!("debug".to_level(Level::Info), Level::Debug);
        assert_eq!(String::from("nope").to_level(Level::Info), Level::Info);
        assert_eq!(None::<&str>.to_level(Level::Trace), Level::Trace);
        assert_eq!(50_000_i32.to_level(Level::Info), Level::Fatal);
        assert_eq!(7_i64.to_level(Level::Info), Level::Info);
    }

    #[test]
    fn test_serde_uses_names() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"WARN\"");
        let level: Level = serde_json::from_str("\"TRACE\"").unwrap();
        assert_eq!(level, Level::Trace);
    }
}
