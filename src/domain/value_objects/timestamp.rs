//! Timestamp value object.
//!
//! Provides a strongly-typed UTC timestamp for entity creation and update
//! times.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

/// A UTC timestamp.
///
/// `Timestamp` wraps `chrono::DateTime<Utc>` so creation and update times
/// cannot be confused with other date values, and so every stored time is
/// in UTC.
///
/// # Examples
///
/// ```rust
/// use account_app::domain::value_objects::Timestamp;
///
/// let parsed = Timestamp::parse("2025-04-13T00:00:00Z").unwrap();
/// assert_eq!(parsed.to_string(), "2025-04-13T00:00:00Z");
///
/// assert!(Timestamp::parse("yesterday").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp representing the current moment in UTC.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wraps an existing `DateTime<Utc>`.
    #[must_use]
    pub const fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Parses an RFC 3339 string, or a naive `YYYY-MM-DDTHH:MM:SS[.f]` string
    /// which is taken to be UTC.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Some(Self(datetime.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
    }

    /// Returns the inner `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the later of `self` and `other`.
    ///
    /// Used when refreshing an update time so it never moves backwards even
    /// if the wall clock does.
    #[must_use]
    pub fn at_least(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}",
            self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}
