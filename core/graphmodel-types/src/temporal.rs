//! Calendar primitives of the wire schema.
//!
//! The schema distinguishes a calendar date (`Edm.Date`, `YYYY-MM-DD`) and a
//! time of day (`Edm.TimeOfDay`, `HH:MM:SS[.fffffff]`) from a full timestamp.
//! Both are thin wrappers over `chrono` types that pin down the wire format.

use crate::DecodeError;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date without time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOnly(NaiveDate);

impl DateOnly {
    /// Creates a date from its components, or `None` if the date does not exist.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for DateOnly {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateOnly {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|e| DecodeError::InvalidFormat {
                kind: "date",
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// A time of day without date or time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOnly(NaiveTime);

impl TimeOnly {
    /// Creates a time from its components, or `None` if out of range.
    #[must_use]
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Creates a time with millisecond precision.
    #[must_use]
    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, milli: u32) -> Option<Self> {
        NaiveTime::from_hms_milli_opt(hour, minute, second, milli).map(Self)
    }

    #[must_use]
    pub const fn as_naive(&self) -> NaiveTime {
        self.0
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    #[must_use]
    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl From<NaiveTime> for TimeOnly {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl fmt::Display for TimeOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.nanosecond() == 0 {
            write!(f, "{}", self.0.format("%H:%M:%S"))
        } else {
            write!(f, "{}", self.0.format("%H:%M:%S%.f"))
        }
    }
}

impl FromStr for TimeOnly {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(Self)
            .map_err(|e| DecodeError::InvalidFormat {
                kind: "time",
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(DateOnly);
string_serde!(TimeOnly);
