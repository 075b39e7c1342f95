use chrono::{Datelike, Days, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A day on the wall calendar with no time-of-day or timezone attached.
///
/// Ordering is chronological and matches the lexicographic order of the
/// canonical `YYYY-MM-DD` form. Arithmetic saturates at the bounds chrono
/// can represent instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse the canonical `YYYY-MM-DD` form.
    ///
    /// The shape is checked before handing off to chrono, which on its own
    /// would also accept unpadded fields like `2024-6-1`.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if !has_canonical_shape(value) {
            return Err(DomainError::InvalidDateFormat(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidDateFormat(value.to_string()))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn pred(&self) -> Self {
        self.minus_days(1)
    }

    pub fn succ(&self) -> Self {
        self.plus_days(1)
    }

    pub fn minus_days(&self, days: u32) -> Self {
        Self(
            self.0
                .checked_sub_days(Days::new(days as u64))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    pub fn plus_days(&self, days: u32) -> Self {
        Self(
            self.0
                .checked_add_days(Days::new(days as u64))
                .unwrap_or(NaiveDate::MAX),
        )
    }

    /// Signed number of days from `self` to `other` (positive when `other` is later).
    pub fn days_until(&self, other: CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    pub(crate) fn days_from_ce(&self) -> i32 {
        self.0.num_days_from_ce()
    }

    pub(crate) fn from_days_from_ce(days: i32) -> Self {
        Self(NaiveDate::from_num_days_from_ce_opt(days).unwrap_or(NaiveDate::MIN))
    }
}

fn has_canonical_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| de::Error::custom(e.message()))
    }
}
