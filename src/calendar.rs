//! Calendar utilities for did
//!
//! Dates travel through the tool as canonical `YYYY/MM/DD` strings: that is
//! the format written to the log, compared against while aggregating, and
//! sliced for the report labels. [`CalendarDate`] is the validated form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Length of a canonical `YYYY/MM/DD` date string
pub const DATE_LEN: usize = 10;

/// Earliest year accepted by [`CalendarDate::parse`]
pub const MIN_YEAR: i32 = 1900;

/// Weekday initials, Sunday first
const WEEKDAY_INITIALS: [char; 7] = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A validated calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, validating month and day ranges
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if year < MIN_YEAR {
            return Err(Error::InvalidDate(format!(
                "{year:04}/{month:02}/{day:02}"
            )));
        }
        let max_day = days_in_month(year, month).ok_or_else(|| {
            Error::InvalidDate(format!("{year:04}/{month:02}/{day:02}"))
        })?;
        if day < 1 || day > max_day {
            return Err(Error::InvalidDate(format!(
                "{year:04}/{month:02}/{day:02}"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| Error::InvalidDate(format!("{year:04}/{month:02}/{day:02}")))
    }

    /// Parse a canonical `YYYY/MM/DD` string
    ///
    /// The separators must sit at offsets 4 and 7 and every other position
    /// must be an ASCII digit. Month and day are checked against the
    /// calendar, leap years included.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate(text.to_string());
        let bytes = text.as_bytes();
        if bytes.len() != DATE_LEN || bytes[4] != b'/' || bytes[7] != b'/' {
            return Err(invalid());
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return Err(invalid());
        }

        let year: i32 = text[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = text[5..7].parse().map_err(|_| invalid())?;
        let day: u32 = text[8..10].parse().map_err(|_| invalid())?;
        Self::from_ymd(year, month, day).map_err(|_| invalid())
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        CalendarDate(Local::now().date_naive())
    }

    /// Yesterday's date in the local timezone
    pub fn yesterday() -> Result<Self> {
        Self::today().add_days(-1)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index, 0 = Sunday
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Single-letter weekday label (`S M T W T F S`)
    pub fn weekday_initial(&self) -> char {
        weekday_initial(self.weekday_index())
    }

    /// Shift by `delta` days, rolling over months and years as needed
    pub fn add_days(&self, delta: i64) -> Result<Self> {
        self.0
            .checked_add_signed(Duration::days(delta))
            .map(CalendarDate)
            .ok_or_else(|| Error::InvalidDate(format!("{self} {delta:+} days")))
    }

    /// Canonical zero-padded `YYYY/MM/DD` form
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CalendarDate::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let days = DAYS_IN_MONTH[(month - 1) as usize];
    if month == 2 && is_leap_year(year) {
        Some(days + 1)
    } else {
        Some(days)
    }
}

/// Weekday index (0 = Sunday) for a proleptic Gregorian date
///
/// Returns `None` when the parts do not form a real date.
pub fn day_of_week(year: i32, month: u32, day: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.weekday().num_days_from_sunday())
}

/// Letter for a weekday index; indexes wrap modulo 7
pub fn weekday_initial(index: u32) -> char {
    WEEKDAY_INITIALS[(index % 7) as usize]
}
