mod consts;
mod format;
mod grid;
mod prelude;
mod range;
mod rules;
mod style;
mod types;

pub use consts::*;
pub use format::{DateFormat, format_date, parse_date};
pub use grid::{GridError, MonthGrid, WeekStart, month_grid};
pub use range::{DateRange, is_in_range, is_same_day};
pub use rules::{DateConstraints, is_date_disabled};
pub use style::{ColorScheme, PopupPosition, SchemeTokens, ThemeMode, ThemeTokens};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;
use types::days_in_month;

/// A concrete calendar day.
///
/// Always a valid Gregorian date: the component types reject
/// out-of-range values at construction, so Feb 30 is unrepresentable.
/// Ordering is plain chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input did not match the expected pattern.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Year outside the supported range.
    #[error("Invalid year: {0} (must be 1-{MAX_YEAR})")]
    InvalidYear(u16),

    /// Month outside 1-12.
    #[error("Invalid month: {0} (must be 1-{MAX_MONTH})")]
    InvalidMonth(u8),

    /// Day does not exist in the given month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },

    /// Empty input string.
    #[error("Empty date string")]
    EmptyInput,
}

impl CalendarDate {
    /// Creates a date from raw components, validating each one.
    ///
    /// # Errors
    /// Returns the matching `DateError` variant for an out-of-range
    /// year, month, or day (leap years accounted for).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year (1..=9999)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1-based)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Weekday index of this date, 0 = Sunday .. 6 = Saturday
    pub const fn weekday(&self) -> u8 {
        types::weekday(self.year(), self.month(), self.day())
    }

    /// First day of this date's month
    pub const fn first_of_month(&self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: types::Day::FIRST,
        }
    }

    /// The following calendar day, rolling over month and year ends.
    /// Returns `None` past the last supported day (9999-12-31).
    pub fn next_day(self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        if day < days_in_month(year, month) {
            return Self::new(year, month, day + 1).ok();
        }
        self.next_month_anchor()
    }

    /// The preceding calendar day, rolling over month and year starts.
    /// Returns `None` before the first supported day (0001-01-01).
    pub fn prev_day(self) -> Option<Self> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        if day > MIN_DAY {
            return Self::new(year, month, day - 1).ok();
        }
        let (prev_year, prev_month) = if month == JANUARY {
            if year == 1 {
                return None;
            }
            (year - 1, DECEMBER)
        } else {
            (year, month - 1)
        };
        Self::new(prev_year, prev_month, days_in_month(prev_year, prev_month)).ok()
    }

    /// Day 1 of the following month, used for month navigation.
    /// Returns `None` when it would pass the year limit.
    pub fn next_month_anchor(self) -> Option<Self> {
        let (year, month) = (self.year(), self.month());
        if month == DECEMBER {
            if year >= MAX_YEAR {
                return None;
            }
            return Self::new(year + 1, JANUARY, MIN_DAY).ok();
        }
        Self::new(year, month + 1, MIN_DAY).ok()
    }

    /// Day 1 of the preceding month, used for month navigation.
    /// Returns `None` when it would pass the year limit.
    pub fn prev_month_anchor(self) -> Option<Self> {
        let (year, month) = (self.year(), self.month());
        if month == JANUARY {
            if year == 1 {
                return None;
            }
            return Self::new(year - 1, DECEMBER, MIN_DAY).ok();
        }
        Self::new(year, month - 1, MIN_DAY).ok()
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::try_parse_date(s, DateFormat::IsoDate)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_new_valid() {
        let d = date(2024, 8, 15);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 8);
        assert_eq!(d.day(), 15);
    }

    #[test]
    fn test_new_rejects_bad_components() {
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 2, 30),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_leap_year_construction() {
        // 2020 is a leap year
        assert!(CalendarDate::new(2020, 2, 29).is_ok());

        // 2021 is not
        let result = CalendarDate::new(2021, 2, 29);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1991, 8, 15).to_string(), "1991-08-15");
        assert_eq!(date(2024, 1, 5).to_string(), "2024-01-05");
        assert_eq!(date(800, 12, 31).to_string(), "0800-12-31");
    }

    #[test]
    fn test_from_str_iso() {
        let d = "1991-08-15".parse::<CalendarDate>().expect("valid ISO date");
        assert_eq!(d, date(1991, 8, 15));
    }

    #[test]
    fn test_from_str_with_whitespace() {
        let d = " 1991-08-15 ".parse::<CalendarDate>().expect("trimmed date");
        assert_eq!(d, date(1991, 8, 15));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "1991-08".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-08-XX".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-13-01".parse::<CalendarDate>(),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
        assert_eq!(date(2024, 2, 2), date(2024, 2, 2));
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 was a Monday
        assert_eq!(date(2024, 1, 1).weekday(), 1);
        // 2023-12-31 was a Sunday
        assert_eq!(date(2023, 12, 31).weekday(), 0);
    }

    #[test]
    fn test_first_of_month() {
        assert_eq!(date(2024, 8, 15).first_of_month(), date(2024, 8, 1));
        assert_eq!(date(2024, 8, 1).first_of_month(), date(2024, 8, 1));
    }

    #[test]
    fn test_next_day_within_month() {
        assert_eq!(date(2024, 8, 15).next_day(), Some(date(2024, 8, 16)));
    }

    #[test]
    fn test_next_day_rollover_and_leap() {
        assert_eq!(date(2024, 2, 29).next_day(), Some(date(2024, 3, 1)));
        assert_eq!(date(2023, 2, 28).next_day(), Some(date(2023, 3, 1)));
        assert_eq!(date(2021, 12, 31).next_day(), Some(date(2022, 1, 1)));
    }

    #[test]
    fn test_prev_day_rollover_and_leap() {
        assert_eq!(date(2024, 8, 15).prev_day(), Some(date(2024, 8, 14)));
        assert_eq!(date(2024, 3, 1).prev_day(), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 3, 1).prev_day(), Some(date(2023, 2, 28)));
        assert_eq!(date(2022, 1, 1).prev_day(), Some(date(2021, 12, 31)));
    }

    #[test]
    fn test_day_stepping_at_year_limits() {
        assert_eq!(date(9999, 12, 31).next_day(), None);
        assert_eq!(date(1, 1, 1).prev_day(), None);
    }

    #[test]
    fn test_month_anchors() {
        assert_eq!(
            date(2024, 8, 15).next_month_anchor(),
            Some(date(2024, 9, 1))
        );
        assert_eq!(
            date(2024, 12, 25).next_month_anchor(),
            Some(date(2025, 1, 1))
        );
        assert_eq!(
            date(2024, 8, 15).prev_month_anchor(),
            Some(date(2024, 7, 1))
        );
        assert_eq!(
            date(2024, 1, 15).prev_month_anchor(),
            Some(date(2023, 12, 1))
        );
    }

    #[test]
    fn test_month_anchors_at_year_limits() {
        assert_eq!(date(9999, 12, 1).next_month_anchor(), None);
        assert_eq!(date(1, 1, 31).prev_month_anchor(), None);
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 2, 29);
        let json = serde_json::to_string(&d).expect("failed to serialize date");
        assert_eq!(json, r#""2024-02-29""#);

        let parsed: CalendarDate = serde_json::from_str(&json).expect("failed to deserialize date");
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Invalid day (32) should be rejected
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-01-32""#);
        assert!(result.is_err());

        // Invalid day for February (30) should be rejected
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        // Invalid year (10000) should be rejected
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""10000-01-01""#);
        assert!(result.is_err());

        // Valid leap day should succeed
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }
}
