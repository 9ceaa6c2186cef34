//! Fixed-pattern date formatting and parsing for the picker's text input.
//!
//! Formatting of an absent date yields an empty string, and parsing
//! failures yield `None` rather than an error: the text field round-trips
//! through these two functions on every edit, and a half-typed date is
//! expected input, not an exceptional condition.

use crate::consts::{
    DATE_SEPARATOR, MONTH_ABBREVIATION_LEN, MONTH_ABBREVIATIONS, SLASH_SEPARATOR,
};
use crate::prelude::*;
use crate::{CalendarDate, DateError};
use std::str::FromStr;

/// Supported display patterns for the date text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum DateFormat {
    /// `MM/DD/YYYY`
    #[default]
    #[display(fmt = "MM/DD/YYYY")]
    MonthDayYear,
    /// `DD/MM/YYYY`
    #[display(fmt = "DD/MM/YYYY")]
    DayMonthYear,
    /// `YYYY-MM-DD`
    #[display(fmt = "YYYY-MM-DD")]
    IsoDate,
    /// `MMM DD, YYYY`
    #[display(fmt = "MMM DD, YYYY")]
    MonthNameDayYear,
    /// `DD MMM YYYY`
    #[display(fmt = "DD MMM YYYY")]
    DayMonthNameYear,
    /// `YYYY/MM/DD`
    #[display(fmt = "YYYY/MM/DD")]
    YearMonthDay,
}

impl DateFormat {
    /// Every supported pattern, in display order
    pub const ALL: [Self; 6] = [
        Self::MonthDayYear,
        Self::DayMonthYear,
        Self::IsoDate,
        Self::MonthNameDayYear,
        Self::DayMonthNameYear,
        Self::YearMonthDay,
    ];
}

impl FromStr for DateFormat {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "MM/DD/YYYY" => Ok(Self::MonthDayYear),
            "DD/MM/YYYY" => Ok(Self::DayMonthYear),
            "YYYY-MM-DD" => Ok(Self::IsoDate),
            "MMM DD, YYYY" => Ok(Self::MonthNameDayYear),
            "DD MMM YYYY" => Ok(Self::DayMonthNameYear),
            "YYYY/MM/DD" => Ok(Self::YearMonthDay),
            other => Err(DateError::InvalidFormat(other.to_owned())),
        }
    }
}

impl serde::Serialize for DateFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Renders a date in the given pattern.
///
/// An absent date renders as the empty string. Day and month numerals are
/// zero-padded to two digits, years to four. Month-name patterns use the
/// fixed 3-letter ASCII abbreviations; there is no locale support.
pub fn format_date(date: Option<CalendarDate>, format: DateFormat) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let (year, month, day) = (date.year(), date.month(), date.day());
    match format {
        DateFormat::MonthDayYear => format!("{month:02}/{day:02}/{year:04}"),
        DateFormat::DayMonthYear => format!("{day:02}/{month:02}/{year:04}"),
        DateFormat::IsoDate => format!("{year:04}-{month:02}-{day:02}"),
        DateFormat::MonthNameDayYear => {
            format!("{} {day:02}, {year:04}", month_abbreviation(month))
        }
        DateFormat::DayMonthNameYear => {
            format!("{day:02} {} {year:04}", month_abbreviation(month))
        }
        DateFormat::YearMonthDay => format!("{year:04}/{month:02}/{day:02}"),
    }
}

/// Parses text in the given pattern into a date.
///
/// Returns `None` for empty input, malformed fields, unknown month names,
/// and impossible dates. Never panics and never returns a partially
/// populated date.
pub fn parse_date(text: &str, format: DateFormat) -> Option<CalendarDate> {
    try_parse_date(text, format).ok()
}

/// Error-reporting variant of [`parse_date`], used by `FromStr` where the
/// caller wants to know which component was rejected.
pub(crate) fn try_parse_date(text: &str, format: DateFormat) -> Result<CalendarDate, DateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let (year, month, day) = match format {
        DateFormat::MonthDayYear => {
            let [m, d, y] = split_fields(trimmed, SLASH_SEPARATOR)?;
            (parse_year(y)?, parse_component(m)?, parse_component(d)?)
        }
        DateFormat::DayMonthYear => {
            let [d, m, y] = split_fields(trimmed, SLASH_SEPARATOR)?;
            (parse_year(y)?, parse_component(m)?, parse_component(d)?)
        }
        DateFormat::IsoDate => {
            let [y, m, d] = split_fields(trimmed, DATE_SEPARATOR)?;
            (parse_year(y)?, parse_component(m)?, parse_component(d)?)
        }
        DateFormat::MonthNameDayYear => {
            let [m, d, y] = split_name_fields(trimmed)?;
            (parse_year(y)?, month_from_name(m)?, parse_component(d)?)
        }
        DateFormat::DayMonthNameYear => {
            let [d, m, y] = split_name_fields(trimmed)?;
            (parse_year(y)?, month_from_name(m)?, parse_component(d)?)
        }
        DateFormat::YearMonthDay => {
            let [y, m, d] = split_fields(trimmed, SLASH_SEPARATOR)?;
            (parse_year(y)?, parse_component(m)?, parse_component(d)?)
        }
    };

    CalendarDate::new(year, month, day)
}

/// Splits into exactly three fields on the pattern separator
fn split_fields(text: &str, separator: char) -> Result<[&str; 3], DateError> {
    let mut parts = text.split(separator).map(str::trim);
    let (Some(a), Some(b), Some(c), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DateError::InvalidFormat(text.to_owned()));
    };
    Ok([a, b, c])
}

/// Splits a month-name pattern on whitespace and the comma
fn split_name_fields(text: &str) -> Result<[&str; 3], DateError> {
    let mut parts = text.split([' ', ',']).filter(|part| !part.is_empty());
    let (Some(a), Some(b), Some(c), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DateError::InvalidFormat(text.to_owned()));
    };
    Ok([a, b, c])
}

fn parse_year(text: &str) -> Result<u16, DateError> {
    text.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(text.to_owned()))
}

fn parse_component(text: &str) -> Result<u8, DateError> {
    text.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(text.to_owned()))
}

fn month_abbreviation(month: u8) -> &'static str {
    MONTH_ABBREVIATIONS[(month - 1) as usize]
}

/// Resolves a month-name token by case-sensitive 3-letter prefix match,
/// so "Dec" and "December" both resolve to 12 but "dec" does not.
fn month_from_name(token: &str) -> Result<u8, DateError> {
    let prefix = token
        .get(..MONTH_ABBREVIATION_LEN)
        .ok_or_else(|| DateError::InvalidFormat(token.to_owned()))?;
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbreviation| *abbreviation == prefix)
        .map(|index| index as u8 + 1)
        .ok_or_else(|| DateError::InvalidFormat(token.to_owned()))
}
