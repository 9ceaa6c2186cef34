use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// A selected span between two dates, as held by a range-selection picker.
///
/// Either side may be absent: a range with only a start is "in progress"
/// and contains nothing until the end is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<CalendarDate>,
    pub end: Option<CalendarDate>,
}

impl DateRange {
    /// Creates a range from optional bounds
    pub const fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        Self { start, end }
    }

    /// True when both ends of the range are set
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Inclusive membership test; see [`is_in_range`]
    pub fn contains(&self, date: CalendarDate) -> bool {
        is_in_range(date, self.start, self.end)
    }
}

/// Same-calendar-day equality over optional dates.
///
/// True only when both are present and equal. An absent side is never
/// equal to anything, including another absent side: the picker treats
/// "no selection" as matching no cell, so `None == None` is false here.
pub fn is_same_day(a: Option<CalendarDate>, b: Option<CalendarDate>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Inclusive range membership over optional bounds.
///
/// True only when both bounds are present and `start <= date <= end`.
/// A single-sided range is never in-range.
pub fn is_in_range(
    date: CalendarDate,
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => (start..=end).contains(&date),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_same_day_present_dates() {
        assert!(is_same_day(Some(date(2024, 8, 15)), Some(date(2024, 8, 15))));
        assert!(!is_same_day(
            Some(date(2024, 8, 15)),
            Some(date(2024, 8, 16))
        ));
        assert!(!is_same_day(
            Some(date(2024, 8, 15)),
            Some(date(2023, 8, 15))
        ));
    }

    #[test]
    fn test_same_day_absent_is_never_equal() {
        assert!(!is_same_day(Some(date(2024, 8, 15)), None));
        assert!(!is_same_day(None, Some(date(2024, 8, 15))));
        assert!(!is_same_day(None, None));
    }

    #[test]
    fn test_in_range_inclusive_bounds() {
        let start = Some(date(2024, 1, 10));
        let end = Some(date(2024, 1, 20));

        assert!(is_in_range(date(2024, 1, 10), start, end));
        assert!(is_in_range(date(2024, 1, 15), start, end));
        assert!(is_in_range(date(2024, 1, 20), start, end));
        assert!(!is_in_range(date(2024, 1, 9), start, end));
        assert!(!is_in_range(date(2024, 1, 21), start, end));
    }

    #[test]
    fn test_in_range_single_sided_is_false() {
        let d = date(2024, 1, 15);

        assert!(!is_in_range(d, Some(date(2024, 1, 1)), None));
        assert!(!is_in_range(d, None, Some(date(2024, 12, 31))));
        assert!(!is_in_range(d, None, None));
    }

    #[test]
    fn test_in_range_across_month_and_year() {
        let start = Some(date(2023, 12, 25));
        let end = Some(date(2024, 1, 5));

        assert!(is_in_range(date(2023, 12, 31), start, end));
        assert!(is_in_range(date(2024, 1, 1), start, end));
        assert!(!is_in_range(date(2024, 1, 6), start, end));
    }

    #[test]
    fn test_in_range_inverted_bounds_match_nothing() {
        let start = Some(date(2024, 1, 20));
        let end = Some(date(2024, 1, 10));

        assert!(!is_in_range(date(2024, 1, 15), start, end));
        assert!(!is_in_range(date(2024, 1, 20), start, end));
    }

    #[test]
    fn test_range_default_is_empty() {
        let range = DateRange::default();
        assert_eq!(range.start, None);
        assert_eq!(range.end, None);
        assert!(!range.is_complete());
        assert!(!range.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_range_in_progress() {
        let range = DateRange::new(Some(date(2024, 1, 10)), None);
        assert!(!range.is_complete());
        assert!(!range.contains(date(2024, 1, 10)));
    }

    #[test]
    fn test_range_complete() {
        let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
        assert!(range.is_complete());
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 20)));
        assert!(!range.contains(date(2024, 1, 21)));
    }

    #[test]
    fn test_range_serde() {
        let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
        let json = serde_json::to_string(&range).expect("failed to serialize range");
        assert_eq!(json, r#"{"start":"2024-01-10","end":"2024-01-20"}"#);

        let parsed: DateRange = serde_json::from_str(&json).expect("failed to deserialize range");
        assert_eq!(range, parsed);
    }

    #[test]
    fn test_range_serde_partial() {
        let range = DateRange::new(Some(date(2024, 1, 10)), None);
        let json = serde_json::to_string(&range).expect("failed to serialize partial range");
        assert_eq!(json, r#"{"start":"2024-01-10","end":null}"#);

        let parsed: DateRange = serde_json::from_str(&json).expect("failed to deserialize partial range");
        assert_eq!(range, parsed);
    }
}
