use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::range::is_same_day;

/// Selection constraints a picker applies to every rendered day:
/// optional min/max bounds and an explicit list of excluded dates.
///
/// The default is fully permissive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateConstraints {
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub disabled_dates: Vec<CalendarDate>,
}

impl DateConstraints {
    /// True when the date may not be selected; see [`is_date_disabled`]
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        is_date_disabled(date, self.min_date, self.max_date, &self.disabled_dates)
    }

    /// True when the date may be selected
    pub fn allows(&self, date: CalendarDate) -> bool {
        !self.is_disabled(date)
    }
}

/// Whether a date is excluded from selection.
///
/// A date is disabled when it falls before `min`, after `max`, or matches
/// an entry of `disabled` by calendar day. Absent bounds and an empty
/// list impose no constraint.
pub fn is_date_disabled(
    date: CalendarDate,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
    disabled: &[CalendarDate],
) -> bool {
    if min.is_some_and(|min| date < min) {
        return true;
    }
    if max.is_some_and(|max| date > max) {
        return true;
    }
    disabled
        .iter()
        .any(|excluded| is_same_day(Some(date), Some(*excluded)))
}
