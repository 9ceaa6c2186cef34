use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::consts::{GRID_CELLS, GRID_COLUMNS};

/// Which weekday occupies the grid's first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Leading cells before the month's first day, given that day's
    /// weekday index (0 = Sunday .. 6 = Saturday).
    const fn leading_offset(self, weekday: u8) -> u8 {
        match self {
            Self::Sunday => weekday,
            Self::Monday => (weekday + 6) % 7,
        }
    }
}

/// Error type for grid construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The month sits at the edge of the supported year range and its
    /// padding cells would fall outside it.
    #[error("Grid for {year:04}-{month:02} needs padding days outside the supported year range")]
    OutOfBounds { year: u16, month: u8 },
}

/// A month rendered as a fixed 6x7 grid of consecutive days.
///
/// Always exactly 42 cells in strictly ascending order. Cells before and
/// after the anchor month belong to the immediately adjacent months; a
/// month that would fit in 5 rows still gets 6 so every month renders
/// with the same height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: u16,
    month: u8,
    days: Vec<CalendarDate>,
}

impl MonthGrid {
    /// All 42 cells in grid order
    pub fn days(&self) -> &[CalendarDate] {
        &self.days
    }

    /// The grid's rows, one slice of 7 cells per week
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDate]> {
        self.days.chunks(GRID_COLUMNS)
    }

    /// True when the cell belongs to the displayed month rather than
    /// the leading or trailing padding
    pub const fn in_month(&self, date: &CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Year of the displayed month
    pub const fn anchor_year(&self) -> u16 {
        self.year
    }

    /// Month of the displayed month (1..=12)
    pub const fn anchor_month(&self) -> u8 {
        self.month
    }
}

/// Builds the 42-cell grid for the month containing `anchor`.
///
/// The anchor's day of month is irrelevant; only its year and month
/// select what is displayed.
///
/// # Errors
/// Returns `GridError::OutOfBounds` for months whose padding would fall
/// before year 1 or after year 9999.
pub fn month_grid(anchor: CalendarDate, week_start: WeekStart) -> Result<MonthGrid, GridError> {
    let (year, month) = (anchor.year(), anchor.month());
    let out_of_bounds = GridError::OutOfBounds { year, month };

    let first = anchor.first_of_month();
    let offset = week_start.leading_offset(first.weekday());

    let mut cursor = first;
    for _ in 0..offset {
        cursor = cursor.prev_day().ok_or(out_of_bounds.clone())?;
    }

    let mut days = Vec::with_capacity(GRID_CELLS);
    days.push(cursor);
    while days.len() < GRID_CELLS {
        cursor = cursor.next_day().ok_or(out_of_bounds.clone())?;
        days.push(cursor);
    }

    Ok(MonthGrid { year, month, days })
}
