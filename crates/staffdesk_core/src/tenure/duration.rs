//! Calendar-accurate duration arithmetic.
//!
//! # Responsibility
//! - Compute whole `(years, months, days)` components between two dates.
//! - Provide the clamped entry point used wherever dates are optional.
//!
//! # Invariants
//! - Borrowing uses real month lengths; leap years are respected.
//! - `between` components are all non-negative whenever `end >= start`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Calendar distance between two dates in whole component units.
///
/// This is a calendar subtraction, not elapsed days divided by fixed
/// month/year lengths: `2020-01-31 -> 2020-03-01` is one month and one
/// day even though February 2020 had 29 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDuration {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl CalendarDuration {
    /// Computes the calendar duration from `start` to `end`.
    ///
    /// # Contract
    /// - Defined for `end >= start`; every component is then `>= 0` and
    ///   each may independently be zero.
    /// - For `end < start` the result carries negative components;
    ///   callers must clamp upstream via [`CalendarDuration::try_between`].
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let mut years = end.year() - start.year();
        let mut months = end.month() as i32 - start.month() as i32;
        let mut days = end.day() as i32 - start.day() as i32;

        if days < 0 {
            // Borrow one month, measured in the start month's real length.
            months -= 1;
            days += days_in_month(start.year(), start.month());
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years,
            months,
            days,
        }
    }

    /// Clamped variant of [`CalendarDuration::between`].
    ///
    /// Returns `None` when `end < start`, so missing or placeholder
    /// dates upstream read as "no duration" instead of reaching the
    /// calculator with a reversed range.
    pub fn try_between(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }
        Some(Self::between(start, end))
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Display for CalendarDuration {
    /// Renders the duration badge shown next to job entries.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}y - {}m - {}d", self.years, self.months, self.days)
    }
}

/// Number of days in `month` of `year`, leap years included.
fn days_in_month(year: i32, month: u32) -> i32 {
    let first = first_of_month(year, month);
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    (next - first).num_days() as i32
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Month is 1..=12 at every call site and day 1 always exists.
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month")
}
