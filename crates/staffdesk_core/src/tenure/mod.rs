//! Tenure and duration computation.
//!
//! # Responsibility
//! - Calendar-accurate duration math between two dates.
//! - Role-history timeline assembly for tenure displays.
//! - Read-only date formatting shared by profile and job screens.
//!
//! # Invariants
//! - Month lengths and leap years come from the calendar type, never
//!   from fixed 30/365 approximations.

pub mod duration;
pub mod timeline;

use chrono::NaiveDate;

/// Formats a date for read-only display, e.g. `Jan 5, 2024`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
