//! Role-history timeline assembly.
//!
//! # Responsibility
//! - Turn a reverse-chronological list of role-change events into
//!   contiguous tenure segments.
//! - Delegate per-segment duration math to `CalendarDuration`.
//!
//! # Invariants
//! - Input order is authoritative; events are never re-sorted.
//! - Segment `i` ends where segment `i - 1` starts; segment 0 ends at
//!   the caller-supplied reference date.

use crate::tenure::duration::CalendarDuration;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated role change: the point after which `label` applied.
///
/// Promotions and previous-job entries both project into this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEvent {
    /// Designation or role name that began on `effective_date`.
    pub label: String,
    /// Date the role took effect.
    pub effective_date: NaiveDate,
}

/// One continuous period in a role, with its computed duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureSegment {
    pub label: String,
    pub start: NaiveDate,
    /// For the most recent segment this is the caller's reference date,
    /// not a stored value.
    pub end: NaiveDate,
    pub duration: CalendarDuration,
}

/// Builds tenure segments from `events`, most recent first.
///
/// # Contract
/// - `events` must already be ordered most-recent-first. The first
///   segment ends at `now`; every later segment ends where its
///   predecessor starts.
/// - An input that is not reverse-chronological produces segments with
///   stale `end` values; ordering is the caller's responsibility, not
///   validated here.
/// - Empty input yields empty output.
pub fn build_timeline(events: &[RoleEvent], now: NaiveDate) -> Vec<TenureSegment> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let end = if index == 0 {
                now
            } else {
                events[index - 1].effective_date
            };
            let start = event.effective_date;
            TenureSegment {
                label: event.label.clone(),
                start,
                end,
                duration: CalendarDuration::between(start, end),
            }
        })
        .collect()
}
