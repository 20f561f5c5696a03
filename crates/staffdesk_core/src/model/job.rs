//! Job history domain model.
//!
//! # Responsibility
//! - Define the job record: current engagement, promotion history and
//!   previous jobs.
//! - Project job history into tenure segments and durations for the
//!   job screen.
//!
//! # Invariants
//! - `promotions` is stored most-recent-first; timeline chaining
//!   relies on that order.
//! - Reversed or missing date ranges never reach the duration
//!   calculator; they read as "no duration".

use crate::model::employee::EmployeeId;
use crate::tenure::duration::CalendarDuration;
use crate::tenure::timeline::{build_timeline, RoleEvent, TenureSegment};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Engagement type of a job entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contractual,
    Internship,
}

/// One promotion: the date a new designation took effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub designation: String,
    pub promotion_date: NaiveDate,
}

/// One previous engagement outside the company.
///
/// A freshly appended row is all-blank; dates stay optional until the
/// user fills them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousJob {
    pub company_name: String,
    pub company_website: String,
    pub designation: String,
    pub job_type: Option<JobType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PreviousJob {
    /// Duration of this engagement, when both dates are usable.
    ///
    /// Placeholder rows carry missing dates and a reversed range is
    /// clamped out before the calculator runs; both read as `None`.
    pub fn duration(&self) -> Option<CalendarDuration> {
        let start = self.start_date?;
        let end = self.end_date?;
        CalendarDuration::try_between(start, end)
    }
}

/// Job record edited on the job-information screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeJob {
    pub employee_id: EmployeeId,
    /// Current designation, superseded by `promotions[0]` once any
    /// promotion exists.
    pub designation: String,
    pub joining_date: NaiveDate,
    /// Promotion history, most recent first.
    pub promotions: Vec<Promotion>,
    /// Engagements before joining, display-ordered.
    pub prev_jobs: Vec<PreviousJob>,
}

impl EmployeeJob {
    /// Creates a job record with no promotion or previous-job history.
    pub fn new(
        employee_id: EmployeeId,
        designation: impl Into<String>,
        joining_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id,
            designation: designation.into(),
            joining_date,
            promotions: Vec::new(),
            prev_jobs: Vec::new(),
        }
    }

    /// Total employment duration from joining until `now`.
    ///
    /// `None` when `now` precedes the joining date (a future-dated
    /// joining entry), keeping the calculator's contract intact.
    pub fn employment_duration(&self, now: NaiveDate) -> Option<CalendarDuration> {
        CalendarDuration::try_between(self.joining_date, now)
    }

    /// Promotion history as chained tenure segments, most recent first.
    ///
    /// The first segment runs until `now`; each later segment ends
    /// where its predecessor began.
    pub fn promotion_timeline(&self, now: NaiveDate) -> Vec<TenureSegment> {
        let events: Vec<RoleEvent> = self
            .promotions
            .iter()
            .map(|promotion| RoleEvent {
                label: promotion.designation.clone(),
                effective_date: promotion.promotion_date,
            })
            .collect();
        build_timeline(&events, now)
    }
}
