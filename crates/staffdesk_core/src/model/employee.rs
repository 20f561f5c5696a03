//! Employee profile domain model.
//!
//! # Responsibility
//! - Define the personal-details record and its closed wire enums.
//! - Validate profile data before it is handed to the mutation
//!   collaborator.
//!
//! # Invariants
//! - `employee_id` is stable and never reused for another employee.
//! - Email fields are either empty or syntactically well-formed.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every employee-owned record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Gender selection offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Marital status selection offered by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

/// Employment lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// On the active roster.
    Active,
    /// Temporarily away, record still editable.
    OnLeave,
    /// Off the roster; kept for history.
    Terminated,
}

/// Validation failures for employee profile data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// Name is empty after trimming.
    BlankName,
    /// A non-empty email field is not a plausible address.
    InvalidEmail(String),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "employee name must not be blank"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// Personal-details record edited on the profile screen.
///
/// Select-backed fields stay optional because a record imported from
/// the directory service may not carry them; the read-only view shows
/// a placeholder instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Stable ID used for routing, fetching and auditing.
    pub employee_id: EmployeeId,
    pub name: String,
    pub phone: String,
    pub work_email: String,
    pub personal_email: String,
    /// Date of birth; date-only, no timezone semantics.
    pub dob: NaiveDate,
    pub gender: Option<Gender>,
    /// Free-form group label as supplied by the directory service.
    pub blood_group: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub present_address: Option<String>,
    pub permanent_address: Option<String>,
    pub status: EmployeeStatus,
}

impl EmployeeProfile {
    /// Creates a profile with a generated stable ID.
    ///
    /// Contact fields start empty and select-backed fields start
    /// unset; a fresh profile is on the active roster.
    pub fn new(name: impl Into<String>, dob: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), name, dob)
    }

    /// Creates a profile with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(employee_id: EmployeeId, name: impl Into<String>, dob: NaiveDate) -> Self {
        Self {
            employee_id,
            name: name.into(),
            phone: String::new(),
            work_email: String::new(),
            personal_email: String::new(),
            dob,
            gender: None,
            blood_group: None,
            marital_status: None,
            present_address: None,
            permanent_address: None,
            status: EmployeeStatus::Active,
        }
    }

    /// Validates profile data before submission.
    ///
    /// # Errors
    /// - `BlankName` when the name trims to nothing.
    /// - `InvalidEmail` for a non-empty work or personal email that is
    ///   not a plausible address. Empty email fields are allowed; the
    ///   form does not require them.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.name.trim().is_empty() {
            return Err(EmployeeValidationError::BlankName);
        }
        for email in [&self.work_email, &self.personal_email] {
            if !email.is_empty() && !EMAIL_RE.is_match(email) {
                return Err(EmployeeValidationError::InvalidEmail(email.clone()));
            }
        }
        Ok(())
    }
}
