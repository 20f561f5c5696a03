//! Bank and education collection records.
//!
//! # Responsibility
//! - Define the array-valued records edited row-by-row on the profile
//!   screen.
//! - Provide the blank rows the form appends before the user types.
//!
//! # Invariants
//! - Rows keep their display order across edits.
//! - A blank default row is valid draft state; completeness is checked
//!   by the mutation collaborator, not here.

use crate::model::employee::EmployeeId;
use serde::{Deserialize, Serialize};

/// One bank account row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_ac_name: String,
    pub bank_name: String,
    pub bank_ac_no: String,
    pub bank_branch: String,
    pub bank_district: String,
    pub bank_routing_no: String,
}

/// Bank details record: all accounts kept by one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeBank {
    pub employee_id: EmployeeId,
    /// Display-ordered account rows.
    pub banks: Vec<BankAccount>,
}

impl EmployeeBank {
    /// Creates an empty bank record for `employee_id`.
    pub fn new(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            banks: Vec::new(),
        }
    }
}

/// Grading scheme of one education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    Gpa,
    Cgpa,
    Percentage,
}

/// One education history row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institute: String,
    pub major: String,
    pub passing_year: Option<u16>,
    /// Numeric result in the scale named by `result_type`.
    pub result: Option<f64>,
    pub result_type: Option<ResultType>,
}

/// Education record: all entries kept by one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeEducation {
    pub employee_id: EmployeeId,
    /// Display-ordered education rows.
    pub educations: Vec<EducationEntry>,
}

impl EmployeeEducation {
    /// Creates an empty education record for `employee_id`.
    pub fn new(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            educations: Vec::new(),
        }
    }
}
