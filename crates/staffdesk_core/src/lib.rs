//! Core domain logic for StaffDesk employee-record administration.
//! This crate is the single source of truth for business invariants.

pub mod editor;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod tenure;

pub use editor::collection::{
    append, remove_at, update_at, CollectionEditError, CollectionEditResult,
};
pub use editor::controller::{EditMode, EditorError, EditorResult, RecordEditor};
pub use gateway::identity::IdentityContext;
pub use gateway::record_gateway::{MutationError, RecordMutator, RecordSnapshot};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::collections::{
    BankAccount, EducationEntry, EmployeeBank, EmployeeEducation, ResultType,
};
pub use model::employee::{
    EmployeeId, EmployeeProfile, EmployeeStatus, EmployeeValidationError, Gender, MaritalStatus,
};
pub use model::job::{EmployeeJob, JobType, PreviousJob, Promotion};
pub use tenure::duration::CalendarDuration;
pub use tenure::timeline::{build_timeline, RoleEvent, TenureSegment};
pub use tenure::format_display_date;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
