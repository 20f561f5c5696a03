//! Record editing state machine and collection-field helpers.
//!
//! # Responsibility
//! - Govern read-only/editing/submitting transitions for one record.
//! - Shape next-draft values for array-valued record fields.
//!
//! # Invariants
//! - One editor owns exactly one mode and one draft at a time.
//! - In-progress edits are never overwritten by background refreshes.

pub mod collection;
pub mod controller;
