//! Record source and mutation collaborator contracts.
//!
//! # Responsibility
//! - Describe the read side (snapshots) and the write side (submit)
//!   of the remote record service the editor is wired to.
//! - Keep error semantics stable for presentation callers.
//!
//! # Invariants
//! - A loading snapshot never exposes a committed value.
//! - `submit` returns the authoritative stored record, which may
//!   differ from the submitted draft.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// State of one record as last seen from the record source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSnapshot<T> {
    /// Last fetched value; absent until the first fetch completes.
    pub data: Option<T>,
    /// True while a fetch is in flight and `data` is not yet usable.
    pub is_loading: bool,
}

impl<T> RecordSnapshot<T> {
    /// Snapshot for a fetch that has not completed yet.
    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
        }
    }

    /// Snapshot carrying a fetched committed value.
    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
        }
    }

    /// The committed value, if the source has produced one.
    ///
    /// Returns `None` while loading even when stale `data` is present,
    /// so editors never seed a draft from an unsettled fetch.
    pub fn committed(&self) -> Option<&T> {
        if self.is_loading {
            return None;
        }
        self.data.as_ref()
    }
}

/// Rejection payload returned by the mutation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationError {
    /// Human-readable reason, surfaced to the presentation layer.
    pub message: String,
}

impl MutationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "record mutation rejected: {}", self.message)
    }
}

impl Error for MutationError {}

/// Mutation collaborator contract.
///
/// Implementations persist a draft and return the authoritative stored
/// value; the service side may normalize fields the draft carried
/// verbatim, so callers must adopt the returned record instead of the
/// draft they submitted.
pub trait RecordMutator<T> {
    fn submit(&mut self, draft: &T) -> Result<T, MutationError>;
}
