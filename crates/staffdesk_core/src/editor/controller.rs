//! Editable record controller.
//!
//! # Responsibility
//! - Hold the draft copy of one displayed record and its edit mode.
//! - Gate draft replacement, submission and refresh adoption so that
//!   in-progress edits survive background refetches and a stale draft
//!   can never be re-submitted after a successful save.
//!
//! # Invariants
//! - Mode is exactly one of read-only / editing / submitting.
//! - While editing or submitting, incoming snapshots are ignored; a
//!   newer committed value is only adopted on a read-only re-seed or
//!   through a successful submit.
//! - After a successful submit the collaborator's returned value is
//!   both the committed value and the draft before control returns to
//!   the caller.

use crate::gateway::record_gateway::{MutationError, RecordMutator, RecordSnapshot};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EditorResult<T> = Result<T, EditorError>;

/// Edit mode of one record editor.
///
/// A closed variant rather than boolean flags, so a record cannot be
/// simultaneously read-only and mid-submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Displaying the committed value; draft mirrors it.
    ReadOnly,
    /// Draft diverges from the committed value under user input.
    Editing,
    /// Draft handed to the mutation collaborator; awaiting its result.
    Submitting,
}

impl Display for EditMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::ReadOnly => "read_only",
            Self::Editing => "editing",
            Self::Submitting => "submitting",
        };
        write!(f, "{token}")
    }
}

/// Errors from editor state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// No committed record has been seeded yet (source still loading).
    NoCommittedRecord,
    /// Draft replacement attempted outside editing mode.
    NotEditing(EditMode),
    /// Submit started outside editing mode; covers a second submit
    /// racing an in-flight one.
    SubmitNotAllowed(EditMode),
    /// Submit resolution without an in-flight submit.
    NotSubmitting(EditMode),
    /// The mutation collaborator rejected the draft.
    SubmitFailed(MutationError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCommittedRecord => write!(f, "no committed record available to edit"),
            Self::NotEditing(mode) => write!(f, "draft change rejected in {mode} mode"),
            Self::SubmitNotAllowed(mode) => write!(f, "submit rejected in {mode} mode"),
            Self::NotSubmitting(mode) => write!(f, "no submit in flight in {mode} mode"),
            Self::SubmitFailed(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SubmitFailed(err) => Some(err),
            _ => None,
        }
    }
}

/// View/edit controller for one displayed record.
///
/// Generic over the record type; the editor never interprets record
/// fields, it only replaces the draft wholesale with values supplied
/// by the caller.
#[derive(Debug, Clone)]
pub struct RecordEditor<T: Clone> {
    mode: EditMode,
    committed: Option<T>,
    draft: Option<T>,
}

impl<T: Clone> Default for RecordEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> RecordEditor<T> {
    /// Creates an editor with no committed value, in read-only mode.
    pub fn new() -> Self {
        Self {
            mode: EditMode::ReadOnly,
            committed: None,
            draft: None,
        }
    }

    /// Creates an editor seeded from `snapshot` when it carries data.
    pub fn from_snapshot(snapshot: &RecordSnapshot<T>) -> Self {
        let mut editor = Self::new();
        editor.absorb_snapshot(snapshot);
        editor
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_read_only(&self) -> bool {
        self.mode == EditMode::ReadOnly
    }

    /// Last value known to be persisted by the record service.
    pub fn committed(&self) -> Option<&T> {
        self.committed.as_ref()
    }

    /// Value the presentation layer renders; diverges from the
    /// committed value only while editing or submitting.
    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    /// Adopts a freshly fetched snapshot under the refresh policy.
    ///
    /// In read-only mode a snapshot with data re-seeds both the
    /// committed value and the draft. While editing or submitting the
    /// snapshot is ignored wholesale: a background refetch must not
    /// overwrite in-progress edits. Loading snapshots never seed.
    pub fn absorb_snapshot(&mut self, snapshot: &RecordSnapshot<T>) {
        if self.mode != EditMode::ReadOnly {
            debug!(
                "event=refresh_ignored module=editor status=ok mode={}",
                self.mode
            );
            return;
        }
        if let Some(data) = snapshot.committed() {
            self.committed = Some(data.clone());
            self.draft = Some(data.clone());
            debug!("event=draft_reseed module=editor status=ok");
        }
    }

    /// Switches from read-only to editing.
    ///
    /// Idempotent: already editing or submitting is a no-op, so a
    /// repeated edit gesture cannot disturb state. Rejected when no
    /// committed value has been seeded yet.
    pub fn enter_edit(&mut self) -> EditorResult<()> {
        match self.mode {
            EditMode::Editing | EditMode::Submitting => Ok(()),
            EditMode::ReadOnly => {
                let committed = match self.committed.as_ref() {
                    Some(value) => value,
                    None => return Err(EditorError::NoCommittedRecord),
                };
                if self.draft.is_none() {
                    self.draft = Some(committed.clone());
                }
                self.mode = EditMode::Editing;
                debug!("event=edit_enter module=editor status=ok");
                Ok(())
            }
        }
    }

    /// Replaces the draft wholesale with `next`.
    ///
    /// Valid only while editing; rejected elsewhere without touching
    /// mode, committed value or draft.
    pub fn change(&mut self, next: T) -> EditorResult<()> {
        if self.mode != EditMode::Editing {
            return Err(EditorError::NotEditing(self.mode));
        }
        self.draft = Some(next);
        Ok(())
    }

    /// Starts a submit: editing -> submitting, handing back the draft
    /// for the mutation collaborator.
    ///
    /// While the returned draft is in flight the editor rejects
    /// `change` and further submits; [`RecordEditor::resolve_submit`]
    /// is the only way out of submitting mode.
    pub fn begin_submit(&mut self) -> EditorResult<T> {
        if self.mode != EditMode::Editing {
            return Err(EditorError::SubmitNotAllowed(self.mode));
        }
        let draft = match self.draft.clone() {
            Some(value) => value,
            None => return Err(EditorError::NoCommittedRecord),
        };
        self.mode = EditMode::Submitting;
        info!("event=submit_begin module=editor status=ok");
        Ok(draft)
    }

    /// Finishes a submit with the collaborator's outcome.
    ///
    /// Success adopts the returned authoritative value as both the
    /// committed value and the draft and returns to read-only, so a
    /// later edit can never start from a value older than what was
    /// just persisted. Failure returns to editing with the draft
    /// untouched and surfaces the rejection to the caller.
    pub fn resolve_submit(&mut self, outcome: Result<T, MutationError>) -> EditorResult<()> {
        if self.mode != EditMode::Submitting {
            return Err(EditorError::NotSubmitting(self.mode));
        }
        match outcome {
            Ok(stored) => {
                self.committed = Some(stored.clone());
                self.draft = Some(stored);
                self.mode = EditMode::ReadOnly;
                info!("event=submit_ok module=editor status=ok");
                Ok(())
            }
            Err(err) => {
                self.mode = EditMode::Editing;
                warn!(
                    "event=submit_failed module=editor status=error message={}",
                    err.message
                );
                Err(EditorError::SubmitFailed(err))
            }
        }
    }

    /// Drives a full submit round against `mutator` for synchronous
    /// callers: begin, collaborator call, resolve.
    pub fn submit_with<M: RecordMutator<T>>(&mut self, mutator: &mut M) -> EditorResult<()> {
        let draft = self.begin_submit()?;
        let outcome = mutator.submit(&draft);
        self.resolve_submit(outcome)
    }
}
