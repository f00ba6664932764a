//! The capture → analyze → display state machine for one visitor.
//!
//! `Composing -> Processing -> ResultReady -> Composing` (via reset). Entry
//! into `Processing` requires at least one note and is refused while another
//! analysis is in flight. Each analysis is tagged with a cycle number so that
//! a completion arriving after a reset is dropped instead of applied.

use crate::error::WorkflowError;
use crate::models::{AnalysisResult, NonEmptyNotes, Note, ShareDialog, ShareKind};
use crate::share::build_uri;
use chrono::{DateTime, Duration, Utc};

/// How long the "captured" flash stays visible after a submit.
pub const CAPTURE_FLASH_MS: i64 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Composing,
    Processing { cycle: u64 },
    ResultReady(AnalysisResult),
}

#[derive(Debug, Clone)]
pub struct Workflow {
    notes: Vec<Note>,
    phase: Phase,
    dialog: Option<ShareDialog>,
    captured_at: Option<DateTime<Utc>>,
    cycle: u64,
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            phase: Phase::Composing,
            dialog: None,
            captured_at: None,
            cycle: 0,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn dialog(&self) -> Option<&ShareDialog> {
        self.dialog.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::ResultReady(result) => Some(result),
            _ => None,
        }
    }

    /// The trigger is only offered while composing with something captured.
    pub fn can_analyze(&self) -> bool {
        matches!(self.phase, Phase::Composing) && !self.notes.is_empty()
    }

    // ------------------------------------------------------------------------
    // Note Capture
    // ------------------------------------------------------------------------

    /// Append a trimmed note. Returns `Ok(false)` for whitespace-only input.
    pub fn submit(&mut self, raw: &str, now: DateTime<Utc>) -> Result<bool, WorkflowError> {
        self.require_composing()?;

        match Note::new(raw) {
            Some(note) => {
                self.notes.push(note);
                self.captured_at = Some(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Report the capture flash once, if it is still within its window.
    pub fn take_capture_flash(&mut self, now: DateTime<Utc>) -> bool {
        match self.captured_at.take() {
            Some(at) => now - at <= Duration::milliseconds(CAPTURE_FLASH_MS),
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Analysis
    // ------------------------------------------------------------------------

    /// Enter `Processing`, returning the cycle tag and a snapshot of the notes.
    pub fn begin_analysis(&mut self) -> Result<(u64, NonEmptyNotes), WorkflowError> {
        self.require_composing()?;
        let notes = NonEmptyNotes::new(self.notes.clone()).ok_or(WorkflowError::NoNotes)?;

        self.cycle += 1;
        self.phase = Phase::Processing { cycle: self.cycle };
        self.captured_at = None;
        Ok((self.cycle, notes))
    }

    /// Apply a finished analysis. Stale cycles are ignored and return false.
    pub fn complete_analysis(&mut self, cycle: u64, result: AnalysisResult) -> bool {
        match self.phase {
            Phase::Processing { cycle: current } if current == cycle => {
                self.phase = Phase::ResultReady(result);
                true
            }
            _ => false,
        }
    }

    /// Back to an empty `Composing`. Any in-flight analysis becomes stale.
    pub fn reset(&mut self) {
        self.notes.clear();
        self.phase = Phase::Composing;
        self.dialog = None;
        self.captured_at = None;
        self.cycle += 1;
    }

    // ------------------------------------------------------------------------
    // Share Dialog
    // ------------------------------------------------------------------------

    pub fn open_share(&mut self, kind: ShareKind) -> Result<(), WorkflowError> {
        if self.result().is_none() {
            return Err(WorkflowError::NoResult);
        }
        self.dialog = Some(ShareDialog {
            kind,
            contact: String::new(),
        });
        Ok(())
    }

    /// Build the handoff URI for `contact`. The dialog closes on success and
    /// stays open, holding the raw contact, when it is blank.
    pub fn confirm_share(&mut self, contact: &str) -> Result<String, WorkflowError> {
        let result = match &self.phase {
            Phase::ResultReady(result) => result,
            _ => return Err(WorkflowError::NoResult),
        };
        let dialog = self.dialog.as_mut().ok_or(WorkflowError::DialogClosed)?;
        dialog.contact = contact.to_string();

        let uri = build_uri(dialog.kind, contact, result)?;
        self.dialog = None;
        Ok(uri)
    }

    pub fn cancel_share(&mut self) {
        self.dialog = None;
    }

    fn require_composing(&self) -> Result<(), WorkflowError> {
        match self.phase {
            Phase::Composing => Ok(()),
            Phase::Processing { .. } => Err(WorkflowError::AlreadyProcessing),
            Phase::ResultReady(_) => Err(WorkflowError::ResultShown),
        }
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}
