//! # Collaborator Contracts
//!
//! The editing core talks to the rest of the application through three
//! narrow traits. None of them call back into the core; the feedback sink
//! is purely observational and the restore affordance it surfaces is wired
//! back through [`EditSession::restore_deleted`](crate::EditSession::restore_deleted).

use biolink_blocks::Block;

use crate::errors::SaveError;

/// Supplies the session's entitlement, consulted only by the insert path.
pub trait Entitlement {
    fn is_premium(&self) -> bool;
}

impl Entitlement for bool {
    fn is_premium(&self) -> bool {
        *self
    }
}

/// What happened, for transient user-facing messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// A new action was recorded; the message carries an inline undo.
    Recorded,
    Undone,
    Redone,
    /// A block was deleted; the message carries an inline restore tied to
    /// `block_id`.
    Deleted,
    Restored,
}

/// One transient, dismissible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEvent {
    pub label: String,
    pub kind: FeedbackKind,
    /// Set for deletion/restore events so the consumer can wire the inline
    /// restore affordance to the right block.
    pub block_id: Option<String>,
}

impl FeedbackEvent {
    pub fn recorded(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FeedbackKind::Recorded,
            block_id: None,
        }
    }

    pub fn undone(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FeedbackKind::Undone,
            block_id: None,
        }
    }

    pub fn redone(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FeedbackKind::Redone,
            block_id: None,
        }
    }

    pub fn deleted(label: impl Into<String>, block_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FeedbackKind::Deleted,
            block_id: Some(block_id.into()),
        }
    }

    pub fn restored(label: impl Into<String>, block_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FeedbackKind::Restored,
            block_id: Some(block_id.into()),
        }
    }
}

/// Observational sink for transient notifications.
pub trait Feedback {
    fn notify(&mut self, event: FeedbackEvent);
}

/// Silent sink for hosts that surface nothing.
impl Feedback for () {
    fn notify(&mut self, _event: FeedbackEvent) {}
}

/// Collecting sink, handy in tests and for queued toast UIs.
impl Feedback for Vec<FeedbackEvent> {
    fn notify(&mut self, event: FeedbackEvent) {
        self.push(event);
    }
}

/// Saves the current block list. Retry and debounce policy belong to the
/// caller, not the core.
pub trait Persistence {
    fn save(&mut self, blocks: &[Block]) -> Result<(), SaveError>;
}
