//! # Bounded History
//!
//! Linear undo/redo over full document snapshots.
//!
//! ## Design
//!
//! - Every accepted mutation is recorded as a snapshot pair: the block
//!   list before and after. Both are deep, independently-owned copies, so
//!   later mutation of the live document can never corrupt a recorded
//!   state.
//! - History is a fixed-size window over `(actions, current)`. Recording
//!   truncates any stale redo branch (strictly linear, no branching) and
//!   silently evicts the oldest action once the window is full. States
//!   older than the window become permanently unreachable by undo; that
//!   is what bounds memory.
//! - `current` points at the last applied action; `-1` means no history.
//!   It living outside `[-1, len - 1]` is a programming error, asserted,
//!   never a recoverable condition.

use std::time::{SystemTime, UNIX_EPOCH};

use biolink_blocks::{Block, BlockKind};

/// What a recorded action did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Add,
    Delete,
    Update,
    Reorder,
    Bulk,
}

/// One recorded transition. Immutable once created.
#[derive(Debug, Clone)]
pub struct HistoryAction {
    pub id: u64,
    pub kind: ActionKind,
    pub label: String,
    pub timestamp_ms: u64,
    /// Document before the action. Owned copy, no sharing with the live list.
    pub previous: Vec<Block>,
    /// Document after the action. Owned copy, no sharing with the live list.
    pub next: Vec<Block>,
    pub block_id: Option<String>,
    pub block_kind: Option<BlockKind>,
}

/// Fixed-capacity, linear undo/redo log.
#[derive(Debug)]
pub struct History {
    actions: Vec<HistoryAction>,
    /// Index of the last applied action; -1 = nothing applied.
    current: isize,
    max_size: usize,
    next_id: u64,
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            actions: Vec::with_capacity(max_size),
            current: -1,
            max_size: max_size.max(1),
            next_id: 0,
        }
    }

    /// Record an accepted mutation.
    ///
    /// Truncates the stale redo branch, appends, caps the window to the
    /// last `max_size` entries, and advances `current` to the new last
    /// position.
    pub fn record(
        &mut self,
        kind: ActionKind,
        previous: Vec<Block>,
        next: Vec<Block>,
        label: impl Into<String>,
        block_id: Option<String>,
        block_kind: Option<BlockKind>,
    ) -> &HistoryAction {
        self.actions.truncate((self.current + 1) as usize);

        let label = label.into();
        self.actions.push(HistoryAction {
            id: self.next_id,
            kind,
            label,
            timestamp_ms: current_timestamp_ms(),
            previous,
            next,
            block_id,
            block_kind,
        });
        self.next_id += 1;

        if self.actions.len() > self.max_size {
            let overflow = self.actions.len() - self.max_size;
            self.actions.drain(..overflow);
            tracing::debug!("evicted {} oldest history action(s)", overflow);
        }

        self.current = self.actions.len() as isize - 1;
        self.assert_invariant();

        &self.actions[self.current as usize]
    }

    /// Retreat one step. Returns the action whose `previous` snapshot is
    /// now the live document, or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<&HistoryAction> {
        if !self.can_undo() {
            return None;
        }

        let action = &self.actions[self.current as usize];
        self.current -= 1;
        self.assert_invariant();
        Some(action)
    }

    /// Advance one step. Returns the action whose `next` snapshot is now
    /// the live document, or `None` if there is nothing to redo.
    pub fn redo(&mut self) -> Option<&HistoryAction> {
        if !self.can_redo() {
            return None;
        }

        self.current += 1;
        self.assert_invariant();
        Some(&self.actions[self.current as usize])
    }

    pub fn can_undo(&self) -> bool {
        self.current >= 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.actions.len() as isize
    }

    /// Label of the action the next `undo` would revert.
    pub fn undo_label(&self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        Some(&self.actions[self.current as usize].label)
    }

    /// Label of the action the next `redo` would reapply.
    pub fn redo_label(&self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        Some(&self.actions[(self.current + 1) as usize].label)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn assert_invariant(&self) {
        debug_assert!(
            self.current >= -1 && self.current < self.actions.len() as isize,
            "history index {} out of range for {} action(s)",
            self.current,
            self.actions.len(),
        );
    }
}

pub(crate) fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
