//! # Edit Session
//!
//! The only mutation gateway for a page document. Every insert, update,
//! delete, move, bulk replace, and restore flows through here; the
//! session validates first, mutates the canonical block array, records
//! the transition in bounded history, and emits feedback. Nothing else in
//! the crate mutates a document.
//!
//! Mutations are synchronous and run to completion. The live block array
//! is owned exclusively by this session: single owner, synchronous
//! access, no locking.

use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use biolink_blocks::{
    default_block, Block, BlockContent, BlockKind, BlockStyle, SizePreset, Tier,
};
use biolink_layout::{pack_rows, Row};

use crate::collaborators::{Entitlement, Feedback, FeedbackEvent, Persistence};
use crate::document::{has_valid_profile, PageDocument};
use crate::errors::{EditorError, SaveError};
use crate::history::{ActionKind, History};
use crate::recovery::RecoveryBuffer;

/// The session's only tunables, caller-supplied at construction.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Undo window size.
    pub max_history: usize,
    /// How long a deleted block stays restorable.
    pub undo_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_history: 7,
            undo_timeout: Duration::from_secs(6),
        }
    }
}

/// Partial update for one block. Present fields replace the block's;
/// absent fields leave it untouched. A content payload is replaced
/// atomically, not field-merged, and must keep the block's kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BlockContent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizePreset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
}

impl BlockPatch {
    pub fn content(content: BlockContent) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    pub fn size(size: SizePreset) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn style(style: BlockStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: SizePreset) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.style = Some(style);
        self
    }

    fn is_empty(&self) -> bool {
        self.content.is_none() && self.size.is_none() && self.style.is_none()
    }
}

/// One editing session over one page document.
pub struct EditSession<E: Entitlement, F: Feedback> {
    document: PageDocument,
    history: History,
    recovery: RecoveryBuffer,
    entitlement: E,
    feedback: F,
}

impl<E: Entitlement, F: Feedback> EditSession<E, F> {
    pub fn new(document: PageDocument, entitlement: E, feedback: F) -> Self {
        Self::with_config(document, SessionConfig::default(), entitlement, feedback)
    }

    pub fn with_config(
        document: PageDocument,
        config: SessionConfig,
        entitlement: E,
        feedback: F,
    ) -> Self {
        Self {
            document,
            history: History::new(config.max_history),
            recovery: RecoveryBuffer::new(config.undo_timeout),
            entitlement,
            feedback,
        }
    }

    /// Insert a default block of `kind_name` at `position`.
    ///
    /// Position is clamped so nothing ever lands before the profile
    /// block. Premium kinds require a premium entitlement; on any failure
    /// the document is untouched.
    pub fn insert_block(
        &mut self,
        kind_name: &str,
        position: usize,
    ) -> Result<String, EditorError> {
        self.recovery.sweep(Instant::now());

        let kind = BlockKind::from_str(kind_name)?;
        if kind.tier() == Tier::Premium && !self.entitlement.is_premium() {
            tracing::debug!("insert of premium {} block rejected", kind);
            return Err(EditorError::PremiumRequired(kind));
        }

        let previous = self.document.snapshot();
        let block = default_block(kind, self.document.ids_mut());
        let block_id = block.id.clone();
        let position = position.clamp(1, self.document.blocks().len());
        self.document.insert_at(position, block);

        self.record(
            ActionKind::Add,
            previous,
            format!("Added {} block", kind),
            Some(block_id.clone()),
            Some(kind),
        );
        Ok(block_id)
    }

    /// Apply a partial update to the block with `id`. Order and all other
    /// blocks are untouched.
    pub fn update_block(&mut self, id: &str, patch: BlockPatch) -> Result<(), EditorError> {
        self.recovery.sweep(Instant::now());

        let position = self
            .document
            .position_of(id)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?;
        let existing = &self.document.blocks()[position];
        let kind = existing.kind();

        // A kind-changing payload cannot produce a valid block of this id
        if let Some(content) = &patch.content {
            if content.kind() != kind {
                tracing::warn!(
                    "update of {} block {} with {} payload rejected",
                    kind,
                    id,
                    content.kind()
                );
                return Err(EditorError::ConstructionFailed);
            }
        }

        if patch.is_empty() {
            return Ok(());
        }

        let previous = self.document.snapshot();
        let mut updated = existing.clone();
        if let Some(content) = patch.content {
            updated.content = content;
        }
        if let Some(size) = patch.size {
            updated.size = Some(size);
        }
        if let Some(style) = patch.style {
            updated.style = Some(style);
        }
        self.document.set_at(position, updated);

        self.record(
            ActionKind::Update,
            previous,
            format!("Updated {} block", kind),
            Some(id.to_string()),
            Some(kind),
        );
        Ok(())
    }

    /// Delete the block with `id`, stashing it in the recovery buffer.
    ///
    /// A missing id and the profile block are both quiet no-ops: the
    /// former is a stale reference, the latter a guarded invariant the
    /// caller need not distinguish from success.
    pub fn delete_block(&mut self, id: &str) -> Result<(), EditorError> {
        let now = Instant::now();
        self.recovery.sweep(now);

        let Some(position) = self.document.position_of(id) else {
            tracing::debug!("delete of unknown block {} ignored", id);
            return Ok(());
        };
        if self.document.blocks()[position].kind() == BlockKind::Profile {
            tracing::debug!("delete of profile block ignored");
            return Ok(());
        }

        let previous = self.document.snapshot();
        let block = self.document.remove_at(position);
        let kind = block.kind();
        let label = format!("Deleted {} block", kind);

        self.recovery.stash(block, position, now);
        self.history.record(
            ActionKind::Delete,
            previous,
            self.document.snapshot(),
            label.as_str(),
            Some(id.to_string()),
            Some(kind),
        );
        tracing::debug!("{} (v{})", label, self.document.version());
        self.feedback.notify(FeedbackEvent::deleted(label, id));
        Ok(())
    }

    /// Move the block with `id` so it ends up at `to_index`.
    ///
    /// The destination is clamped below the profile block; moving the
    /// profile block itself is rejected.
    pub fn move_block(&mut self, id: &str, to_index: usize) -> Result<(), EditorError> {
        self.recovery.sweep(Instant::now());

        let from = self
            .document
            .position_of(id)
            .ok_or_else(|| EditorError::NotFound(id.to_string()))?;
        let kind = self.document.blocks()[from].kind();
        if kind == BlockKind::Profile {
            return Err(EditorError::ProtectedBlock);
        }

        let to = to_index.clamp(1, self.document.blocks().len() - 1);
        if to == from {
            return Ok(());
        }

        let previous = self.document.snapshot();
        self.document.move_to(from, to);

        self.record(
            ActionKind::Reorder,
            previous,
            format!("Moved {} block", kind),
            Some(id.to_string()),
            Some(kind),
        );
        Ok(())
    }

    /// Replace the whole block list (template application and similar
    /// wholesale edits). The new list must honor the profile invariant.
    pub fn replace_blocks(&mut self, blocks: Vec<Block>) -> Result<(), EditorError> {
        self.recovery.sweep(Instant::now());

        if !has_valid_profile(&blocks) {
            return Err(EditorError::MissingProfile);
        }

        let previous = self.document.snapshot();
        self.document.reset_blocks(blocks);

        self.record(
            ActionKind::Bulk,
            previous,
            "Replaced page blocks".to_string(),
            None,
            None,
        );
        Ok(())
    }

    /// Reinsert a recently deleted block at its original position.
    ///
    /// Consults only the recovery buffer; after the TTL this is a no-op
    /// returning `false`. The reinsertion is a fresh insert and does not
    /// cancel the delete's history entry.
    pub fn restore_deleted(&mut self, id: &str) -> bool {
        let now = Instant::now();
        self.recovery.sweep(now);

        let Some(info) = self.recovery.take(id, now) else {
            return false;
        };

        let previous = self.document.snapshot();
        let kind = info.block.kind();
        let position = info.position.clamp(1, self.document.blocks().len());
        self.document.insert_at(position, info.block);

        let label = format!("Restored {} block", kind);
        self.history.record(
            ActionKind::Add,
            previous,
            self.document.snapshot(),
            label.as_str(),
            Some(id.to_string()),
            Some(kind),
        );
        tracing::debug!("{} (v{})", label, self.document.version());
        self.feedback.notify(FeedbackEvent::restored(label, id));
        true
    }

    /// Whether an inline restore is still offered for `id`.
    pub fn restore_pending(&self, id: &str) -> bool {
        self.recovery.pending(id, Instant::now())
    }

    /// Step back one recorded action. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.undo() else {
            return false;
        };
        let blocks = action.previous.clone();
        let label = action.label.clone();

        self.document.reset_blocks(blocks);
        tracing::debug!("undid '{}' (v{})", label, self.document.version());
        self.feedback.notify(FeedbackEvent::undone(label));
        true
    }

    /// Reapply the action most recently undone. Returns whether anything
    /// changed.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.history.redo() else {
            return false;
        };
        let blocks = action.next.clone();
        let label = action.label.clone();

        self.document.reset_blocks(blocks);
        tracing::debug!("redid '{}' (v{})", label, self.document.version());
        self.feedback.notify(FeedbackEvent::redone(label));
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Pack the current block list into 2-column rows for rendering.
    pub fn rows(&self) -> Vec<Row> {
        pack_rows(self.document.blocks())
    }

    /// Hand the current block list to a persistence collaborator.
    pub fn save_with<P: Persistence + ?Sized>(&self, store: &mut P) -> Result<(), SaveError> {
        store.save(self.document.blocks())
    }

    fn record(
        &mut self,
        kind: ActionKind,
        previous: Vec<Block>,
        label: String,
        block_id: Option<String>,
        block_kind: Option<BlockKind>,
    ) {
        let next = self.document.snapshot();
        tracing::debug!("{} (v{})", label, self.document.version());
        self.history
            .record(kind, previous, next, label.as_str(), block_id, block_kind);
        self.feedback.notify(FeedbackEvent::recorded(label));
    }
}
