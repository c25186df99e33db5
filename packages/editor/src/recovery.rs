//! # Deletion Recovery Buffer
//!
//! A short-lived restore channel for just-deleted blocks, independent of
//! the main history. Deleting a block stashes it here with its original
//! position; an inline "restore" puts it back as a fresh insert until the
//! TTL runs out.
//!
//! There is no timer thread: the session sweeps the buffer at the head of
//! every operation and `take` re-checks the deadline, which preserves the
//! observable contract of the source's deferred eviction callback.
//! Entries are matched by block id and replaced wholesale on re-stash, so
//! a stale deadline can never evict the newer entry for a re-deleted
//! block.

use std::time::{Duration, Instant};

use biolink_blocks::Block;

/// One evicted block plus enough to reinsert it where it was.
#[derive(Debug, Clone)]
pub struct DeletedBlockInfo {
    pub block: Block,
    /// Index the block occupied before removal.
    pub position: usize,
    pub deleted_at: Instant,
}

impl DeletedBlockInfo {
    fn expired(&self, ttl: Duration, now: Instant) -> bool {
        now.duration_since(self.deleted_at) >= ttl
    }
}

/// TTL-bounded buffer of recently deleted blocks, at most one entry per
/// block id.
#[derive(Debug)]
pub struct RecoveryBuffer {
    entries: Vec<DeletedBlockInfo>,
    ttl: Duration,
}

impl RecoveryBuffer {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Stash a just-deleted block. A re-deletion of the same id replaces
    /// the old entry, deadline included.
    pub fn stash(&mut self, block: Block, position: usize, now: Instant) {
        self.entries.retain(|e| e.block.id != block.id);
        self.entries.push(DeletedBlockInfo {
            block,
            position,
            deleted_at: now,
        });
    }

    /// Remove and return the entry for `block_id` if it is still alive.
    /// An expired entry is dropped, not returned.
    pub fn take(&mut self, block_id: &str, now: Instant) -> Option<DeletedBlockInfo> {
        let index = self.entries.iter().position(|e| e.block.id == block_id)?;
        let entry = self.entries.remove(index);

        if entry.expired(self.ttl, now) {
            tracing::debug!("recovery entry for {} already expired", block_id);
            return None;
        }
        Some(entry)
    }

    /// Evict every expired entry. Returns how many were dropped.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|e| !e.expired(ttl, now));

        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!("swept {} expired recovery entries", evicted);
        }
        evicted
    }

    /// Whether an inline restore is still offered for `block_id`.
    pub fn pending(&self, block_id: &str, now: Instant) -> bool {
        self.entries
            .iter()
            .any(|e| e.block.id == block_id && !e.expired(self.ttl, now))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
