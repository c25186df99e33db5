//! # Page Document
//!
//! The canonical block array plus the session-local state that travels
//! with it: a version counter (increments on each accepted mutation) and
//! the id generator.
//!
//! The persisted form is exactly the ordered block list; version and id
//! counter are editing-session state, not payload. A document always
//! contains exactly one profile block, at index 0, for its whole lifetime.

use biolink_blocks::{default_block, Block, BlockKind, IdGenerator};

use crate::errors::EditorError;

#[derive(Debug, Clone)]
pub struct PageDocument {
    blocks: Vec<Block>,
    version: u64,
    ids: IdGenerator,
}

impl PageDocument {
    /// Fresh document for a page handle: a default profile block at
    /// index 0 and nothing else.
    pub fn new(handle: &str) -> Self {
        let mut ids = IdGenerator::new(handle);
        let profile = default_block(BlockKind::Profile, &mut ids);
        Self {
            blocks: vec![profile],
            version: 0,
            ids,
        }
    }

    /// Load a document from its persisted block list.
    ///
    /// Fails with [`EditorError::MissingProfile`] unless the list starts
    /// with exactly one profile block. The id counter resumes past the
    /// highest sequential id in the list, so fresh ids never collide with
    /// loaded ones (assuming the same handle the ids were minted under).
    pub fn from_blocks(handle: &str, blocks: Vec<Block>) -> Result<Self, EditorError> {
        if !has_valid_profile(&blocks) {
            return Err(EditorError::MissingProfile);
        }

        let count = blocks
            .iter()
            .filter_map(|b| b.id.rsplit_once('-').and_then(|(_, n)| n.parse::<u32>().ok()))
            .max()
            .unwrap_or(0);

        Ok(Self {
            blocks,
            version: 0,
            ids: IdGenerator::resuming(handle, count),
        })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Full, independently-owned copy of the block list.
    pub fn snapshot(&self) -> Vec<Block> {
        self.blocks.clone()
    }

    pub fn find_block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// The persisted form: the ordered block list as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.blocks)
    }

    pub(crate) fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    pub(crate) fn insert_at(&mut self, position: usize, block: Block) {
        self.blocks.insert(position, block);
        self.version += 1;
    }

    pub(crate) fn remove_at(&mut self, position: usize) -> Block {
        let block = self.blocks.remove(position);
        self.version += 1;
        block
    }

    pub(crate) fn set_at(&mut self, position: usize, block: Block) {
        self.blocks[position] = block;
        self.version += 1;
    }

    pub(crate) fn move_to(&mut self, from: usize, to: usize) {
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.version += 1;
    }

    /// Swap in a whole block list (bulk replace, undo, redo).
    pub(crate) fn reset_blocks(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
        self.version += 1;
    }
}

/// Exactly one profile block, and it sits at index 0.
pub fn has_valid_profile(blocks: &[Block]) -> bool {
    blocks.first().map_or(false, |b| b.kind() == BlockKind::Profile)
        && blocks
            .iter()
            .filter(|b| b.kind() == BlockKind::Profile)
            .count()
            == 1
}
