//! # Grid Packing
//!
//! Deterministic, single-pass, greedy left-to-right packing of blocks
//! into 2-column rows.
//!
//! Rules:
//! - A profile block closes the open row and is emitted solo; it never
//!   shares a row.
//! - Every other block costs 1 column (`half-*`) or 2 (`full-*` or
//!   unspecified).
//! - A block that would overflow the open row closes it first; a row that
//!   reaches 2 columns closes immediately; a row left open at the end is
//!   closed as-is.

use biolink_blocks::{Block, BlockKind};
use serde::{Deserialize, Serialize};

/// A derived grouping of 1–2 blocks for 2-column rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub blocks: Vec<Block>,

    /// True only when the row holds a single half-width block with no
    /// sibling; the renderer shows a drop target in the free slot.
    pub has_empty_slot: bool,
}

impl Row {
    fn close(blocks: Vec<Block>, columns: u8) -> Self {
        Self {
            blocks,
            has_empty_slot: columns == 1,
        }
    }

    fn solo(block: Block) -> Self {
        Self {
            blocks: vec![block],
            has_empty_slot: false,
        }
    }
}

/// Pack an ordered block list into rows.
///
/// Pure: same input, same output, no side effects.
pub fn pack_rows(blocks: &[Block]) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut open: Vec<Block> = Vec::new();
    let mut columns = 0u8;

    for block in blocks {
        if block.kind() == BlockKind::Profile {
            if !open.is_empty() {
                rows.push(Row::close(std::mem::take(&mut open), columns));
                columns = 0;
            }
            rows.push(Row::solo(block.clone()));
            continue;
        }

        let cost = block.columns();
        if columns + cost > 2 {
            rows.push(Row::close(std::mem::take(&mut open), columns));
            columns = 0;
        }

        open.push(block.clone());
        columns += cost;

        if columns == 2 {
            rows.push(Row::close(std::mem::take(&mut open), columns));
            columns = 0;
        }
    }

    if !open.is_empty() {
        rows.push(Row::close(open, columns));
    }

    rows
}

/// Total column slots the block list occupies.
pub fn column_count(blocks: &[Block]) -> usize {
    blocks.iter().map(|b| b.columns() as usize).sum()
}
