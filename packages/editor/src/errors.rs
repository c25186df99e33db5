//! Error types for the editor

use biolink_blocks::{BlockError, BlockKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("{0} blocks require a premium plan")]
    PremiumRequired(BlockKind),

    #[error("Block not found: {0}")]
    NotFound(String),

    #[error("The profile block cannot be removed or moved")]
    ProtectedBlock,

    #[error(transparent)]
    Block(#[from] BlockError),

    #[error("Block creation failed")]
    ConstructionFailed,

    #[error("A page must start with exactly one profile block")]
    MissingProfile,
}

/// Opaque failure from the persistence collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Save failed: {0}")]
pub struct SaveError(pub String);
