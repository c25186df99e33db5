//! Error types for the block model

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlockError {
    #[error("Unknown block type: {0}")]
    UnknownKind(String),
}
