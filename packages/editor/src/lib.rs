//! # Biolink Editor
//!
//! Core editing engine for a link-in-bio page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: typed content units + factory       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: document lifecycle + mutations      │
//! │  - Single mutation gateway (EditSession)    │
//! │  - Tier gating + protected-block rules      │
//! │  - Bounded snapshot history (undo/redo)     │
//! │  - TTL deletion recovery buffer             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ layout: block list → 2-column rows          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The block array is source of truth**: rows are a derived view
//! 2. **One mutator**: every mutation flows through [`EditSession`]
//! 3. **Snapshots own their data**: history can never be corrupted by
//!    later edits to the live document
//! 4. **Errors are values**: a rejected mutation is the worst case, never
//!    a corrupted document or a dangling history index
//!
//! ## Usage
//!
//! ```rust
//! use biolink_editor::{BlockPatch, EditSession, PageDocument};
//! use biolink_blocks::BlockContent;
//!
//! let mut session = EditSession::new(PageDocument::new("@maya"), false, ());
//!
//! let id = session.insert_block("link", 1)?;
//! session.update_block(&id, BlockPatch::content(BlockContent::Link {
//!     title: "My shop".to_string(),
//!     url: "https://shop.example".to_string(),
//!     thumbnail_url: None,
//! }))?;
//!
//! let rows = session.rows();
//! assert_eq!(rows.len(), 2);
//!
//! session.undo();
//! # Ok::<(), biolink_editor::EditorError>(())
//! ```

mod collaborators;
mod document;
mod errors;
mod history;
mod recovery;
mod session;

pub use collaborators::{Entitlement, Feedback, FeedbackEvent, FeedbackKind, Persistence};
pub use document::{has_valid_profile, PageDocument};
pub use errors::{EditorError, SaveError};
pub use history::{ActionKind, History, HistoryAction};
pub use recovery::{DeletedBlockInfo, RecoveryBuffer};
pub use session::{BlockPatch, EditSession, SessionConfig};

// Re-export common types for convenience
pub use biolink_blocks::{Block, BlockContent, BlockKind, BlockStyle, SizePreset, Tier};
pub use biolink_layout::Row;
