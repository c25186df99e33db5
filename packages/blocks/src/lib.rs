//! # Biolink Blocks
//!
//! The block document model for a link-in-bio page.
//!
//! A page is an ordered list of [`Block`] values. Each block carries a
//! stable id, a closed tagged-union content payload ([`BlockContent`], one
//! variant per supported kind), and optional presentation metadata
//! ([`SizePreset`], [`BlockStyle`]). The serialized form is an array of
//! tagged-union values keyed by `type`, which is exactly the layout the
//! persistence collaborator stores.
//!
//! Higher layers never probe content fields by name: the union is closed,
//! so layout and editing logic get exhaustiveness checking instead of
//! runtime field probing.

pub mod block;
pub mod error;
pub mod factory;
pub mod id_generator;
pub mod tier;

pub use block::{
    Alignment, Block, BlockContent, BlockKind, BlockStyle, FaqItem, FormField, SizePreset,
    SocialLink,
};
pub use error::BlockError;
pub use factory::{create_block, default_block, default_content};
pub use id_generator::{page_seed, IdGenerator};
pub use tier::Tier;
