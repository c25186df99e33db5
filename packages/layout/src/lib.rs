//! # Biolink Layout
//!
//! Packs an ordered block list into rows of a 2-column grid.
//!
//! The row list is a derived render artifact, never persisted: it carries
//! no identity or lifecycle of its own and is recomputed from the document
//! on every call. Packing is a pure function, so it is safe to run on
//! every render.

pub mod grid;

pub use grid::{column_count, pack_rows, Row};
