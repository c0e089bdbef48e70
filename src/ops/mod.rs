//! Operations module - The two tree-scan commands
//!
//! Provides:
//! - count: line/file/image tallies over a filtered walk
//! - gather: concatenation of cleaned target-extension sources
//! - clean: the comment-and-import stripper used by gather

pub mod clean;
pub mod count;
pub mod gather;
