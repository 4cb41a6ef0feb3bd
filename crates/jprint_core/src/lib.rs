//! jprint_core: Core utilities shared by the jprint crates.
//!
//! Provides source position types used to order sibling nodes and
//! orphan comments.

pub mod text;

// Re-export commonly used types
pub use text::{TextPos, TextRange};
