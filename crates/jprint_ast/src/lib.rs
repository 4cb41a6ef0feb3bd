//! jprint_ast: Abstract Syntax Tree definitions for Java-like compilation units.
//!
//! This crate defines the owned node types consumed by the printer, the
//! modifier and operator types they carry, a uniform borrowed [`NodeRef`]
//! for generic traversal, and builders for constructing trees in code.

pub mod factory;
pub mod generated;
pub mod node;
pub mod node_ref;
pub mod types;

// Re-export key types
pub use generated::HasNodeData;
pub use node::*;
pub use node_ref::{walk, NodeKey, NodeRef};
pub use types::*;
