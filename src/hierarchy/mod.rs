//! Hierarchy Construction
//!
//! Builds the rooted tree that the partition layout operates on, either from
//! flat (path, size) rows or from pre-shaped hierarchical data. Nodes live in
//! an arena indexed by [`NodeId`]; parent links are indices, never owning
//! references.

pub mod builder;
pub mod dataset;
pub mod node;

pub use builder::HierarchyBuilder;
pub use dataset::NodeSpec;
pub use node::{Node, Tree};
