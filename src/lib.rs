//! Sunburst: Hierarchy Construction and Arc Partitioning
//!
//! Turns flat (path, count) datasets into a rooted tree and lays the tree out
//! as nested circular arc segments: angular span proportional to subtree
//! value, radial band by depth, with magnify redistribution and breadcrumb
//! data for a rendering layer to consume.

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod layout;
pub mod logging;
pub mod tooling;
pub mod types;
pub mod view;
