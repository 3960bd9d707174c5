//! Core types for the sunburst partition layout.

/// NodeId: index of a node in the tree arena. The root is always index 0.
pub type NodeId = usize;

/// Full angular extent of the chart, in radians.
pub const FULL_CIRCLE: f64 = std::f64::consts::TAU;
