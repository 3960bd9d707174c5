//! Partition Layout
//!
//! Assigns every node an angular span proportional to its subtree value and
//! a radial band by depth, computes the magnify redistribution when a node
//! is focused, and projects the visible nodes into drawable arc segments.

pub mod arcs;
pub mod magnify;
pub mod partition;
pub mod pick;

pub use arcs::{arc_segments, ArcSegment};
pub use magnify::magnify;
pub use partition::{layout, visible};
pub use pick::pick;

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Geometry knobs for the partition layout. Passed explicitly into
/// `layout`/`magnify` rather than living in ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionConfig {
    /// Chart radius in pixels; the outer boundary of the deepest ring.
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Segments with an angular span at or below this many radians are
    /// dropped from the emitted arc list (the tree itself is untouched).
    #[serde(default = "default_min_angle")]
    pub min_angle: f64,

    /// Fraction of the parent's span the focused node receives on magnify.
    #[serde(default = "default_magnify_fraction")]
    pub magnify_fraction: f64,

    /// Deepest level to emit; `None` emits all levels.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_radius() -> f64 {
    200.0
}

fn default_min_angle() -> f64 {
    1e-4
}

fn default_magnify_fraction() -> f64 {
    0.8
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            min_angle: default_min_angle(),
            magnify_fraction: default_magnify_fraction(),
            max_depth: None,
        }
    }
}

impl PartitionConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(self.radius > 0.0) {
            return Err(ApiError::ConfigError(format!(
                "chart radius must be positive, got {}",
                self.radius
            )));
        }
        if !(self.min_angle >= 0.0) {
            return Err(ApiError::ConfigError(format!(
                "minimum angle must be non-negative, got {}",
                self.min_angle
            )));
        }
        if !(self.magnify_fraction > 0.0 && self.magnify_fraction < 1.0) {
            return Err(ApiError::ConfigError(format!(
                "magnify fraction must be between 0 and 1 exclusive, got {}",
                self.magnify_fraction
            )));
        }
        Ok(())
    }
}
