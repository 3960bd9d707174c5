//! Polar hit-testing against the current layout.

use crate::hierarchy::Tree;
use crate::layout::PartitionConfig;
use crate::types::{NodeId, FULL_CIRCLE};

/// Find the node under a point given in chart-centered cartesian
/// coordinates (y axis pointing down, as on screens).
///
/// The point is converted to polar form with angle 0 at twelve o'clock
/// increasing clockwise, matching the layout's angle space. The ring index
/// follows from the radius (ring boundaries are evenly spaced), then the
/// angular walk descends one level at a time. Points inside the root's own
/// ring resolve to the root, so a center click can be mapped to "reset".
/// Points outside the chart, over an undrawn sliver, or over a gap left by
/// zero-value branches yield `None`.
pub fn pick(tree: &Tree, config: &PartitionConfig, x: f64, y: f64) -> Option<NodeId> {
    let r = x.hypot(y);
    if r >= config.radius {
        return None;
    }
    let mut angle = x.atan2(-y);
    if angle < 0.0 {
        angle += FULL_CIRCLE;
    }

    let levels = tree.max_depth() + 1;
    let ring = ((r / config.radius) * levels as f64) as usize;
    let ring = ring.min(levels - 1);
    if let Some(max) = config.max_depth {
        if ring > max {
            return None;
        }
    }
    if ring == 0 {
        return Some(Tree::ROOT);
    }

    let mut current = Tree::ROOT;
    for _ in 0..ring {
        let child = tree.node(current).children.iter().copied().find(|&c| {
            let n = tree.node(c);
            n.angle_span > 0.0
                && angle >= n.angle_start
                && angle < n.angle_start + n.angle_span
        })?;
        current = child;
    }
    if tree.node(current).angle_span > config.min_angle {
        Some(current)
    } else {
        None
    }
}
