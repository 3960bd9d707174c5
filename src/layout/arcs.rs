//! Drawable arc primitives: the contract consumed by a render surface.

use crate::hierarchy::Tree;
use crate::types::NodeId;
use serde::Serialize;

/// One drawable arc segment.
///
/// `key` is the data-join identity (name + depth); duplicate name+depth
/// combinations collide, which is a known render-layer limitation. Radial
/// fields are in squared-radius space; use [`ArcSegment::inner_radius`] and
/// [`ArcSegment::outer_radius`] for the drawn boundaries. The previous spans
/// are the stash a renderer interpolates from when animating a transition.
#[derive(Debug, Clone, Serialize)]
pub struct ArcSegment {
    pub key: String,
    pub name: String,
    pub depth: usize,
    pub value: f64,
    pub angle_start: f64,
    pub angle_span: f64,
    pub radius_start: f64,
    pub radius_span: f64,
    pub prev_angle_start: f64,
    pub prev_angle_span: f64,
}

impl ArcSegment {
    pub fn inner_radius(&self) -> f64 {
        self.radius_start.sqrt()
    }

    pub fn outer_radius(&self) -> f64 {
        (self.radius_start + self.radius_span).sqrt()
    }

    /// This segment's share of a total, as a percentage.
    pub fn share_of(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.value / total * 100.0
        } else {
            0.0
        }
    }
}

/// Project visible nodes into arc segments, preserving their order.
pub fn arc_segments(tree: &Tree, nodes: &[NodeId]) -> Vec<ArcSegment> {
    nodes
        .iter()
        .map(|&id| {
            let node = tree.node(id);
            ArcSegment {
                key: format!("{}{}", node.name, node.depth),
                name: node.name.clone(),
                depth: node.depth,
                value: node.value,
                angle_start: node.angle_start,
                angle_span: node.angle_span,
                radius_start: node.radius_start,
                radius_span: node.radius_span,
                prev_angle_start: node.prev_angle_start,
                prev_angle_span: node.prev_angle_span,
            }
        })
        .collect()
}
