//! Magnify: angular redistribution toward a focused node.

use crate::hierarchy::Tree;
use crate::layout::PartitionConfig;
use crate::types::NodeId;
use tracing::debug;

/// Re-derive angular spans so the focused node takes `magnify_fraction` of
/// its parent's span and the remaining siblings share the rest proportional
/// to their values. The rescale runs recursively: every descendant is
/// repositioned with its branch's scale, so proportions inside each branch
/// are preserved.
///
/// Focusing the root resets the chart to the plain proportional partition.
/// Topology and values never change; only angular spans move, and every
/// node's pre-transition span is stashed first so a render layer can
/// interpolate. Safe to call repeatedly in any focus order: each call
/// recomputes from current spans and values.
pub fn magnify(tree: &mut Tree, focus: NodeId, config: &PartitionConfig) {
    stash(tree);

    match tree.node(focus).parent {
        Some(parent) => magnify_under(tree, parent, focus, config.magnify_fraction),
        None => reset(tree, focus),
    }
    debug!(focus, "magnify applied");
}

/// Redistribute `parent`'s span among its children with `focus` magnified.
fn magnify_under(tree: &mut Tree, parent: NodeId, focus: NodeId, k: f64) {
    let (start, span, parent_value) = {
        let p = tree.node(parent);
        (p.angle_start, p.angle_span, p.value)
    };
    let focus_value = tree.node(focus).value;
    let rest = parent_value - focus_value;
    let children = tree.node(parent).children.clone();

    let mut x = start;
    if focus_value <= 0.0 {
        // Nothing to magnify; fall back to the plain proportional split so
        // the children still partition the parent exactly.
        let scale = if parent_value > 0.0 { span / parent_value } else { 0.0 };
        for child in children {
            x += reposition(tree, child, x, scale);
        }
    } else if rest <= 0.0 {
        // Siblings hold no value; the focused child takes the whole span.
        for child in children {
            let scale = if child == focus { span / focus_value } else { 0.0 };
            x += reposition(tree, child, x, scale);
        }
    } else {
        for child in children {
            let scale = if child == focus {
                span * k / focus_value
            } else {
                span * (1.0 - k) / rest
            };
            x += reposition(tree, child, x, scale);
        }
    }
}

/// Root focus: redistribute the whole circle from angle 0 with the uniform
/// value scale, which is exactly the plain proportional partition. The
/// root's own span stays the full circle.
fn reset(tree: &mut Tree, root: NodeId) {
    let (span, value) = {
        let n = tree.node(root);
        (n.angle_span, n.value)
    };
    let scale = if value > 0.0 { span / value } else { 0.0 };
    tree.node_mut(root).angle_start = 0.0;
    let children = tree.node(root).children.clone();
    let mut x = 0.0;
    for child in children {
        x += reposition(tree, child, x, scale);
    }
}

/// Recursively place `id` at angle `x` with span `value * scale`, children
/// packed left to right from the same scale. Returns the span.
fn reposition(tree: &mut Tree, id: NodeId, x: f64, scale: f64) -> f64 {
    tree.node_mut(id).angle_start = x;
    let children = tree.node(id).children.clone();
    let mut cx = x;
    for child in children {
        cx += reposition(tree, child, cx, scale);
    }
    let span = tree.node(id).value * scale;
    tree.node_mut(id).angle_span = span;
    span
}

/// Snapshot every node's current spans into the previous-span fields.
fn stash(tree: &mut Tree) {
    for id in tree.ids() {
        let node = tree.node_mut(id);
        node.prev_angle_start = node.angle_start;
        node.prev_angle_span = node.angle_span;
    }
}
