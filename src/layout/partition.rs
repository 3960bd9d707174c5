//! Proportional angular subdivision and depth-squared radial bands.

use crate::hierarchy::Tree;
use crate::layout::PartitionConfig;
use crate::types::{NodeId, FULL_CIRCLE};
use tracing::debug;

/// Compute the full partition layout in place and return the visible nodes
/// in pre-order.
///
/// Values are children sums (post-order), depths count from the root
/// (pre-order), the root spans `[0, 2π)`, and each node's span is divided
/// among its children in list order proportional to value. Radial bands use
/// the squared-radius mapping: with `levels = max_depth + 1`,
/// `radius_start = R²·d²/levels²` and the band ends at `R²·(d+1)²/levels²`,
/// so the rendered ring boundaries `sqrt(y)`, `sqrt(y+dy)` are evenly spaced
/// and the deepest ring closes exactly at `R`.
pub fn layout(tree: &mut Tree, config: &PartitionConfig) -> Vec<NodeId> {
    compute_values(tree, Tree::ROOT);
    compute_depths(tree);
    assign_radial_bands(tree, config);
    assign_angles(tree);

    // Initial stash: before any transition, "previous" is just the current
    // layout.
    for id in tree.ids() {
        let node = tree.node_mut(id);
        node.prev_angle_start = node.angle_start;
        node.prev_angle_span = node.angle_span;
    }

    let nodes = visible(tree, config);
    debug!(
        nodes = tree.len(),
        visible = nodes.len(),
        total = tree.node(Tree::ROOT).value,
        "partition layout computed"
    );
    nodes
}

/// Post-order effective values: leaves keep their own size, internal nodes
/// sum their children (their own size, if any, carries no weight).
fn compute_values(tree: &mut Tree, id: NodeId) -> f64 {
    let children = tree.node(id).children.clone();
    let value = if children.is_empty() {
        tree.node(id).size
    } else {
        children.iter().map(|&c| compute_values(tree, c)).sum()
    };
    tree.node_mut(id).value = value;
    value
}

fn compute_depths(tree: &mut Tree) {
    let mut stack = vec![(Tree::ROOT, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        tree.node_mut(id).depth = depth;
        for &child in &tree.node(id).children.clone() {
            stack.push((child, depth + 1));
        }
    }
}

fn assign_radial_bands(tree: &mut Tree, config: &PartitionConfig) {
    let levels = (tree.max_depth() + 1) as f64;
    let r_sq = config.radius * config.radius;
    for id in tree.ids() {
        let d = tree.node(id).depth as f64;
        let node = tree.node_mut(id);
        node.radius_start = r_sq * (d * d) / (levels * levels);
        node.radius_span = r_sq * ((d + 1.0) * (d + 1.0) - d * d) / (levels * levels);
    }
}

/// Pre-order angular subdivision. A zero-value parent gives all children a
/// zero-width span at its own start; the root always keeps the full circle.
fn assign_angles(tree: &mut Tree) {
    {
        let root = tree.node_mut(Tree::ROOT);
        root.angle_start = 0.0;
        root.angle_span = FULL_CIRCLE;
    }
    let mut stack = vec![Tree::ROOT];
    while let Some(id) = stack.pop() {
        let (start, span, value) = {
            let n = tree.node(id);
            (n.angle_start, n.angle_span, n.value)
        };
        let scale = if value > 0.0 { span / value } else { 0.0 };
        let children = tree.node(id).children.clone();
        let mut x = start;
        for child in children {
            let width = tree.node(child).value * scale;
            let node = tree.node_mut(child);
            node.angle_start = x;
            node.angle_span = width;
            x += width;
            stack.push(child);
        }
    }
}

/// Pre-order list of nodes worth drawing: angular span above the minimum,
/// and within the configured depth cutoff when one is set. Purely a
/// rendering-efficiency filter; spans and values are untouched.
pub fn visible(tree: &Tree, config: &PartitionConfig) -> Vec<NodeId> {
    tree.preorder()
        .into_iter()
        .filter(|&id| {
            let node = tree.node(id);
            node.angle_span > config.min_angle
                && config.max_depth.map_or(true, |max| node.depth <= max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::HierarchyBuilder;

    const TOLERANCE: f64 = 1e-9;

    fn build(rows: Vec<(&str, &str)>) -> Tree {
        HierarchyBuilder::new().build(rows)
    }

    #[test]
    fn test_values_sum_up_the_tree() {
        let mut tree = build(vec![("a-b", "3"), ("a-c", "4"), ("d", "5")]);
        layout(&mut tree, &PartitionConfig::default());
        assert_eq!(tree.node(Tree::ROOT).value, 12.0);
        let a = tree.find_path("a", "-").unwrap();
        assert_eq!(tree.node(a).value, 7.0);
    }

    #[test]
    fn test_depths_count_from_root() {
        let mut tree = build(vec![("a-b-c", "1")]);
        layout(&mut tree, &PartitionConfig::default());
        assert_eq!(tree.node(Tree::ROOT).depth, 0);
        assert_eq!(tree.node(tree.find_path("a", "-").unwrap()).depth, 1);
        assert_eq!(tree.node(tree.find_path("a-b-c", "-").unwrap()).depth, 3);
    }

    #[test]
    fn test_angular_spans_proportional_in_list_order() {
        // Children values [1, 1, 2] split the full circle in order.
        let mut tree = build(vec![("a", "1"), ("b", "1"), ("c", "2")]);
        layout(&mut tree, &PartitionConfig::default());
        let kids = tree.node(Tree::ROOT).children.clone();
        let spans: Vec<f64> = kids.iter().map(|&id| tree.node(id).angle_span).collect();
        assert!((spans[0] - FULL_CIRCLE / 4.0).abs() < TOLERANCE);
        assert!((spans[1] - FULL_CIRCLE / 4.0).abs() < TOLERANCE);
        assert!((spans[2] - FULL_CIRCLE / 2.0).abs() < TOLERANCE);
        assert!((tree.node(kids[0]).angle_start).abs() < TOLERANCE);
        assert!((tree.node(kids[1]).angle_start - FULL_CIRCLE / 4.0).abs() < TOLERANCE);
        assert!((tree.node(kids[2]).angle_start - FULL_CIRCLE / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_children_partition_parent_exactly() {
        let mut tree = build(vec![("a-b", "3"), ("a-c", "4"), ("a-d", "2"), ("e", "1")]);
        layout(&mut tree, &PartitionConfig::default());
        for id in tree.ids() {
            let node = tree.node(id);
            if node.is_leaf() || node.value == 0.0 {
                continue;
            }
            let sum: f64 = node.children.iter().map(|&c| tree.node(c).angle_span).sum();
            assert!((sum - node.angle_span).abs() < TOLERANCE);
            // Contiguous, no overlap: each child starts where the previous ended.
            let mut x = node.angle_start;
            for &c in &node.children {
                assert!((tree.node(c).angle_start - x).abs() < TOLERANCE);
                x += tree.node(c).angle_span;
            }
        }
    }

    #[test]
    fn test_radial_bands_follow_depth_squared_mapping() {
        let mut tree = build(vec![("a-b", "1")]);
        let config = PartitionConfig::default();
        layout(&mut tree, &config);
        let r_sq = config.radius * config.radius;
        // Three levels: root, a, b.
        let a = tree.find_path("a", "-").unwrap();
        let b = tree.find_path("a-b", "-").unwrap();
        assert!((tree.node(Tree::ROOT).radius_start - 0.0).abs() < TOLERANCE);
        assert!((tree.node(a).radius_start - r_sq / 9.0).abs() < 1e-6);
        assert!((tree.node(a).radius_span - r_sq * 3.0 / 9.0).abs() < 1e-6);
        // Deepest ring closes exactly at the chart radius.
        let outer = (tree.node(b).radius_start + tree.node(b).radius_span).sqrt();
        assert!((outer - config.radius).abs() < 1e-9);
    }

    #[test]
    fn test_zero_value_tree_lays_out_without_error() {
        let mut tree = Tree::new();
        let a = tree.add_child(Tree::ROOT, "a", 0.0);
        tree.add_child(a, "b", 0.0);
        let nodes = layout(&mut tree, &PartitionConfig::default());
        assert_eq!(tree.node(Tree::ROOT).value, 0.0);
        assert_eq!(tree.node(Tree::ROOT).angle_span, FULL_CIRCLE);
        assert_eq!(tree.node(a).angle_span, 0.0);
        // Zero-width children fall below the visibility threshold.
        assert_eq!(nodes, vec![Tree::ROOT]);
    }

    #[test]
    fn test_empty_tree_layout() {
        let mut tree = Tree::new();
        let nodes = layout(&mut tree, &PartitionConfig::default());
        assert_eq!(tree.node(Tree::ROOT).value, 0.0);
        assert_eq!(nodes, vec![Tree::ROOT]);
    }

    #[test]
    fn test_visibility_threshold_filters_slivers() {
        // One dominant leaf and one tiny one; with a large threshold the tiny
        // leaf disappears from the visible list.
        let mut tree = build(vec![("big", "999999"), ("tiny", "1")]);
        let config = PartitionConfig {
            min_angle: 0.01,
            ..PartitionConfig::default()
        };
        let nodes = layout(&mut tree, &config);
        let tiny = tree.find_path("tiny", "-").unwrap();
        assert!(!nodes.contains(&tiny));
        assert!(tree.node(tiny).angle_span > 0.0);
    }

    #[test]
    fn test_max_depth_cutoff_limits_visible_levels() {
        let mut tree = build(vec![("a-b-c", "1")]);
        let config = PartitionConfig {
            max_depth: Some(1),
            ..PartitionConfig::default()
        };
        let nodes = layout(&mut tree, &config);
        assert!(nodes.iter().all(|&id| tree.node(id).depth <= 1));
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_initial_stash_matches_layout() {
        let mut tree = build(vec![("a", "1"), ("b", "3")]);
        layout(&mut tree, &PartitionConfig::default());
        for id in tree.ids() {
            let node = tree.node(id);
            assert_eq!(node.prev_angle_start, node.angle_start);
            assert_eq!(node.prev_angle_span, node.angle_span);
        }
    }
}
