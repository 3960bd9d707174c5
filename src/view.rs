//! Visualization Session
//!
//! Owns the tree, the partition configuration, and the focus state machine.
//! Event handling stays outside: whatever input source decides a node was
//! selected calls [`SunburstView::focus`], and the render layer pulls the
//! arc list afterwards.

use crate::error::ApiError;
use crate::hierarchy::Tree;
use crate::layout::{arc_segments, magnify, partition, ArcSegment, PartitionConfig};
use crate::types::NodeId;

/// Focus state: plain proportional partition, or magnified toward one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Overview,
    Focused(NodeId),
}

/// A sunburst session over one dataset.
pub struct SunburstView {
    tree: Tree,
    config: PartitionConfig,
    state: FocusState,
}

impl SunburstView {
    /// Take ownership of a built tree and run the initial layout.
    pub fn new(mut tree: Tree, config: PartitionConfig) -> Self {
        partition::layout(&mut tree, &config);
        SunburstView {
            tree,
            config,
            state: FocusState::Overview,
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Value of the whole dataset (the root's value).
    pub fn total(&self) -> f64 {
        self.tree.node(Tree::ROOT).value
    }

    /// Transition to `Focused(id)`, or back to `Overview` when `id` is the
    /// root. Spans are recomputed in place; the previous spans stay stashed
    /// on each node for the render layer to interpolate from.
    pub fn focus(&mut self, id: NodeId) -> Result<(), ApiError> {
        if self.tree.get(id).is_none() {
            return Err(ApiError::NodeNotFound(id));
        }
        magnify(&mut self.tree, id, &self.config);
        self.state = if id == Tree::ROOT {
            FocusState::Overview
        } else {
            FocusState::Focused(id)
        };
        Ok(())
    }

    /// Drawable arc segments for the current spans, visibility-filtered.
    pub fn arcs(&self) -> Vec<ArcSegment> {
        let nodes = partition::visible(&self.tree, &self.config);
        arc_segments(&self.tree, &nodes)
    }

    /// Breadcrumb chain for a node: highest first, root excluded, the node
    /// itself included.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        self.tree.ancestors(id)
    }

    /// Hit-test chart-centered coordinates against the current layout.
    pub fn pick(&self, x: f64, y: f64) -> Option<NodeId> {
        crate::layout::pick(&self.tree, &self.config, x, y)
    }
}
