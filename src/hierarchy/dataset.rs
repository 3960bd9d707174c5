//! Pre-shaped hierarchical dataset input.
//!
//! The alternative to row datasets: data already shaped like the tree
//! (name, optional size, children), as exported by disk-usage indexers.

use crate::hierarchy::{Node, Tree};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// Serde shape for one node of a pre-shaped dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl Tree {
    /// Build a tree from pre-shaped data. The spec's top node becomes the
    /// arena root; a node's `size` only carries weight when it is a leaf,
    /// since internal values are recomputed as children sums during layout.
    pub fn from_spec(spec: &NodeSpec) -> Tree {
        let mut tree = Tree::with_root(spec.name.clone(), spec.size.unwrap_or(0.0));
        for child in &spec.children {
            attach(&mut tree, Tree::ROOT, child);
        }
        tree
    }

    /// Export the tree back to the pre-shaped form.
    pub fn to_spec(&self) -> NodeSpec {
        self.spec_of(Tree::ROOT)
    }

    fn spec_of(&self, id: NodeId) -> NodeSpec {
        let node: &Node = self.node(id);
        NodeSpec {
            name: node.name.clone(),
            size: if node.is_leaf() { Some(node.size) } else { None },
            children: node.children.iter().map(|&c| self.spec_of(c)).collect(),
        }
    }
}

fn attach(tree: &mut Tree, parent: NodeId, spec: &NodeSpec) {
    let id = tree.add_child(parent, spec.name.clone(), spec.size.unwrap_or(0.0));
    for child in &spec.children {
        attach(tree, id, child);
    }
}
