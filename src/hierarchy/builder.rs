//! Hierarchy construction from flat (path, size) rows.

use crate::hierarchy::Tree;
use tracing::debug;

/// Builds a [`Tree`] from two-column rows: a separator-joined sequence of
/// segment names, and a numeric size.
///
/// Internal nodes merge by name so repeated path prefixes collapse into
/// shared branches; leaves are always appended, never merged, so two rows
/// with identical full paths yield two sibling leaves. That asymmetry is
/// part of the contract: repeated identical paths are repeated independent
/// events, not one event of summed size.
#[derive(Debug, Clone)]
pub struct HierarchyBuilder {
    separator: String,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        HierarchyBuilder {
            separator: "-".to_string(),
        }
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        HierarchyBuilder {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Build a tree from rows. Rows whose size field does not parse to a
    /// finite number (a header row, say) are skipped, never an error.
    pub fn build<I, P, S>(&self, rows: I) -> Tree
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<str>,
        S: AsRef<str>,
    {
        let mut tree = Tree::new();
        for (path, size) in rows {
            let path = path.as_ref();
            let size = match size.as_ref().trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    debug!(path, size = size.as_ref(), "skipping row with non-numeric size");
                    continue;
                }
            };
            self.insert(&mut tree, path, size);
        }
        tree
    }

    /// Walk the path from the root, reusing internal children by name and
    /// appending the final segment as a fresh leaf. Empty segments (from
    /// doubled, leading, or trailing separators) are ordinary names.
    fn insert(&self, tree: &mut Tree, path: &str, size: f64) {
        let segments: Vec<&str> = path.split(self.separator.as_str()).collect();
        let mut current = Tree::ROOT;
        let last = segments.len() - 1;
        for (i, segment) in segments.into_iter().enumerate() {
            if i < last {
                current = match tree.child_by_name(current, segment) {
                    Some(child) => child,
                    None => tree.add_child(current, segment, 0.0),
                };
            } else {
                tree.add_child(current, segment, size);
            }
        }
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
