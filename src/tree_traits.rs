//! Text rendering of built trees via `termtree`.

use std::fmt;

use termtree::Tree;
use tracing::{instrument, trace};

use crate::domain::Node;

/// A rendered node hierarchy.
///
/// Dropping it unlinks one level at a time, so a long chain is released
/// without recursing once per level.
pub struct NodeTree(Tree<String>);

impl NodeTree {
    pub fn tree(&self) -> &Tree<String> {
        &self.0
    }
}

impl fmt::Display for NodeTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Drop for NodeTree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0.leaves);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.leaves);
        }
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> NodeTree;
}

/// One-line label: `v: <value>, c: <color>, d: <depth>`.
pub fn node_label(node: &Node) -> String {
    format!("v: {}, c: {}, d: {}", node.value(), node.color(), node.depth())
}

impl TreeNodeConvert for Node {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> NodeTree {
        // post-order: a node's subtrees sit at the top of `finished` when it is popped
        let mut stack = vec![(self, false)];
        let mut finished: Vec<Tree<String>> = Vec::new();
        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                for child in node.children().iter().rev() {
                    stack.push((child, false));
                }
                continue;
            }
            let leaves = finished.split_off(finished.len() - node.children().len());
            finished.push(Tree::new(node_label(node)).with_leaves(leaves));
        }
        trace!(remaining = finished.len(), "tree converted");
        // the root is always the last node finished
        NodeTree(
            finished
                .pop()
                .unwrap_or_else(|| Tree::new(node_label(self))),
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TreeBuilder, TreeInput};

    #[test]
    fn test_render_sample_tree() {
        let input = TreeInput::new(
            5,
            vec![4, 7, 2, 5, 12],
            ["0", "1", "0", "0", "1"],
            vec![(1, 2), (1, 3), (3, 4), (3, 5)],
        );
        let root = TreeBuilder::new().build(&input).unwrap();
        let rendered = root.to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "v: 4, c: RED, d: 0");
        assert!(lines[1].ends_with("v: 7, c: GREEN, d: 1"));
        assert!(lines[2].ends_with("v: 2, c: RED, d: 2"));
        assert!(lines[3].ends_with("v: 5, c: RED, d: 3"));
        assert!(lines[4].ends_with("v: 12, c: GREEN, d: 4"));
    }

    #[test]
    fn test_converted_tree_keeps_child_order() {
        let input = TreeInput::new(
            4,
            vec![1, 2, 3, 4],
            ["0", "0", "1", "1"],
            vec![(1, 4), (1, 2), (2, 3)],
        );
        let root = TreeBuilder::new().build(&input).unwrap();
        let converted = root.to_tree_string();
        let tree = converted.tree();

        assert_eq!(tree.root, "v: 1, c: RED, d: 0");
        let labels: Vec<_> = tree.leaves.iter().map(|t| t.root.as_str()).collect();
        assert_eq!(labels, vec!["v: 4, c: GREEN, d: 3", "v: 2, c: RED, d: 1"]);
        assert_eq!(tree.leaves[1].leaves[0].root, "v: 3, c: GREEN, d: 2");
    }
}
