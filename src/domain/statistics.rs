//! Runs the three aggregation visitors over one tree.

use tracing::{debug, instrument};

use crate::domain::node::Node;
use crate::domain::traversal::walk;
use crate::domain::visitor::TreeVisitor;
use crate::domain::visitors::{FancyVisitor, ProductOfRedNodesVisitor, SumInLeavesVisitor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStatistics {
    pub sum_of_leaves: i64,
    pub product_of_red_internal: i64,
    pub fancy: i64,
}

impl TreeStatistics {
    /// One traversal per visitor, one after the other.
    #[instrument(level = "debug", skip(root))]
    pub fn compute(root: &Node, product_modulus: Option<i64>) -> Self {
        let stats = Self {
            sum_of_leaves: drive(root, SumInLeavesVisitor::default()),
            product_of_red_internal: drive(
                root,
                ProductOfRedNodesVisitor::with_modulus(product_modulus),
            ),
            fancy: drive(root, FancyVisitor::default()),
        };
        debug!(?stats, "computed");
        stats
    }

    /// Same results as [`compute`](Self::compute), with the traversals on the rayon pool.
    ///
    /// The tree is only read and every visitor owns its state, so nothing is locked.
    #[instrument(level = "debug", skip(root))]
    pub fn compute_parallel(root: &Node, product_modulus: Option<i64>) -> Self {
        let (sum_of_leaves, (product_of_red_internal, fancy)) = rayon::join(
            || drive(root, SumInLeavesVisitor::default()),
            || {
                rayon::join(
                    || drive(root, ProductOfRedNodesVisitor::with_modulus(product_modulus)),
                    || drive(root, FancyVisitor::default()),
                )
            },
        );
        let stats = Self {
            sum_of_leaves,
            product_of_red_internal,
            fancy,
        };
        debug!(?stats, "computed in parallel");
        stats
    }

    /// Results in output order: sum of leaves, product of red internal nodes, fancy.
    pub fn lines(&self) -> [i64; 3] {
        [self.sum_of_leaves, self.product_of_red_internal, self.fancy]
    }
}

fn drive<V: TreeVisitor>(root: &Node, mut visitor: V) -> V::Output {
    walk(root, &mut visitor);
    visitor.result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::Color;

    fn sample() -> Node {
        let mut root = Node::new(4, Color::Red, 0);
        let mut two = Node::new(2, Color::Red, 2);
        two.add_child(Node::new(5, Color::Red, 3));
        two.add_child(Node::new(12, Color::Green, 4));
        root.add_child(Node::new(7, Color::Green, 1));
        root.add_child(two);
        root
    }

    #[test]
    fn test_compute_sample() {
        let stats = TreeStatistics::compute(&sample(), None);
        assert_eq!(stats.lines(), [24, 8, 13]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let tree = sample();
        assert_eq!(
            TreeStatistics::compute_parallel(&tree, Some(3)),
            TreeStatistics::compute(&tree, Some(3))
        );
    }
}
