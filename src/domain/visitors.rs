//! The three aggregation visitors.

use crate::domain::node::{Color, Node};
use crate::domain::visitor::TreeVisitor;

/// Sum of leaf values. Internal nodes are ignored.
#[derive(Debug, Default, Clone)]
pub struct SumInLeavesVisitor {
    sum: i64,
}

impl TreeVisitor for SumInLeavesVisitor {
    type Output = i64;

    fn visit_internal(&mut self, _node: &Node) {}

    fn visit_leaf(&mut self, node: &Node) {
        self.sum = self.sum.wrapping_add(node.value());
    }

    fn result(&self) -> i64 {
        self.sum
    }
}

/// Product of the values of red internal nodes. Leaves are ignored.
///
/// Starts at 1, so a tree without red internal nodes yields 1. With a
/// modulus the running product is reduced after every step and stays in
/// `0..modulus`; without one it wraps on `i64` overflow.
#[derive(Debug, Clone)]
pub struct ProductOfRedNodesVisitor {
    product: i64,
    modulus: Option<i64>,
}

impl Default for ProductOfRedNodesVisitor {
    fn default() -> Self {
        Self {
            product: 1,
            modulus: None,
        }
    }
}

impl ProductOfRedNodesVisitor {
    /// `modulus` must be positive; non-positive values are ignored.
    pub fn with_modulus(modulus: Option<i64>) -> Self {
        let modulus = modulus.filter(|m| *m > 0);
        Self {
            product: modulus.map_or(1, |m| 1i64.rem_euclid(m)),
            modulus,
        }
    }
}

impl TreeVisitor for ProductOfRedNodesVisitor {
    type Output = i64;

    fn visit_internal(&mut self, node: &Node) {
        if node.color() != Color::Red {
            return;
        }
        self.product = match self.modulus {
            Some(m) => {
                let step = i128::from(self.product) * i128::from(node.value().rem_euclid(m));
                // both factors are in 0..m, so the reduced value fits back into i64
                step.rem_euclid(i128::from(m)) as i64
            }
            None => self.product.wrapping_mul(node.value()),
        };
    }

    fn visit_leaf(&mut self, _node: &Node) {}

    fn result(&self) -> i64 {
        self.product
    }
}

/// Absolute difference between the sum of internal nodes at even depth and
/// the sum of green leaves.
///
/// Depth is the node's creation index (see [`Node`]).
#[derive(Debug, Default, Clone)]
pub struct FancyVisitor {
    even_depth_internal: i64,
    green_leaves: i64,
}

impl TreeVisitor for FancyVisitor {
    type Output = i64;

    fn visit_internal(&mut self, node: &Node) {
        if node.depth() % 2 == 0 {
            self.even_depth_internal = self.even_depth_internal.wrapping_add(node.value());
        }
    }

    fn visit_leaf(&mut self, node: &Node) {
        if node.color() == Color::Green {
            self.green_leaves = self.green_leaves.wrapping_add(node.value());
        }
    }

    fn result(&self) -> i64 {
        self.even_depth_internal
            .wrapping_sub(self.green_leaves)
            .wrapping_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traversal::{run, walk};
    use rstest::rstest;

    // 4 RED d0
    // ├── 7 GREEN d1
    // └── 2 RED d2
    //     ├── 5 RED d3
    //     └── 12 GREEN d4
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
    fn test_sum_in_leaves() {
        assert_eq!(run::<SumInLeavesVisitor>(&sample()), 24);
    }

    #[test]
    fn test_product_of_red_internal_nodes() {
        assert_eq!(run::<ProductOfRedNodesVisitor>(&sample()), 8);
    }

    #[test]
    fn test_fancy() {
        // |(4 + 2) - (7 + 12)|
        assert_eq!(run::<FancyVisitor>(&sample()), 13);
    }

    #[test]
    fn test_single_node_tree() {
        let tree = Node::new(-3, Color::Red, 0);
        assert_eq!(run::<SumInLeavesVisitor>(&tree), -3);
        assert_eq!(run::<ProductOfRedNodesVisitor>(&tree), 1);
        assert_eq!(run::<FancyVisitor>(&tree), 0);
    }

    #[test]
    fn test_no_red_internal_nodes_yields_one() {
        let mut root = Node::new(10, Color::Green, 0);
        root.add_child(Node::new(3, Color::Red, 1));
        assert_eq!(run::<ProductOfRedNodesVisitor>(&root), 1);
    }

    #[rstest]
    #[case(None, 8)]
    #[case(Some(5), 3)]
    #[case(Some(1_000_000_007), 8)]
    #[case(Some(0), 8)]
    fn test_product_modulus(#[case] modulus: Option<i64>, #[case] expected: i64) {
        let mut visitor = ProductOfRedNodesVisitor::with_modulus(modulus);
        walk(&sample(), &mut visitor);
        assert_eq!(visitor.result(), expected);
    }

    #[test]
    fn test_product_modulus_with_negative_values() {
        let mut root = Node::new(-3, Color::Red, 0);
        root.add_child(Node::new(1, Color::Green, 1));
        let mut visitor = ProductOfRedNodesVisitor::with_modulus(Some(7));
        walk(&root, &mut visitor);
        assert_eq!(visitor.result(), 4);
    }

    #[test]
    fn test_result_is_idempotent() {
        let tree = sample();
        let mut visitor = SumInLeavesVisitor::default();
        walk(&tree, &mut visitor);
        assert_eq!(visitor.result(), visitor.result());
        assert_eq!(run::<SumInLeavesVisitor>(&tree), visitor.result());
    }
}
