//! Traversal engine: pre-order walk dispatching each node to a visitor.

use tracing::{instrument, trace};

use crate::domain::node::{Node, NodeKind};
use crate::domain::visitor::TreeVisitor;

/// Visit `root` and then each child subtree in child order, depth-first.
///
/// Every reachable node is visited once; there is no early exit.
#[instrument(level = "trace", skip_all)]
pub fn walk<V: TreeVisitor + ?Sized>(root: &Node, visitor: &mut V) {
    for node in root.iter() {
        dispatch(node.kind(), visitor);
    }
}

fn dispatch<V: TreeVisitor + ?Sized>(kind: NodeKind<'_>, visitor: &mut V) {
    trace!(depth = kind.node().depth(), value = kind.node().value(), "visit");
    match kind {
        NodeKind::Internal(node) => visitor.visit_internal(node),
        NodeKind::Leaf(node) => visitor.visit_leaf(node),
    }
}

/// Drive a fresh visitor over `root` and return its result.
pub fn run<V: TreeVisitor + Default>(root: &Node) -> V::Output {
    let mut visitor = V::default();
    walk(root, &mut visitor);
    visitor.result()
}

impl Node {
    /// Accept a visitor at this node: the node picks the visitor operation
    /// for itself and every descendant.
    pub fn accept<V: TreeVisitor + ?Sized>(&self, visitor: &mut V) {
        walk(self, visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::Color;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(char, usize)>,
    }

    impl TreeVisitor for Recorder {
        type Output = Vec<(char, usize)>;

        fn visit_internal(&mut self, node: &Node) {
            self.seen.push(('i', node.depth()));
        }

        fn visit_leaf(&mut self, node: &Node) {
            self.seen.push(('l', node.depth()));
        }

        fn result(&self) -> Self::Output {
            self.seen.clone()
        }
    }

    //      0
    //    /   \
    //   1     2
    //  / \
    // 3   4
    fn sample() -> Node {
        let mut root = Node::new(0, Color::Red, 0);
        let mut one = Node::new(1, Color::Red, 1);
        one.add_child(Node::new(3, Color::Green, 3));
        one.add_child(Node::new(4, Color::Green, 4));
        root.add_child(one);
        root.add_child(Node::new(2, Color::Green, 2));
        root
    }

    #[test]
    fn test_walk_is_pre_order_with_dispatch() {
        let seen = run::<Recorder>(&sample());
        assert_eq!(
            seen,
            vec![('i', 0), ('i', 1), ('l', 3), ('l', 4), ('l', 2)]
        );
    }

    #[test]
    fn test_single_node_is_a_leaf_visit() {
        let seen = run::<Recorder>(&Node::new(9, Color::Red, 0));
        assert_eq!(seen, vec![('l', 0)]);
    }

    #[test]
    fn test_accept_matches_walk() {
        let tree = sample();
        let mut via_accept = Recorder::default();
        tree.accept(&mut via_accept);
        assert_eq!(via_accept.result(), run::<Recorder>(&tree));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut node = Node::new(0, Color::Red, 100_000);
        for depth in (0..100_000).rev() {
            let mut parent = Node::new(0, Color::Red, depth);
            parent.add_child(node);
            node = parent;
        }
        let seen = run::<Recorder>(&node);
        assert_eq!(seen.len(), 100_001);
        assert_eq!(seen.last(), Some(&('l', 100_000)));
    }
}
