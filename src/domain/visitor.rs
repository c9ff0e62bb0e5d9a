//! Visitor contract: the aggregation side of the node/visitor double dispatch.

use crate::domain::node::Node;

/// Stateful aggregation driven by a tree traversal.
///
/// The traversal calls exactly one of [`visit_internal`](Self::visit_internal)
/// or [`visit_leaf`](Self::visit_leaf) per node, chosen by the node's
/// classification. [`result`](Self::result) is only meaningful once every
/// node of the tree has been visited.
///
/// State belongs to the visitor instance. Use a fresh instance per traversal.
pub trait TreeVisitor {
    type Output;

    fn visit_internal(&mut self, node: &Node);

    fn visit_leaf(&mut self, node: &Node);

    fn result(&self) -> Self::Output;
}
