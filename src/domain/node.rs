//! Tree node model: one node type, leaf/internal derived from the child list.

use std::fmt;

/// Node color. Input code `"0"` means red, every other code means green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
}

impl Color {
    pub fn from_code(code: &str) -> Self {
        if code.trim() == "0" {
            Color::Red
        } else {
            Color::Green
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Green => write!(f, "GREEN"),
        }
    }
}

/// Identity of a node for deduplication: two nodes are the same
/// only if value, color and depth all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub value: i64,
    pub color: Color,
    pub depth: usize,
}

/// Classification of a node at traversal time.
///
/// Traversal matches on this to pick the visitor operation, so the
/// leaf/internal decision lives in exactly one place.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Internal(&'a Node),
    Leaf(&'a Node),
}

impl<'a> NodeKind<'a> {
    pub fn node(&self) -> &'a Node {
        match *self {
            NodeKind::Internal(node) | NodeKind::Leaf(node) => node,
        }
    }
}

/// Tree node owning its children.
///
/// `depth` is the node's creation index in the input, not its distance from
/// the root. Child order is the order edges were attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: i64,
    color: Color,
    depth: usize,
    children: Vec<Node>,
}

impl Node {
    pub fn new(value: i64, color: Color, depth: usize) -> Self {
        Self {
            value,
            color,
            depth,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn kind(&self) -> NodeKind<'_> {
        if self.is_leaf() {
            NodeKind::Leaf(self)
        } else {
            NodeKind::Internal(self)
        }
    }

    pub fn key(&self) -> NodeKey {
        NodeKey {
            value: self.value,
            color: self.color,
            depth: self.depth,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a subtree contains at least its own root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pre-order iterator over this subtree.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter { stack: vec![self] }
    }

    pub(crate) fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }
}

impl Drop for Node {
    // Flatten the subtree first so dropping a long chain does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = PreOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct PreOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.children.iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}
