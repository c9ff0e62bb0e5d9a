//! Tree builder: flat value/color arrays plus an edge list into an owned node hierarchy.

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::input::TreeInput;
use crate::domain::node::{Color, Node};

/// Constructs a single tree rooted at node 0 from a [`TreeInput`].
///
/// Nodes are created up front in an arena, edges are recorded as index
/// lists, and the owned hierarchy is assembled bottom-up once every edge
/// has been validated. A bad edge anywhere aborts the whole build.
#[derive(Debug, Default)]
pub struct TreeBuilder;

/// Scratch state for one build; dropped when `build` returns.
struct BuildState {
    arena: Arena<Node>,
    slots: Vec<Index>,
    parent_of: Vec<Option<usize>>,
    children_of: Vec<Vec<usize>>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self, input), fields(node_count = input.node_count))]
    pub fn build(&self, input: &TreeInput) -> DomainResult<Node> {
        Self::validate_lengths(input)?;

        let mut state = BuildState::new(input);
        for (pos, &(parent, child)) in input.edges.iter().enumerate() {
            let parent_idx = resolve(parent, input.node_count)?;
            let child_idx = resolve(child, input.node_count)?;
            state.link(pos + 1, parent_idx, child_idx)?;
        }

        let root = state.assemble()?;
        debug!(nodes = input.node_count, "tree built");
        Ok(root)
    }

    fn validate_lengths(input: &TreeInput) -> DomainResult<()> {
        if input.node_count == 0 {
            return Err(DomainError::malformed("node count must be positive"));
        }
        if input.values.len() != input.node_count {
            return Err(DomainError::malformed(format!(
                "expected {} values, found {}",
                input.node_count,
                input.values.len()
            )));
        }
        if input.colors.len() != input.node_count {
            return Err(DomainError::malformed(format!(
                "expected {} colors, found {}",
                input.node_count,
                input.colors.len()
            )));
        }
        if input.edges.len() != input.node_count - 1 {
            return Err(DomainError::malformed(format!(
                "expected {} edges, found {}",
                input.node_count - 1,
                input.edges.len()
            )));
        }
        Ok(())
    }
}

/// Convert a 1-indexed node reference into a 0-indexed creation index.
fn resolve(index: i64, node_count: usize) -> DomainResult<usize> {
    if index < 1 || index > node_count as i64 {
        return Err(DomainError::OutOfRange { index, node_count });
    }
    Ok((index - 1) as usize)
}

impl BuildState {
    fn new(input: &TreeInput) -> Self {
        let mut arena = Arena::with_capacity(input.node_count);
        // depth is the creation index, not the distance from the root
        let slots = input
            .values
            .iter()
            .zip(&input.colors)
            .enumerate()
            .map(|(depth, (&value, code))| {
                arena.insert(Node::new(value, Color::from_code(code), depth))
            })
            .collect();

        Self {
            arena,
            slots,
            parent_of: vec![None; input.node_count],
            children_of: vec![Vec::new(); input.node_count],
        }
    }

    fn link(&mut self, edge_no: usize, parent: usize, child: usize) -> DomainResult<()> {
        if child == 0 {
            return Err(DomainError::malformed(format!(
                "edge {}: the root cannot be a child",
                edge_no
            )));
        }
        if parent == child {
            return Err(DomainError::malformed(format!(
                "edge {}: node {} cannot be its own child",
                edge_no,
                child + 1
            )));
        }
        if let Some(existing) = self.parent_of[child] {
            return Err(DomainError::malformed(format!(
                "edge {}: node {} already has parent {}",
                edge_no,
                child + 1,
                existing + 1
            )));
        }
        trace!(parent, child, "link");
        self.parent_of[child] = Some(parent);
        self.children_of[parent].push(child);
        Ok(())
    }

    /// Move nodes out of the arena in post-order so every child is complete
    /// before it is attached to its parent.
    fn assemble(mut self) -> DomainResult<Node> {
        let mut stack = vec![(0usize, false)];
        while let Some((current, expanded)) = stack.pop() {
            if !expanded {
                stack.push((current, true));
                for &child in self.children_of[current].iter().rev() {
                    stack.push((child, false));
                }
                continue;
            }
            for &child in &self.children_of[current] {
                let node = self.arena.remove(self.slots[child]).ok_or_else(|| {
                    DomainError::malformed(format!("node {} attached twice", child + 1))
                })?;
                let parent = self.arena.get_mut(self.slots[current]).ok_or_else(|| {
                    DomainError::malformed(format!("node {} detached early", current + 1))
                })?;
                parent.add_child(node);
            }
        }

        let root = self
            .arena
            .remove(self.slots[0])
            .ok_or_else(|| DomainError::malformed("root node missing"))?;

        if !self.arena.is_empty() {
            // single parent per node and a parentless root: leftovers sit on a cycle
            return Err(DomainError::malformed(format!(
                "{} node(s) not reachable from the root",
                self.arena.len()
            )));
        }
        Ok(root)
    }
}
