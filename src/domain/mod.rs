//! Domain layer: tree model, construction, visitors and traversal
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod input;
pub mod node;
pub mod statistics;
pub mod traversal;
pub mod visitor;
pub mod visitors;

pub use builder::TreeBuilder;
pub use error::{DomainError, DomainResult};
pub use input::TreeInput;
pub use node::{Color, Node, NodeKey, NodeKind, PreOrderIter};
pub use statistics::TreeStatistics;
pub use traversal::{run, walk};
pub use visitor::TreeVisitor;
pub use visitors::{FancyVisitor, ProductOfRedNodesVisitor, SumInLeavesVisitor};
