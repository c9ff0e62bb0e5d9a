//! Build a colored, rooted tree from a flat description and aggregate it
//! with visitors.
//!
//! ```
//! use treevis::domain::{run, SumInLeavesVisitor, TreeBuilder, TreeInput};
//!
//! let input = TreeInput::new(
//!     5,
//!     vec![4, 7, 2, 5, 12],
//!     ["0", "1", "0", "0", "1"],
//!     vec![(1, 2), (1, 3), (3, 4), (3, 5)],
//! );
//! let root = TreeBuilder::new().build(&input)?;
//! assert_eq!(run::<SumInLeavesVisitor>(&root), 24);
//! # Ok::<(), treevis::domain::DomainError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
