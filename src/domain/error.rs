//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe a tree description that cannot be built.
/// Traversal never fails, so these only come out of input parsing and construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("node index {index} out of range 1..={node_count}")]
    OutOfRange { index: i64, node_count: usize },
}

impl DomainError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
