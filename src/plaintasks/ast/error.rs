//! Error types for AST operations

use thiserror::Error;

/// Errors that can occur during AST position lookup operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionLookupError {
    /// Invalid position format string
    #[error("Invalid position format: {0}")]
    InvalidPositionFormat(String),
    /// Element not found at the specified position
    #[error("No element found at position {line}:{column}")]
    NotFound { line: usize, column: usize },
}
