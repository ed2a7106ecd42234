//! AST definitions and utilities for the todo format
//!
//! This module provides the Abstract Syntax Tree (AST) definitions,
//! along with utilities for tracking source positions and performing
//! position-based lookups.
//!
//! ## Modules
//!
//! - `span` - Position and Location types for source code locations
//! - `elements` - AST node type definitions and trait implementations
//! - `position` - Source location utilities for converting byte offsets
//! - `lookup` - Position-based AST node lookup functionality
//! - `error` - Error types for AST operations

pub mod elements;
pub mod error;
pub mod line_ending;
pub mod lookup;
pub mod position;
pub mod span;
pub mod traits;

// Re-export commonly used types at module root
pub use elements::{
    push_segment, segments_to_string, Comment, Document, EmptyLine, Node, Project, Segment,
    Status, Tag, Task,
};
pub use error::PositionLookupError;
pub use line_ending::LineEnding;
pub use lookup::{find_nodes_at_position, format_at_position};
pub use position::SourceLocation;
pub use span::{Location, Position};
pub use traits::{AstNode, Tagged};
