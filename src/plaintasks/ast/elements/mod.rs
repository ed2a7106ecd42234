//! AST element definitions
//!
//! One file per node kind. `Node` is the sum type stored in a `Document`;
//! `Segment` and `Tag` make up task and project content.

pub mod comment;
pub mod document;
pub mod empty_line;
pub mod node;
pub mod project;
pub mod segment;
pub mod tag;
pub mod task;

pub use comment::Comment;
pub use document::Document;
pub use empty_line::EmptyLine;
pub use node::Node;
pub use project::Project;
pub use segment::{push_segment, segments_to_string, Segment};
pub use tag::Tag;
pub use task::{Status, Task};
