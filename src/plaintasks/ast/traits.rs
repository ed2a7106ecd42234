//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

use super::elements::{Segment, Tag};
use super::span::Location;

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn location(&self) -> Option<Location>;
}

/// Trait for nodes whose content is a sequence of text runs and tags
pub trait Tagged: AstNode {
    fn segments(&self) -> &[Segment];

    /// Tags in content order
    fn tags(&self) -> Vec<&Tag> {
        self.segments()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Tag(tag) => Some(tag),
                Segment::Text { .. } => None,
            })
            .collect()
    }

    fn has_tag(&self, name: &str) -> bool {
        self.tags().iter().any(|tag| tag.name == name)
    }
}
