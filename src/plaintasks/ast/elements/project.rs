//! Project element definition

use super::super::line_ending::LineEnding;
use super::super::span::Location;
use super::super::traits::{AstNode, Tagged};
use super::segment::Segment;
use serde::Serialize;
use std::fmt;

/// A project header: a name terminated by a colon, optionally followed by tags.
///
/// `name` is the raw text before the first colon. `tail` holds everything after
/// the colon, which for a project is only whitespace runs and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    pub indent: String,
    pub tail: Vec<Segment>,
    pub location: Option<Location>,
    pub ending: LineEnding,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indent: String::new(),
            tail: Vec::new(),
            location: None,
            ending: LineEnding::Lf,
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Project {
    fn node_type(&self) -> &'static str {
        "Project"
    }
    fn display_label(&self) -> String {
        self.name.clone()
    }
    fn location(&self) -> Option<Location> {
        self.location
    }
}

impl Tagged for Project {
    fn segments(&self) -> &[Segment] {
        &self.tail
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project('{}', {} tags)", self.name, self.tags().len())
    }
}
