//! Comment element definition

use super::super::line_ending::LineEnding;
use super::super::span::Location;
use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

/// Free-form line that is neither a project nor a task. Tags are not
/// recognized inside comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
    pub indent: String,
    pub location: Option<Location>,
    pub ending: LineEnding,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indent: String::new(),
            location: None,
            ending: LineEnding::Lf,
        }
    }
}

impl AstNode for Comment {
    fn node_type(&self) -> &'static str {
        "Comment"
    }
    fn display_label(&self) -> String {
        self.text.clone()
    }
    fn location(&self) -> Option<Location> {
        self.location
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comment('{}')", self.text)
    }
}
