//! Empty line element definition

use super::super::line_ending::LineEnding;
use super::super::span::Location;
use super::super::traits::AstNode;
use serde::Serialize;

/// A line with no content. Whitespace-only lines are empty lines too; the
/// whitespace is kept so the line can be written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmptyLine {
    pub whitespace: String,
    pub location: Option<Location>,
    pub ending: LineEnding,
}

impl EmptyLine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AstNode for EmptyLine {
    fn node_type(&self) -> &'static str {
        "EmptyLine"
    }
    fn display_label(&self) -> String {
        String::new()
    }
    fn location(&self) -> Option<Location> {
        self.location
    }
}
