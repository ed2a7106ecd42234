//! Task element definition

use super::super::line_ending::LineEnding;
use super::super::span::Location;
use super::super::traits::{AstNode, Tagged};
use super::segment::{segments_to_string, Segment};
use serde::Serialize;
use std::fmt;

/// Task status, encoded in the source by a leading glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    Done,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::Done, Status::Cancelled];

    pub fn glyph(&self) -> char {
        match self {
            Status::Pending => '☐',
            Status::Done => '✔',
            Status::Cancelled => '✘',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Status> {
        Status::ALL.into_iter().find(|status| status.glyph() == glyph)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Done => "done",
            Status::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task line: indentation, status glyph, separator whitespace, content.
///
/// `separator` is the raw whitespace between the glyph and the content. It is
/// a single space or tab run for well-formed lines and may be empty for
/// degenerate ones such as `☐` or `☐x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub status: Status,
    pub indent: String,
    pub separator: String,
    pub content: Vec<Segment>,
    pub location: Option<Location>,
    pub ending: LineEnding,
}

impl Task {
    pub fn new(status: Status, content: Vec<Segment>) -> Self {
        Self {
            status,
            indent: String::new(),
            separator: " ".to_string(),
            content,
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

    pub fn with_ending(mut self, ending: LineEnding) -> Self {
        self.ending = ending;
        self
    }

    /// Content as written, tags included
    pub fn content_string(&self) -> String {
        segments_to_string(&self.content)
    }

    /// Plain text of the content with tags left out
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|segment| segment.as_text())
            .collect()
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }
}

impl AstNode for Task {
    fn node_type(&self) -> &'static str {
        "Task"
    }
    fn display_label(&self) -> String {
        format!("{} {}", self.status.glyph(), self.content_string())
    }
    fn location(&self) -> Option<Location> {
        self.location
    }
}

impl Tagged for Task {
    fn segments(&self) -> &[Segment] {
        &self.content
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task({}, '{}', {} tags)",
            self.status,
            self.content_string(),
            self.tags().len()
        )
    }
}
