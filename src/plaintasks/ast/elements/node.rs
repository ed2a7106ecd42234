//! Node enum definition

use super::super::line_ending::LineEnding;
use super::super::span::{Location, Position};
use super::super::traits::AstNode;
use super::comment::Comment;
use super::empty_line::EmptyLine;
use super::project::Project;
use super::task::Task;
use serde::Serialize;
use std::fmt;

/// Node represents any element that can appear as a line of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Project(Project),
    Task(Task),
    Comment(Comment),
    EmptyLine(EmptyLine),
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Project(p) => p.node_type(),
            Node::Task(t) => t.node_type(),
            Node::Comment(c) => c.node_type(),
            Node::EmptyLine(e) => e.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Project(p) => p.display_label(),
            Node::Task(t) => t.display_label(),
            Node::Comment(c) => c.display_label(),
            Node::EmptyLine(e) => e.display_label(),
        }
    }

    fn location(&self) -> Option<Location> {
        match self {
            Node::Project(p) => p.location(),
            Node::Task(t) => t.location(),
            Node::Comment(c) => c.location(),
            Node::EmptyLine(e) => e.location(),
        }
    }
}

impl Node {
    /// Raw leading whitespace of the line
    pub fn indent(&self) -> &str {
        match self {
            Node::Project(p) => &p.indent,
            Node::Task(t) => &t.indent,
            Node::Comment(c) => &c.indent,
            Node::EmptyLine(e) => &e.whitespace,
        }
    }

    pub fn ending(&self) -> LineEnding {
        match self {
            Node::Project(p) => p.ending,
            Node::Task(t) => t.ending,
            Node::Comment(c) => c.ending,
            Node::EmptyLine(e) => e.ending,
        }
    }

    /// Zero-based line this node was parsed from
    pub fn line(&self) -> Option<usize> {
        self.location().map(|location| location.start.line)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.location()
            .is_some_and(|location| location.contains(position))
    }

    pub fn as_task(&self) -> Option<&Task> {
        match self {
            Node::Task(task) => Some(task),
            _ => None,
        }
    }

    pub fn as_project(&self) -> Option<&Project> {
        match self {
            Node::Project(project) => Some(project),
            _ => None,
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Node::Task(_))
    }

    pub fn is_project(&self) -> bool {
        matches!(self, Node::Project(_))
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    pub fn is_empty_line(&self) -> bool {
        matches!(self, Node::EmptyLine(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Project(p) => write!(f, "{}", p),
            Node::Task(t) => write!(f, "{}", t),
            Node::Comment(c) => write!(f, "{}", c),
            Node::EmptyLine(_) => write!(f, "EmptyLine"),
        }
    }
}
