//! Document element definition

use super::super::error::PositionLookupError;
use super::super::span::Position;
use super::super::traits::{AstNode, Tagged};
use super::node::Node;
use super::project::Project;
use super::tag::Tag;
use super::task::{Status, Task};
use serde::Serialize;
use std::fmt;

/// A parsed todo list: one node per source line, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub items: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Node>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.items.iter()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.items.iter().filter_map(Node::as_task)
    }

    pub fn tasks_with_status(&self, status: Status) -> impl Iterator<Item = &Task> {
        self.tasks().filter(move |task| task.status == status)
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.items.iter().filter_map(Node::as_project)
    }

    /// Every tag of every task and project, in source order
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.items.iter().flat_map(|node| match node {
            Node::Task(task) => task.tags(),
            Node::Project(project) => project.tags(),
            Node::Comment(_) | Node::EmptyLine(_) => Vec::new(),
        })
    }

    /// The node parsed from the given zero-based line
    pub fn node_at_line(&self, line: usize) -> Result<&Node, PositionLookupError> {
        self.items
            .iter()
            .find(|node| node.line() == Some(line))
            .ok_or(PositionLookupError::NotFound { line, column: 0 })
    }

    /// Nodes (and tags) whose location contains the position, outermost first
    pub fn elements_at(&self, position: Position) -> Vec<&dyn AstNode> {
        let mut found: Vec<&dyn AstNode> = Vec::new();
        for node in self.items.iter().filter(|node| node.contains(position)) {
            found.push(node);
            let tags = match node {
                Node::Task(task) => task.tags(),
                Node::Project(project) => project.tags(),
                Node::Comment(_) | Node::EmptyLine(_) => Vec::new(),
            };
            for tag in tags {
                if tag
                    .location
                    .is_some_and(|location| location.contains(position))
                {
                    found.push(tag);
                }
            }
        }
        found
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document({} items, {} tasks, {} projects)",
            self.items.len(),
            self.tasks().count(),
            self.projects().count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::comment::Comment;
    use super::super::segment::Segment;
    use super::*;

    fn sample() -> Document {
        let mut project = Project::new("Work");
        project.tail = vec![Segment::text(" "), Segment::Tag(Tag::new("today"))];
        Document::with_items(vec![
            Node::Project(project),
            Node::Task(Task::new(
                Status::Pending,
                vec![Segment::text("a "), Segment::Tag(Tag::new("high"))],
            )),
            Node::Task(Task::new(Status::Done, vec![Segment::text("b")])),
            Node::Comment(Comment::new("note @not-a-tag")),
        ])
    }

    #[test]
    fn test_document_iterators() {
        let doc = sample();
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.tasks().count(), 2);
        assert_eq!(doc.tasks_with_status(Status::Done).count(), 1);
        assert_eq!(doc.projects().count(), 1);
        let tags: Vec<_> = doc.tags().map(|t| t.name.as_str()).collect();
        assert_eq!(tags, vec!["today", "high"]);
    }

    #[test]
    fn test_node_at_line_without_locations() {
        let doc = sample();
        assert_eq!(
            doc.node_at_line(0),
            Err(PositionLookupError::NotFound { line: 0, column: 0 })
        );
    }

    #[test]
    fn test_document_display() {
        assert_eq!(
            sample().to_string(),
            "Document(4 items, 2 tasks, 1 projects)"
        );
    }
}
