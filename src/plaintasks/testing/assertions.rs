//! Fluent assertion API for documents

use super::matchers::{TagMatch, TextMatch};
use crate::plaintasks::ast::{
    Comment, Document, Node, Project, Segment, Status, Tag, Tagged, Task,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of items in the document
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.items.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_items(&self.doc.items)
        );
        self
    }

    /// Assert the node kinds of all items, in order
    pub fn item_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.items.iter().map(node_kind).collect();
        assert_eq!(actual, expected, "Unexpected item types");
        self
    }

    /// Assert on a specific item by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.doc.items.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.items.len()
        );

        assertion(NodeAssertion {
            node: &self.doc.items[index],
            context: format!("items[{}]", index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn assert_project(self) -> ProjectAssertion<'a> {
        match self.node {
            Node::Project(project) => ProjectAssertion {
                project,
                context: self.context,
            },
            other => panic!("{}: Expected Project, found {}", self.context, other),
        }
    }

    pub fn assert_task(self) -> TaskAssertion<'a> {
        match self.node {
            Node::Task(task) => TaskAssertion {
                task,
                context: self.context,
            },
            other => panic!("{}: Expected Task, found {}", self.context, other),
        }
    }

    pub fn assert_comment(self) -> CommentAssertion<'a> {
        match self.node {
            Node::Comment(comment) => CommentAssertion {
                comment,
                context: self.context,
            },
            other => panic!("{}: Expected Comment, found {}", self.context, other),
        }
    }

    pub fn assert_empty_line(self) {
        assert!(
            self.node.is_empty_line(),
            "{}: Expected EmptyLine, found {}",
            self.context,
            self.node
        );
    }
}

// ============================================================================
// Project Assertions
// ============================================================================

pub struct ProjectAssertion<'a> {
    project: &'a Project,
    context: String,
}

impl<'a> ProjectAssertion<'a> {
    pub fn name(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(&self.project.name, &format!("{}.name", self.context));
        self
    }

    pub fn indent(self, expected: &str) -> Self {
        assert_eq!(
            self.project.indent, expected,
            "{}: Unexpected indentation",
            self.context
        );
        self
    }

    pub fn tag_names(self, expected: &[&str]) -> Self {
        assert_tag_names(&self.project.tags(), expected, &self.context);
        self
    }
}

// ============================================================================
// Task Assertions
// ============================================================================

pub struct TaskAssertion<'a> {
    task: &'a Task,
    context: String,
}

impl<'a> TaskAssertion<'a> {
    pub fn status(self, expected: Status) -> Self {
        assert_eq!(
            self.task.status, expected,
            "{}: Expected a {} task",
            self.context, expected
        );
        self
    }

    pub fn pending(self) -> Self {
        self.status(Status::Pending)
    }

    pub fn done(self) -> Self {
        self.status(Status::Done)
    }

    pub fn cancelled(self) -> Self {
        self.status(Status::Cancelled)
    }

    pub fn indent(self, expected: &str) -> Self {
        assert_eq!(
            self.task.indent, expected,
            "{}: Unexpected indentation",
            self.context
        );
        self
    }

    /// Match the plain text of the task, tags left out
    pub fn text(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(&self.task.text(), &format!("{}.text", self.context));
        self
    }

    /// Match the content as written, tags included
    pub fn content(self, expected: impl Into<TextMatch>) -> Self {
        expected.into().assert(
            &self.task.content_string(),
            &format!("{}.content", self.context),
        );
        self
    }

    pub fn segment_count(self, expected: usize) -> Self {
        assert_eq!(
            self.task.content.len(),
            expected,
            "{}: Expected {} segments, found {:?}",
            self.context,
            expected,
            self.task.content
        );
        self
    }

    pub fn tag_names(self, expected: &[&str]) -> Self {
        assert_tag_names(&self.task.tags(), expected, &self.context);
        self
    }

    /// Assert the first tag called `name` has the expected form
    pub fn tag(self, name: &str, expected: impl Into<TagMatch>) -> Self {
        let tag = self
            .task
            .tags()
            .into_iter()
            .find(|tag| tag.name == name)
            .unwrap_or_else(|| panic!("{}: No tag named '{}'", self.context, name));
        expected.into().assert(tag, &self.context);
        self
    }

    /// Assert a tag's value (`None` for a bare tag)
    pub fn tag_value(self, name: &str, expected: Option<&str>) -> Self {
        self.tag(name, expected)
    }

    /// Assert no two text segments are adjacent
    pub fn alternates(self) -> Self {
        for pair in self.task.content.windows(2) {
            assert!(
                !matches!(pair, [Segment::Text { .. }, Segment::Text { .. }]),
                "{}: Adjacent text segments in {:?}",
                self.context,
                self.task.content
            );
        }
        self
    }
}

// ============================================================================
// Comment Assertions
// ============================================================================

pub struct CommentAssertion<'a> {
    comment: &'a Comment,
    context: String,
}

impl<'a> CommentAssertion<'a> {
    pub fn text(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(&self.comment.text, &format!("{}.text", self.context));
        self
    }

    pub fn indent(self, expected: &str) -> Self {
        assert_eq!(
            self.comment.indent, expected,
            "{}: Unexpected indentation",
            self.context
        );
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn assert_tag_names(tags: &[&Tag], expected: &[&str], context: &str) {
    let actual: Vec<&str> = tags.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(actual, expected, "{}: Unexpected tags", context);
}

fn node_kind(node: &Node) -> &'static str {
    match node {
        Node::Project(_) => "project",
        Node::Task(_) => "task",
        Node::Comment(_) => "comment",
        Node::EmptyLine(_) => "empty-line",
    }
}

fn summarize_items(items: &[Node]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
