//! Detokenizer for the todo format
//!
//! Writes a document back to source text. Every node keeps its raw
//! indentation, separator and line ending, so for input without stray
//! carriage returns `parse_document(s).to_source() == s`.

use super::registry::{FormatError, Formatter};
use crate::plaintasks::ast::{
    segments_to_string, Comment, Document, EmptyLine, Node, Project, Task,
};

/// Trait for converting a node back to its source representation
pub trait ToTodoString {
    fn to_todo_string(&self) -> String;
}

impl ToTodoString for Project {
    fn to_todo_string(&self) -> String {
        format!(
            "{}{}:{}{}",
            self.indent,
            self.name,
            segments_to_string(&self.tail),
            self.ending.as_str()
        )
    }
}

impl ToTodoString for Task {
    fn to_todo_string(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.indent,
            self.status.glyph(),
            self.separator,
            self.content_string(),
            self.ending.as_str()
        )
    }
}

impl ToTodoString for Comment {
    fn to_todo_string(&self) -> String {
        format!("{}{}{}", self.indent, self.text, self.ending.as_str())
    }
}

impl ToTodoString for EmptyLine {
    fn to_todo_string(&self) -> String {
        format!("{}{}", self.whitespace, self.ending.as_str())
    }
}

impl ToTodoString for Node {
    fn to_todo_string(&self) -> String {
        match self {
            Node::Project(project) => project.to_todo_string(),
            Node::Task(task) => task.to_todo_string(),
            Node::Comment(comment) => comment.to_todo_string(),
            Node::EmptyLine(empty) => empty.to_todo_string(),
        }
    }
}

impl ToTodoString for Document {
    fn to_todo_string(&self) -> String {
        self.items.iter().map(Node::to_todo_string).collect()
    }
}

impl Document {
    /// Re-serialize the document to todo source text
    pub fn to_source(&self) -> String {
        self.to_todo_string()
    }
}

pub struct SourceFormatter;

impl Formatter for SourceFormatter {
    fn name(&self) -> &str {
        "source"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(doc.to_source())
    }

    fn description(&self) -> &str {
        "Todo source text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plaintasks::ast::{Segment, Status, Tag};
    use crate::plaintasks::parser::parse_document;

    #[test]
    fn test_round_trip_sample() {
        let source = "Work: @today\n  ☐ call @person(Alice) tomorrow\n  ✔ ship\t@done(24-05-01 10:00)\n\n   \nnotes @ here\r\n✘ skip";
        assert_eq!(parse_document(source).to_source(), source);
    }

    #[test]
    fn test_round_trip_degenerate_lines() {
        for source in ["☐", "☐x", "✔ \t", "Note: call Bob", "@a(", "x @y()", ":"] {
            assert_eq!(parse_document(source).to_source(), source);
        }
    }

    #[test]
    fn test_built_task_to_string() {
        let task = Task::new(
            Status::Done,
            vec![Segment::text("ship "), Segment::Tag(Tag::with_value("done", "now"))],
        )
        .with_indent("    ");
        assert_eq!(task.to_todo_string(), "    ✔ ship @done(now)\n");
    }

    #[test]
    fn test_stray_carriage_return_is_dropped() {
        assert_eq!(parse_document("☐ a\rb\n").to_source(), "☐ ab\n");
    }
}
