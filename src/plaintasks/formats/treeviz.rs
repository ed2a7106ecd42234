//! Treeviz formatter for documents
//!
//! One line per node with box-drawing connectors. Tags of tasks and projects
//! are listed as children of their node.
//!
//! ```text
//! ├─ Project: Work
//! │ └─ Tag: @today
//! ├─ Task: ☐ call @person(Alice)
//! │ └─ Tag: @person(Alice)
//! └─ EmptyLine:
//! ```

use super::registry::{FormatError, Formatter};
use crate::plaintasks::ast::{AstNode, Document, Node, Tag, Tagged};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    for (i, item) in doc.items.iter().enumerate() {
        let is_last = i == doc.items.len() - 1;
        append_node(&mut result, item, "", is_last);
    }
    result
}

fn append_line(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&node.display_label(), 30);
    result.push_str(&format!("{}{} {}: {}", prefix, connector, node.node_type(), label));
    // Keep empty labels free of trailing whitespace
    while result.ends_with(' ') {
        result.pop();
    }
    result.push('\n');
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    append_line(result, node, prefix, is_last);

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    match node {
        Node::Project(project) => append_tags(result, &project.tags(), &new_prefix),
        Node::Task(task) => append_tags(result, &task.tags(), &new_prefix),
        Node::Comment(_) | Node::EmptyLine(_) => {}
    }
}

fn append_tags(result: &mut String, tags: &[&Tag], prefix: &str) {
    for (i, tag) in tags.iter().enumerate() {
        let is_last = i == tags.len() - 1;
        append_line(result, *tag, prefix, is_last);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "Tree with box-drawing connectors"
    }
}
