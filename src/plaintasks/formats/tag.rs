//! XML-like AST tag serialization
//!
//! Serializes documents to an XML-like format that directly reflects the AST.
//!
//! ## Format
//!
//! - Node type → tag name
//! - Status, project name, tag name and value → attributes
//! - Text runs and comment text → text content
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <project name="Work"><tag name="today"/></project>
//!   <task status="pending"><text>call </text><tag name="person" value="Alice"/></task>
//!   <comment>notes</comment>
//!   <empty-line/>
//! </document>
//! ```

use super::registry::{FormatError, Formatter};
use crate::plaintasks::ast::{Document, Node, Segment, Tag};

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for item in &doc.items {
        serialize_node(item, 1, &mut result);
    }
    result.push_str("</document>");
    result
}

fn serialize_node(node: &Node, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    match node {
        Node::Project(project) => {
            output.push_str(&format!(
                "{}<project name=\"{}\"",
                indent,
                escape_xml(&project.name)
            ));
            let tags: Vec<&Tag> = project
                .tail
                .iter()
                .filter_map(Segment::as_tag)
                .collect();
            if tags.is_empty() {
                output.push_str("/>\n");
            } else {
                output.push('>');
                for tag in tags {
                    serialize_tag(tag, output);
                }
                output.push_str("</project>\n");
            }
        }
        Node::Task(task) => {
            output.push_str(&format!("{}<task status=\"{}\">", indent, task.status));
            for segment in &task.content {
                match segment {
                    Segment::Text { text } => {
                        output.push_str(&format!("<text>{}</text>", escape_xml(text)));
                    }
                    Segment::Tag(tag) => serialize_tag(tag, output),
                }
            }
            output.push_str("</task>\n");
        }
        Node::Comment(comment) => {
            output.push_str(&format!(
                "{}<comment>{}</comment>\n",
                indent,
                escape_xml(&comment.text)
            ));
        }
        Node::EmptyLine(_) => {
            output.push_str(&format!("{}<empty-line/>\n", indent));
        }
    }
}

fn serialize_tag(tag: &Tag, output: &mut String) {
    output.push_str(&format!("<tag name=\"{}\"", escape_xml(&tag.name)));
    if let Some(value) = &tag.value {
        output.push_str(&format!(" value=\"{}\"", escape_xml(value)));
    }
    output.push_str("/>");
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }

    fn description(&self) -> &str {
        "XML-like tag format"
    }
}
