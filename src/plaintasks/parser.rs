//! Parser for the todo format
//!
//! The parser runs over the lines produced by the lexer. Each line is
//! classified on its own (see `line_classification`) and then built into a
//! node; task content and project tails go through the content scanner to
//! separate text from tags.
//!
//! Parsing is total. Every input produces a `Document` with one node per line,
//! and malformed tag syntax degrades to text instead of failing.

pub mod builder;
pub mod content;
pub mod line_classification;


pub use builder::DocumentBuilder;
pub use content::{scan_content, ContentScanner};
pub use line_classification::{classify_line, LineType};

use crate::plaintasks::ast::Document;
use crate::plaintasks::lexer::lex;
use tracing::debug;

/// Parse a todo document.
pub fn parse_document(source: &str) -> Document {
    let lines = lex(source);
    let document = DocumentBuilder::new(source).build(&lines);
    debug!(
        lines = lines.len(),
        tasks = document.tasks().count(),
        projects = document.projects().count(),
        "parsed document"
    );
    document
}
