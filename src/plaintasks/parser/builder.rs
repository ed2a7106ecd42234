//! Document builder
//!
//! Turns classified source lines into AST nodes. Every line becomes exactly
//! one node; the builder never fails.

use super::content::ContentScanner;
use super::line_classification::{classify_line, indent_len, project_colon, LineType};
use crate::plaintasks::ast::{
    Comment, Document, EmptyLine, Location, Node, Project, SourceLocation, Status, Task,
};
use crate::plaintasks::lexer::{SourceLine, Token};
use std::ops::Range;

pub struct DocumentBuilder<'a> {
    source: &'a str,
    locator: SourceLocation,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            locator: SourceLocation::new(source),
        }
    }

    pub fn build(&self, lines: &[SourceLine]) -> Document {
        Document::with_items(lines.iter().map(|line| self.build_line(line)).collect())
    }

    pub fn build_line(&self, line: &SourceLine) -> Node {
        let tokens = line.significant_tokens();
        let indent_end = indent_len(&tokens);
        let indent = self.text_of(&tokens[..indent_end]);
        let body = &tokens[indent_end..];
        let location = Some(self.locator.range_to_location(&line.range));

        match classify_line(&tokens, self.source) {
            LineType::Project => self.build_project(body, indent, location, line),
            LineType::Task(status) => self.build_task(status, body, indent, location, line),
            LineType::Comment => Node::Comment(Comment {
                text: self.text_of(body),
                indent,
                location,
                ending: line.ending,
            }),
            LineType::EmptyLine => Node::EmptyLine(EmptyLine {
                whitespace: indent,
                location,
                ending: line.ending,
            }),
        }
    }

    fn build_project(
        &self,
        body: &[(Token, Range<usize>)],
        indent: String,
        location: Option<Location>,
        line: &SourceLine,
    ) -> Node {
        let colon = project_colon(body).unwrap_or(body.len());
        let tail = body.get(colon + 1..).unwrap_or_default();
        Node::Project(Project {
            name: self.text_of(&body[..colon]),
            indent,
            tail: self.scanner().scan(tail),
            location,
            ending: line.ending,
        })
    }

    fn build_task(
        &self,
        status: Status,
        body: &[(Token, Range<usize>)],
        indent: String,
        location: Option<Location>,
        line: &SourceLine,
    ) -> Node {
        // body[0] is the glyph
        let rest = body.get(1..).unwrap_or_default();
        let separator_end = indent_len(rest);
        Node::Task(Task {
            status,
            indent,
            separator: self.text_of(&rest[..separator_end]),
            content: self.scanner().scan(&rest[separator_end..]),
            location,
            ending: line.ending,
        })
    }

    fn scanner(&self) -> ContentScanner<'_> {
        ContentScanner::new(self.source).with_locator(&self.locator)
    }

    fn text_of(&self, tokens: &[(Token, Range<usize>)]) -> String {
        tokens
            .iter()
            .map(|(_, range)| &self.source[range.clone()])
            .collect()
    }
}
