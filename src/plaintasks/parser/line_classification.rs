//! Line Classification
//!
//! Decides, for one line's tokens, which node kind the line becomes.
//!
//! Classification tries a fixed list of predicates and the first match wins:
//!
//! 1. Project: a name run, a colon, then optionally a whitespace run followed
//!    by directly adjacent tags and trailing whitespace
//! 2. Task: a status glyph right after the indentation
//! 3. Comment: any other non-blank line
//! 4. EmptyLine: nothing after the indentation
//!
//! A line like `Work:` could also be read as a comment, and `☐ a:` starts with
//! a glyph but ends with a colon. The order above is what settles these: a
//! glyph can never start a project name, so `☐ a:` is a task.
//!
//! The classifiers work on the line's significant tokens (carriage returns
//! already removed) and never look past the line.

use super::content::ContentScanner;
use crate::plaintasks::ast::{Segment, Status};
use crate::plaintasks::lexer::Token;
use std::ops::Range;
use tracing::trace;

pub type LineTokens = [(Token, Range<usize>)];

/// The kind of node a line produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    Project,
    Task(Status),
    Comment,
    EmptyLine,
}

impl LineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::Project => "project",
            LineType::Task(Status::Pending) => "pending-task",
            LineType::Task(Status::Done) => "done-task",
            LineType::Task(Status::Cancelled) => "cancelled-task",
            LineType::Comment => "comment",
            LineType::EmptyLine => "empty-line",
        }
    }
}

type Classifier = fn(&LineTokens, &str) -> Option<LineType>;

/// Classifiers in precedence order, highest first
pub const CLASSIFIERS: [(&str, Classifier); 4] = [
    ("project", classify_project),
    ("task", classify_task),
    ("comment", classify_comment),
    ("empty-line", classify_empty_line),
];

/// Determine the type of a line from its significant tokens.
pub fn classify_line(tokens: &LineTokens, source: &str) -> LineType {
    for (name, classifier) in CLASSIFIERS {
        if let Some(line_type) = classifier(tokens, source) {
            trace!(classifier = name, line_type = line_type.as_str(), "classified line");
            return line_type;
        }
    }
    // Unreachable: comment and empty-line together accept every line
    LineType::Comment
}

/// Number of leading whitespace tokens, i.e. the indentation
pub fn indent_len(tokens: &LineTokens) -> usize {
    tokens
        .iter()
        .take_while(|(token, _)| token.is_whitespace())
        .count()
}

/// Index (within `body`) of the colon ending a project name, if the body can
/// start a project name at all
pub fn project_colon(body: &LineTokens) -> Option<usize> {
    let (first, _) = body.first()?;
    if first.is_status_marker() || matches!(first, Token::Colon) {
        return None;
    }
    body.iter()
        .position(|(token, _)| matches!(token, Token::Colon))
}

/// Whether the tokens after a project colon are empty, or a whitespace run
/// followed by directly adjacent tags and optional trailing whitespace
fn is_project_tail(tail: &LineTokens, source: &str) -> bool {
    match tail.first() {
        None => return true,
        Some((token, _)) if !token.is_whitespace() => return false,
        Some(_) => {}
    }
    let segments = ContentScanner::new(source).scan(tail);
    let Some((Segment::Text { text: leading }, rest)) = segments.split_first() else {
        return false;
    };
    if !is_blank(leading) {
        return false;
    }
    let tags = rest
        .iter()
        .take_while(|segment| matches!(segment, Segment::Tag(_)))
        .count();
    match &rest[tags..] {
        [] => true,
        [Segment::Text { text: trailing }] => is_blank(trailing),
        _ => false,
    }
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c == ' ' || c == '\t')
}

fn classify_project(tokens: &LineTokens, source: &str) -> Option<LineType> {
    let body = &tokens[indent_len(tokens)..];
    let colon = project_colon(body)?;
    is_project_tail(&body[colon + 1..], source).then_some(LineType::Project)
}

fn classify_task(tokens: &LineTokens, source: &str) -> Option<LineType> {
    let (token, range) = tokens.get(indent_len(tokens))?;
    if !token.is_status_marker() {
        return None;
    }
    let glyph = source[range.clone()].chars().next()?;
    Status::from_glyph(glyph).map(LineType::Task)
}

fn classify_comment(tokens: &LineTokens, _source: &str) -> Option<LineType> {
    match tokens.get(indent_len(tokens)) {
        Some((token, _)) if !token.is_status_marker() => Some(LineType::Comment),
        _ => None,
    }
}

fn classify_empty_line(tokens: &LineTokens, _source: &str) -> Option<LineType> {
    (indent_len(tokens) == tokens.len()).then_some(LineType::EmptyLine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plaintasks::lexer::tokenize_with_spans;

    fn classify(line: &str) -> LineType {
        let tokens: Vec<_> = tokenize_with_spans(line)
            .into_iter()
            .filter(|(token, _)| !matches!(token, Token::CarriageReturn))
            .collect();
        classify_line(&tokens, line)
    }

    #[test]
    fn test_classifier_order() {
        let names: Vec<_> = CLASSIFIERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["project", "task", "comment", "empty-line"]);
    }

    #[test]
    fn test_project_lines() {
        assert_eq!(classify("work:"), LineType::Project);
        assert_eq!(classify("  Sub project:"), LineType::Project);
        assert_eq!(classify("Work: @today"), LineType::Project);
        assert_eq!(classify("Work:\t@a(1)@b "), LineType::Project);
        assert_eq!(classify("Work: @a@b"), LineType::Project);
        assert_eq!(classify("Work:   "), LineType::Project);
        assert_eq!(classify("Buy @milk:"), LineType::Project);
    }

    #[test]
    fn test_colon_lines_that_are_comments() {
        assert_eq!(classify("Note: call Bob"), LineType::Comment);
        assert_eq!(classify("Work:@today"), LineType::Comment);
        assert_eq!(classify("Work: @a @b"), LineType::Comment);
        assert_eq!(classify("Work:\t@a(1)  @b "), LineType::Comment);
        assert_eq!(classify("Work: @due(friday"), LineType::Comment);
        assert_eq!(classify("a:b:"), LineType::Comment);
        assert_eq!(classify(":"), LineType::Comment);
        assert_eq!(classify(": heading"), LineType::Comment);
    }

    #[test]
    fn test_project_outranks_nothing_that_starts_with_a_glyph() {
        assert_eq!(classify("☐ a:"), LineType::Task(Status::Pending));
        assert_eq!(classify("✔ shipped:"), LineType::Task(Status::Done));
    }

    #[test]
    fn test_task_lines() {
        assert_eq!(classify("☐ buy milk"), LineType::Task(Status::Pending));
        assert_eq!(classify("  ✔ done thing"), LineType::Task(Status::Done));
        assert_eq!(classify("\t✘ skip @low"), LineType::Task(Status::Cancelled));
        assert_eq!(classify("☐"), LineType::Task(Status::Pending));
        assert_eq!(classify("☐x"), LineType::Task(Status::Pending));
    }

    #[test]
    fn test_comment_and_empty_lines() {
        assert_eq!(classify("just some notes"), LineType::Comment);
        assert_eq!(classify("note about @ symbol"), LineType::Comment);
        assert_eq!(classify("x ☐ later glyph"), LineType::Comment);
        assert_eq!(classify(""), LineType::EmptyLine);
        assert_eq!(classify("   \t"), LineType::EmptyLine);
        assert_eq!(classify(" \r "), LineType::EmptyLine);
    }

    #[test]
    fn test_project_colon_skips_glyph_and_colon_starts() {
        let tokens = tokenize_with_spans("☐ a:");
        assert_eq!(project_colon(&tokens), None);
        let tokens = tokenize_with_spans("a b: c");
        assert_eq!(project_colon(&tokens), Some(3));
    }
}
