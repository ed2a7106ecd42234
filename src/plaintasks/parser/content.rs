//! Task and project content scanner
//!
//! Splits the tokens of a task's content (or a project's tail) into an
//! alternating sequence of text runs and tags.
//!
//! The scanner is a small state machine over lexer tokens:
//!
//! ```text
//!   InText ──@──> AfterAt ──word──> InTagName ──(…)──> InText (tag with value)
//!                    │                  │
//!                    └─ anything else: `@` becomes text
//!                                       └─ anything else, `()`, or a `(` with
//!                                          no `)` later on the line: tag
//!                                          without value, `(` rescanned as text
//! ```
//!
//! Text accumulates in a buffer that is only flushed when a tag is emitted, so
//! adjacent text runs are always merged. Whether a value group closes is read
//! from a table of next-`)` indices built in one backward pass, so every token
//! is visited a bounded number of times and scanning stays linear.

use crate::plaintasks::ast::{push_segment, Segment, SourceLocation, Tag};
use crate::plaintasks::lexer::{tokenize_with_spans, Token};
use std::ops::Range;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    InText,
    /// Saw `@` at token index `at`
    AfterAt { at: usize },
    /// Saw `@name`, the name being token `name`
    InTagName { at: usize, name: usize },
}

/// For every token index, the index of the first `)` at or after it, stopping
/// at a newline
fn close_parens(tokens: &[(Token, Range<usize>)]) -> Vec<Option<usize>> {
    let mut next = vec![None; tokens.len() + 1];
    for (i, (token, _)) in tokens.iter().enumerate().rev() {
        next[i] = match token {
            Token::CloseParen => Some(i),
            Token::Newline => None,
            _ => next[i + 1],
        };
    }
    next
}

/// Scans content tokens against the source they were lexed from.
pub struct ContentScanner<'a> {
    source: &'a str,
    locator: Option<&'a SourceLocation>,
}

impl<'a> ContentScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            locator: None,
        }
    }

    /// Attach tag locations computed against `locator`
    pub fn with_locator(mut self, locator: &'a SourceLocation) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Scan a run of content tokens. Carriage returns are skipped.
    pub fn scan(&self, tokens: &[(Token, Range<usize>)]) -> Vec<Segment> {
        let tokens: Vec<(Token, Range<usize>)> = tokens
            .iter()
            .filter(|(token, _)| !matches!(token, Token::CarriageReturn))
            .cloned()
            .collect();
        let next_close = close_parens(&tokens);

        let mut segments = Vec::new();
        let mut text = String::new();
        let mut state = ScanState::InText;
        let mut i = 0;

        loop {
            let current = tokens.get(i).map(|(token, _)| *token);
            match (state, current) {
                (ScanState::InText, None) => break,
                (ScanState::InText, Some(Token::At)) => {
                    state = ScanState::AfterAt { at: i };
                    i += 1;
                }
                (ScanState::InText, Some(_)) => {
                    text.push_str(self.slice(&tokens[i].1));
                    i += 1;
                }

                (ScanState::AfterAt { at }, Some(Token::Word)) => {
                    state = ScanState::InTagName { at, name: i };
                    i += 1;
                }
                (ScanState::AfterAt { .. }, _) => {
                    // Lone `@`: plain text, rescan the current token
                    text.push('@');
                    state = ScanState::InText;
                }

                (ScanState::InTagName { at, name }, Some(Token::OpenParen)) => {
                    let group = match next_close[i + 1] {
                        Some(close) if close > i + 1 => Some((i, close)),
                        // Empty or unterminated group: the tag ends at its
                        // name and the `(` is rescanned as text
                        _ => None,
                    };
                    let tag = self.build_tag(&tokens, at, name, group);
                    flush_tag(&mut segments, &mut text, tag);
                    state = ScanState::InText;
                    if let Some((_, close)) = group {
                        i = close + 1;
                    }
                }
                (ScanState::InTagName { at, name }, _) => {
                    let tag = self.build_tag(&tokens, at, name, None);
                    flush_tag(&mut segments, &mut text, tag);
                    state = ScanState::InText;
                }
            }
        }

        push_segment(&mut segments, Segment::text(text));
        segments
    }

    fn slice(&self, range: &Range<usize>) -> &'a str {
        &self.source[range.clone()]
    }

    /// Build the tag spanning `at..=name`, or `at..=close` when a value group
    /// `(open, close)` is given.
    fn build_tag(
        &self,
        tokens: &[(Token, Range<usize>)],
        at: usize,
        name: usize,
        group: Option<(usize, usize)>,
    ) -> Tag {
        let tag_name = self.slice(&tokens[name].1);
        let (end, value) = match group {
            Some((open, close)) => {
                let value: String = tokens[open + 1..close]
                    .iter()
                    .map(|(_, range)| self.slice(range))
                    .collect();
                (tokens[close].1.end, Some(value))
            }
            None => (tokens[name].1.end, None),
        };
        let range = tokens[at].1.start..end;
        let location = self
            .locator
            .map(|locator| locator.range_to_location(&range));

        trace!(name = tag_name, value = ?value, span = ?range, "tag");

        Tag {
            name: tag_name.to_string(),
            value,
            location,
        }
    }
}

fn flush_tag(segments: &mut Vec<Segment>, text: &mut String, tag: Tag) {
    push_segment(segments, Segment::text(std::mem::take(text)));
    segments.push(Segment::Tag(tag));
}

/// Scan a standalone content fragment, such as the text of a line being
/// turned into a task. Tags carry no locations.
pub fn scan_content(content: &str) -> Vec<Segment> {
    let tokens = tokenize_with_spans(content);
    ContentScanner::new(content).scan(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn text(s: &str) -> Segment {
        Segment::text(s)
    }

    fn tag(name: &str) -> Segment {
        Segment::Tag(Tag::new(name))
    }

    fn tag_with(name: &str, value: &str) -> Segment {
        Segment::Tag(Tag::with_value(name, value))
    }

    #[test]
    fn test_plain_text_is_one_run() {
        assert_eq!(scan_content("buy milk"), vec![text("buy milk")]);
    }

    #[test]
    fn test_text_then_tag() {
        assert_eq!(scan_content("skip @low"), vec![text("skip "), tag("low")]);
    }

    #[test]
    fn test_tag_with_value_between_text() {
        assert_eq!(
            scan_content("call @person(Alice) tomorrow"),
            vec![
                text("call "),
                tag_with("person", "Alice"),
                text(" tomorrow")
            ]
        );
    }

    #[test]
    fn test_leading_and_adjacent_tags() {
        assert_eq!(
            scan_content("@a@b(1) x"),
            vec![tag("a"), tag_with("b", "1"), text(" x")]
        );
    }

    #[test]
    fn test_lone_at_is_text() {
        assert_eq!(
            scan_content("mail me @ home"),
            vec![text("mail me @ home")]
        );
        assert_eq!(scan_content("trailing @"), vec![text("trailing @")]);
        assert_eq!(scan_content("@@x"), vec![text("@"), tag("x")]);
    }

    #[test]
    fn test_at_before_digit_is_text() {
        assert_eq!(scan_content("meet @2pm"), vec![text("meet @2pm")]);
    }

    #[test]
    fn test_email_like_text_yields_tag() {
        assert_eq!(
            scan_content("bob@example.com"),
            vec![text("bob"), tag("example"), text(".com")]
        );
    }

    #[test]
    fn test_tag_name_charset() {
        assert_eq!(
            scan_content("@due-date_2!"),
            vec![tag("due-date_2"), text("!")]
        );
    }

    #[test]
    fn test_unterminated_value_keeps_tag_and_rescans_group() {
        assert_eq!(
            scan_content("x @due(friday"),
            vec![text("x "), tag("due"), text("(friday")]
        );
    }

    #[test]
    fn test_unterminated_value_group_with_inner_tag() {
        assert_eq!(
            scan_content("@a(@b"),
            vec![tag("a"), text("("), tag("b")]
        );
    }

    #[test]
    fn test_close_paren_table() {
        let source = "a(b)(\n)";
        let tokens = tokenize_with_spans(source);
        // a ( b ) ( \n )
        assert_eq!(
            close_parens(&tokens),
            vec![Some(3), Some(3), Some(3), Some(3), None, None, Some(6), None]
        );
    }

    #[test]
    fn test_repeated_unterminated_groups_scan_in_linear_time() {
        let repeats = 50_000;
        let content = "@a(".repeat(repeats);
        let started = Instant::now();
        let segments = scan_content(&content);
        let elapsed = started.elapsed();

        assert_eq!(segments.len(), repeats * 2);
        assert_eq!(segments[0], tag("a"));
        assert_eq!(segments[1], text("("));
        assert_eq!(segments.last(), Some(&text("(")));
        // Each token is visited a bounded number of times
        assert!(
            elapsed < Duration::from_secs(5),
            "scanning {} groups took {:?}",
            repeats,
            elapsed
        );
    }

    #[test]
    fn test_unterminated_group_after_closed_ones() {
        assert_eq!(
            scan_content("@a(1) @b(2 @c(3)"),
            vec![
                tag_with("a", "1"),
                text(" "),
                tag_with("b", "2 @c(3"),
            ]
        );
        assert_eq!(
            scan_content("@a(1) @b(2"),
            vec![tag_with("a", "1"), text(" "), tag("b"), text("(2")]
        );
    }

    #[test]
    fn test_empty_value_group() {
        assert_eq!(scan_content("@a() x"), vec![tag("a"), text("() x")]);
    }

    #[test]
    fn test_value_stops_at_first_close_paren() {
        assert_eq!(
            scan_content("@note(a (b) c)"),
            vec![tag_with("note", "a (b"), text(" c)")]
        );
    }

    #[test]
    fn test_value_keeps_raw_text() {
        assert_eq!(
            scan_content("@done(24-05-01 10:00) ok"),
            vec![tag_with("done", "24-05-01 10:00"), text(" ok")]
        );
        assert_eq!(scan_content("@v( )"), vec![tag_with("v", " ")]);
        assert_eq!(scan_content("@v(@w)"), vec![tag_with("v", "@w")]);
    }

    #[test]
    fn test_space_between_name_and_group_ends_tag() {
        assert_eq!(
            scan_content("@a (b)"),
            vec![tag("a"), text(" (b)")]
        );
    }

    #[test]
    fn test_carriage_returns_are_skipped() {
        assert_eq!(scan_content("a\rb @c\r"), vec![text("ab "), tag("c")]);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(scan_content(""), vec![]);
    }

    #[test]
    fn test_text_runs_never_adjacent() {
        let segments = scan_content("a @ b @ c @x d @ e");
        for pair in segments.windows(2) {
            assert!(
                !(pair[0].as_text().is_some() && pair[1].as_text().is_some()),
                "adjacent text runs in {:?}",
                segments
            );
        }
    }

    #[test]
    fn test_tag_locations_from_locator() {
        let source = "☐ a\n  ☐ call @person(Alice)";
        let locator = SourceLocation::new(source);
        let tokens = tokenize_with_spans(source);
        // The tag starts at byte 17, after "  ☐ call " on the second line
        let content: Vec<_> = tokens
            .into_iter()
            .filter(|(_, range)| range.start >= 17)
            .collect();
        let segments = ContentScanner::new(source)
            .with_locator(&locator)
            .scan(&content);
        let tag = segments[0].as_tag().unwrap();
        let location = tag.location.unwrap();
        assert_eq!(location.start.line, 1);
        // Columns are byte offsets within the line
        assert_eq!(location.start.column, 11);
        assert_eq!(location.end.column, 25);
    }
}
