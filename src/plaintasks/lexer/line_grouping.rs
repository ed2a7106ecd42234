//! Line Grouping
//!
//! Groups flat tokens into `SourceLine`s, one per logical line.
//!
//! A line ends at a `Newline` token. A `CarriageReturn` directly before the
//! newline is folded into the line ending (`CrLf`); any other carriage return
//! stays in the line's token list and is skipped by every consumer. A final run
//! of tokens without a newline forms an unterminated last line, while the empty
//! remainder after a final newline forms no line at all.

use crate::plaintasks::ast::LineEnding;
use crate::plaintasks::lexer::tokens::Token;
use std::ops::Range as ByteRange;

/// A single logical line of the source, with the terminator split off.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    /// Zero-based line number
    pub number: usize,
    /// Tokens of the line content, terminator excluded
    pub tokens: Vec<(Token, ByteRange<usize>)>,
    /// Byte range of the line content, terminator excluded
    pub range: ByteRange<usize>,
    pub ending: LineEnding,
}

impl SourceLine {
    /// Tokens of the line with stray carriage returns removed.
    pub fn significant_tokens(&self) -> Vec<(Token, ByteRange<usize>)> {
        self.tokens
            .iter()
            .filter(|(token, _)| !matches!(token, Token::CarriageReturn))
            .cloned()
            .collect()
    }

    /// Byte range of the whole line including its terminator
    pub fn full_range(&self) -> ByteRange<usize> {
        self.range.start..self.range.end + self.ending.as_str().len()
    }
}

/// Group flat tokens into lines.
pub fn group_into_lines(tokens: Vec<(Token, ByteRange<usize>)>) -> Vec<SourceLine> {
    let mut lines = Vec::new();
    let mut current_line: Vec<(Token, ByteRange<usize>)> = Vec::new();
    let mut line_start = 0;

    for (token, span) in tokens {
        if !matches!(token, Token::Newline) {
            current_line.push((token, span));
            continue;
        }

        let carriage_return = match current_line.last() {
            Some((Token::CarriageReturn, cr_span)) if cr_span.end == span.start => {
                Some(cr_span.start)
            }
            _ => None,
        };
        let (content_end, ending) = match carriage_return {
            Some(cr_start) => {
                current_line.pop();
                (cr_start, LineEnding::CrLf)
            }
            None => (span.start, LineEnding::Lf),
        };

        lines.push(SourceLine {
            number: lines.len(),
            tokens: std::mem::take(&mut current_line),
            range: line_start..content_end,
            ending,
        });
        line_start = span.end;
    }

    // Handle any remaining tokens (if input doesn't end with newline)
    if let Some((_, last_span)) = current_line.last() {
        let content_end = last_span.end;
        lines.push(SourceLine {
            number: lines.len(),
            tokens: current_line,
            range: line_start..content_end,
            ending: LineEnding::None,
        });
    }

    lines
}
