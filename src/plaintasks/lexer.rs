//! Lexer module for the todo format
//!
//! This module contains the tokenization logic for the todo format,
//! including token definitions, the lexer implementation and line grouping.
//!
//! Lexing happens in two passes:
//!
//! 1. A vanilla logos lexer turns the buffer into flat `(Token, span)` pairs.
//! 2. Line grouping splits those pairs at newlines into `SourceLine`s, folding
//!    `\r\n` into the line ending.
//!
//! Indentation is not normalized at this stage (or any other): leading
//! whitespace is kept verbatim and recorded on the resulting nodes.

pub mod lexer_impl;
pub mod line_grouping;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use line_grouping::{group_into_lines, SourceLine};
pub use tokens::Token;

/// Main lexer function that returns the source grouped into lines
pub fn lex(source: &str) -> Vec<SourceLine> {
    group_into_lines(tokenize_with_spans(source))
}
