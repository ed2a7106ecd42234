//! Implementation of the todo lexer
//!
//! This module provides convenience functions for tokenizing todo text.
//! The actual tokenization is handled entirely by logos.

use crate::plaintasks::lexer::tokens::Token;
use logos::Logos;
use std::ops::Range;
use tracing::trace;

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
///
/// The token classes cover every character, but should logos ever report an
/// unmatched slice it is recovered as `Text` so that no input byte is lost.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(Token::Text);
        trace!("Token {:?} at {:?}: {:?}", token, lexer.span(), lexer.slice());
        tokens.push((token, lexer.span()));
    }

    tokens
}
