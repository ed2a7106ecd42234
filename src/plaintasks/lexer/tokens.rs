//! Token definitions for the todo format
//!
//! This module defines all the tokens that can be produced by the todo lexer.
//! The tokens are defined using the logos derive macro, which compiles them into
//! a single DFA: scanning is linear and never backtracks.
//!
//! The token set is deliberately coarse. Every character of the input belongs to
//! exactly one token, and the character classes of `Word` and `Text` are disjoint
//! at their first character, so no two patterns ever compete for the same input.
//! Deciding what a token *means* (tag name, project name, plain text) is left to
//! the line classifier and the content scanner.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in the todo format
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Token {
    // Status glyphs
    #[token("☐")]
    PendingMarker,
    #[token("✔")]
    DoneMarker,
    #[token("✘")]
    CancelledMarker,

    // Tag syntax
    #[token("@")]
    At,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Project terminator
    #[token(":")]
    Colon,

    // Horizontal whitespace (indentation and separators)
    #[regex(r"[ \t]+")]
    Whitespace,

    // Line breaks
    #[token("\n")]
    Newline,
    #[token("\r")]
    CarriageReturn,

    // Candidate tag name: ASCII letter, then letters, digits, `_` or `-`
    #[regex(r"[A-Za-z][A-Za-z0-9_-]*")]
    Word,

    // Everything else (catch-all, never starts with or contains an ASCII letter)
    #[regex(r"[^ \t\n\r@():☐✔✘A-Za-z]+")]
    Text,
}

impl Token {
    /// Check if this token is one of the three status glyphs
    pub fn is_status_marker(&self) -> bool {
        matches!(
            self,
            Token::PendingMarker | Token::DoneMarker | Token::CancelledMarker
        )
    }

    /// Check if this token is horizontal whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Check if this token terminates or decorates a line ending
    pub fn is_line_break(&self) -> bool {
        matches!(self, Token::Newline | Token::CarriageReturn)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::PendingMarker => "<pending-marker>",
            Token::DoneMarker => "<done-marker>",
            Token::CancelledMarker => "<cancelled-marker>",
            Token::At => "<at>",
            Token::OpenParen => "<open-paren>",
            Token::CloseParen => "<close-paren>",
            Token::Colon => "<colon>",
            Token::Whitespace => "<whitespace>",
            Token::Newline => "<newline>",
            Token::CarriageReturn => "<carriage-return>",
            Token::Word => "<word>",
            Token::Text => "<text>",
        };
        write!(f, "{}", name)
    }
}
