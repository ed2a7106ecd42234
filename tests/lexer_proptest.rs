//! Property-based tests for the lexer

use plaintasks::plaintasks::lexer::{lex, tokenize_with_spans, Token};
use proptest::prelude::*;

/// Sample document snapshot tests
mod sample_document_tests {
    use super::*;

    #[test]
    fn test_groceries_first_lines_tokenization() {
        let content = include_str!("../docs/samples/groceries.todo");
        let tokens: Vec<Token> = lex(content)
            .into_iter()
            .take(2)
            .flat_map(|line| line.tokens.into_iter().map(|(token, _)| token))
            .collect();

        insta::assert_debug_snapshot!(tokens, @r"
        [
            Word,
            Colon,
            Whitespace,
            At,
            Word,
            Whitespace,
            PendingMarker,
            Whitespace,
            Word,
            Whitespace,
            Word,
            Whitespace,
            At,
            Word,
        ]
        ");
    }
}

proptest! {
    #[test]
    fn test_tokenize_never_panics(input in "\\PC*") {
        let _tokens = tokenize_with_spans(&input);
    }

    #[test]
    fn test_spans_cover_input(input in "[a-zA-Z0-9@():☐✔✘ \t\r\n.,-]{0,80}") {
        // Spans are contiguous, non-empty and cover every byte
        let tokens = tokenize_with_spans(&input);
        let mut offset = 0;
        for (_, span) in &tokens {
            prop_assert_eq!(span.start, offset);
            prop_assert!(span.end > span.start);
            offset = span.end;
        }
        prop_assert_eq!(offset, input.len());
    }

    #[test]
    fn test_line_ranges_exclude_terminators(input in "[a-z☐ \r\n]{0,60}") {
        for line in lex(&input) {
            let content = &input[line.range.clone()];
            prop_assert!(!content.contains('\n'));
            prop_assert_eq!(&input[line.full_range()], format!("{}{}", content, line.ending.as_str()));
        }
    }
}
