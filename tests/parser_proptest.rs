//! Property-based tests for the parser
//!
//! Generated documents mix well-formed lines with the degenerate shapes the
//! grammar has to absorb: stray `@`, broken value groups, colons in odd
//! places, carriage returns and arbitrary unicode.

use plaintasks::plaintasks::formats::ToTodoString;
use plaintasks::{parse_document, Node, Segment};
use proptest::prelude::*;

/// Number of lines a buffer splits into: a final newline does not start a
/// new line, a final unterminated run does
fn expected_line_count(source: &str) -> usize {
    source.split_inclusive('\n').count()
}

fn indentation_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["", "  ", "    ", "\t", " \t"]
}

fn content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,8}",
            " ",
            "@[a-z][a-z0-9_-]{0,5}",
            "@[a-z]{1,5}\\([a-z0-9 :-]{1,8}\\)",
            "@",
            "@[0-9]",
            "\\(",
            "\\)",
            ":",
            "[0-9]{1,3}",
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Projects
        (indentation_strategy(), "[A-Za-z][A-Za-z ]{0,10}", content_strategy())
            .prop_map(|(indent, name, tail)| format!("{}{}:{}", indent, name, tail)),
        // Tasks
        (
            indentation_strategy(),
            prop_oneof!["☐", "✔", "✘"],
            prop_oneof!["", " ", "\t"],
            content_strategy()
        )
            .prop_map(|(indent, glyph, sep, content)| format!(
                "{}{}{}{}",
                indent, glyph, sep, content
            )),
        // Comments and anything else
        (indentation_strategy(), content_strategy())
            .prop_map(|(indent, content)| format!("{}{}", indent, content)),
        // Blank
        indentation_strategy(),
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(line_strategy(), 0..20),
        prop_oneof!["\n", "\r\n"],
        any::<bool>(),
    )
        .prop_map(|(lines, newline, trailing)| {
            let mut source = lines.join(newline.as_str());
            if trailing && !lines.is_empty() {
                source.push_str(&newline);
            }
            source
        })
}

proptest! {
    #[test]
    fn test_parse_never_panics_on_arbitrary_input(input in "\\PC*") {
        let _doc = parse_document(&input);
    }

    #[test]
    fn test_one_node_per_line(input in document_strategy()) {
        let doc = parse_document(&input);
        prop_assert_eq!(doc.len(), expected_line_count(&input));
    }

    #[test]
    fn test_one_node_per_line_arbitrary(input in "[a-z@():☐✔✘ \t\r\n]{0,60}") {
        let doc = parse_document(&input);
        prop_assert_eq!(doc.len(), expected_line_count(&input));
    }

    #[test]
    fn test_round_trip(input in document_strategy()) {
        let doc = parse_document(&input);
        prop_assert_eq!(doc.to_todo_string(), input);
    }

    #[test]
    fn test_text_runs_never_adjacent(input in document_strategy()) {
        let doc = parse_document(&input);
        for node in doc.iter() {
            let segments = match node {
                Node::Task(task) => &task.content,
                Node::Project(project) => &project.tail,
                _ => continue,
            };
            for pair in segments.windows(2) {
                let adjacent = matches!(pair, [Segment::Text { .. }, Segment::Text { .. }]);
                prop_assert!(!adjacent, "adjacent text runs in {:?}", segments);
            }
            for segment in segments {
                if let Segment::Text { text } = segment {
                    prop_assert!(!text.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_tags_are_well_formed(input in document_strategy()) {
        let doc = parse_document(&input);
        for tag in doc.tags() {
            prop_assert!(plaintasks::Tag::is_valid_name(&tag.name), "bad name {:?}", tag.name);
            if let Some(value) = &tag.value {
                prop_assert!(!value.is_empty());
                prop_assert!(!value.contains([')', '\n', '\r']));
            }
        }
    }

    #[test]
    fn test_projects_never_start_with_a_glyph(input in document_strategy()) {
        let doc = parse_document(&input);
        for project in doc.projects() {
            let first = project.name.chars().next();
            prop_assert!(first.is_some());
            prop_assert!(!matches!(first, Some('☐' | '✔' | '✘' | ':' | ' ' | '\t')));
        }
    }
}
