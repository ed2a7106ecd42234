//! Segment element definition
//!
//! Task and project content is an ordered sequence of segments. The scanner
//! that produces them merges adjacent plain text, so two `Text` segments are
//! never neighbours. Code that builds segment lists by hand should go through
//! [`push_segment`] to keep that property.

use super::tag::Tag;
use serde::Serialize;
use std::fmt;

/// One piece of task or project content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Segment {
    Text { text: String },
    Tag(Tag),
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text { text } => Some(text),
            Segment::Tag(_) => None,
        }
    }

    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Segment::Tag(tag) => Some(tag),
            Segment::Text { .. } => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Text { text } => write!(f, "{}", text),
            Segment::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// Append a segment, merging it into a trailing text run when both are text.
/// Empty text is dropped.
pub fn push_segment(segments: &mut Vec<Segment>, segment: Segment) {
    match segment {
        Segment::Text { text } if text.is_empty() => {}
        Segment::Text { text } => match segments.last_mut() {
            Some(Segment::Text { text: previous }) => previous.push_str(&text),
            _ => segments.push(Segment::Text { text }),
        },
        tag => segments.push(tag),
    }
}

/// Render segments back to their source form
pub fn segments_to_string(segments: &[Segment]) -> String {
    segments.iter().map(|segment| segment.to_string()).collect()
}
