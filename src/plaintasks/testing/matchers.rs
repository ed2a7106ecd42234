//! Matchers for node text and tag values

use crate::plaintasks::ast::Tag;
use std::fmt;

/// How a piece of node text is compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
    /// Nothing but spaces and tabs, or nothing at all
    Blank,
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
            TextMatch::Blank => actual.chars().all(|c| c == ' ' || c == '\t'),
        }
    }

    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: expected {}, got {:?}",
            context,
            self,
            actual
        );
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(text) => write!(f, "text {:?}", text),
            TextMatch::StartsWith(prefix) => write!(f, "text starting with {:?}", prefix),
            TextMatch::Contains(needle) => write!(f, "text containing {:?}", needle),
            TextMatch::Blank => write!(f, "blank text"),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        TextMatch::Exact(text.to_string())
    }
}

impl From<String> for TextMatch {
    fn from(text: String) -> Self {
        TextMatch::Exact(text)
    }
}

/// Expected form of a tag: bare `@name`, or `@name(value)` with a value
/// matching the inner text matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatch {
    Bare,
    Valued(TextMatch),
    Any,
}

impl TagMatch {
    pub fn matches(&self, tag: &Tag) -> bool {
        match (self, &tag.value) {
            (TagMatch::Any, _) | (TagMatch::Bare, None) => true,
            (TagMatch::Valued(expected), Some(value)) => expected.matches(value),
            (TagMatch::Bare, Some(_)) | (TagMatch::Valued(_), None) => false,
        }
    }

    pub fn assert(&self, tag: &Tag, context: &str) {
        assert!(
            self.matches(tag),
            "{}: expected @{} to be {}, got {}",
            context,
            tag.name,
            self,
            tag
        );
    }
}

impl fmt::Display for TagMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagMatch::Bare => write!(f, "a bare tag"),
            TagMatch::Valued(value) => write!(f, "valued with {}", value),
            TagMatch::Any => write!(f, "any tag"),
        }
    }
}

/// `None` is a bare tag, `Some(value)` an exact value
impl From<Option<&str>> for TagMatch {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(value) => TagMatch::Valued(value.into()),
            None => TagMatch::Bare,
        }
    }
}

impl From<TextMatch> for TagMatch {
    fn from(value: TextMatch) -> Self {
        TagMatch::Valued(value)
    }
}
