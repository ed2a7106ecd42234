//! Tag element definition

use super::super::span::Location;
use super::super::traits::AstNode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap());

/// An `@name` or `@name(value)` annotation inside task or project content.
///
/// The value is kept raw: it is whatever sits between the parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            location: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            location: None,
        }
    }

    pub fn at(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }

    /// Check if a string is a valid tag name: an ASCII letter followed by
    /// letters, digits, `_` or `-`
    pub fn is_valid_name(name: &str) -> bool {
        TAG_NAME.is_match(name)
    }
}

impl AstNode for Tag {
    fn node_type(&self) -> &'static str {
        "Tag"
    }
    fn display_label(&self) -> String {
        self.to_string()
    }
    fn location(&self) -> Option<Location> {
        self.location
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "@{}({})", self.name, value),
            None => write!(f, "@{}", self.name),
        }
    }
}
