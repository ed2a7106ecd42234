//! # plaintasks
//!
//! A parser for the PlainTasks todo list format.
//!
//! A todo list is a plain text buffer where every line is exactly one of:
//!
//! - a project header (`Work:`), optionally followed by tags (`Work: @today`)
//! - a task starting with a status glyph (`☐` pending, `✔` done, `✘` cancelled)
//! - a free-form comment line
//! - an empty line
//!
//! Task and project content may carry `@name` or `@name(value)` tags.
//!
//! ```text
//! Groceries: @today
//!   ☐ buy milk @high
//!   ✔ call @person(Alice) @done(24-05-01 10:00)
//!   ✘ skip the bakery
//!   remember the bags
//! ```
//!
//! Parsing is total: any input produces a [`Document`] with one node per line.
//!
//! ## Testing
//!
//! See the [testing module](plaintasks::testing) for the fluent assertion API used
//! by the parser tests.

pub mod plaintasks;

pub use plaintasks::ast::{
    Comment, Document, EmptyLine, LineEnding, Location, Node, Position, Project, Segment,
    Status, Tag, Task,
};
pub use plaintasks::parser::parse_document;
