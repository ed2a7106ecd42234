//! Testing utilities for AST assertions
//!
//! A fluent API for asserting on parsed documents, so parser tests read as a
//! description of the expected tree.
//!
//! # Example
//!
//! ```rust,ignore
//! use plaintasks::plaintasks::testing::assert_doc;
//!
//! let doc = parse_document("Work:\n  ☐ call @bob\n");
//!
//! assert_doc(&doc)
//!     .item_count(2)
//!     .item(0, |item| {
//!         item.assert_project().name("Work");
//!     })
//!     .item(1, |item| {
//!         item.assert_task()
//!             .pending()
//!             .indent("  ")
//!             .text("call ")
//!             .tag_names(&["bob"]);
//!     });
//! ```

mod assertions;
mod matchers;

pub use assertions::{
    assert_doc, CommentAssertion, DocumentAssertion, NodeAssertion, ProjectAssertion,
    TaskAssertion,
};
pub use matchers::{TagMatch, TextMatch};
