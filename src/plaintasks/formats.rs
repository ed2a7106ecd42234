//! Output format implementations for documents
//!
//! This module contains the ways a parsed `Document` can be rendered:
//! - `tag` - XML-like tag format mirroring the node structure
//! - `treeviz` - box-drawing tree for quick inspection
//! - `structured` - JSON and YAML through serde
//! - `detokenizer` - back to todo source text
//!
//! Each format implements `Formatter` and is available by name through
//! `FormatRegistry`.

pub mod detokenizer;
pub mod registry;
pub mod structured;
pub mod tag;
pub mod treeviz;

pub use detokenizer::{SourceFormatter, ToTodoString};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_document as serialize_ast_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
