//! Processing API for the todo format
//!
//! Renders a source buffer at a given stage (tokens or AST) in a given output
//! format. A processing spec is written as `<stage>-<format>`:
//!
//! | spec           | output                                    |
//! |----------------|-------------------------------------------|
//! | `token-simple` | token names, one source line per line     |
//! | `token-json`   | `(token, span)` pairs as JSON             |
//! | `ast-tag`      | XML-like tag format                       |
//! | `ast-treeviz`  | box-drawing tree                          |
//! | `ast-json`     | the document as JSON                      |
//! | `ast-yaml`     | the document as YAML                      |
//! | `ast-source`   | the document written back as todo source  |
//! | `ast-position` | nodes at the `position` extra (`line:col`)|

use crate::plaintasks::ast::{format_at_position, PositionLookupError};
use crate::plaintasks::formats::{FormatError, FormatRegistry};
use crate::plaintasks::lexer::{tokenize_with_spans, Token};
use crate::plaintasks::parser::parse_document;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
    Source,
    Position,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Source => "source",
            OutputFormat::Position => "position",
        }
    }
}

/// A stage and output format pair, written `<stage>-<format>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            "source" => OutputFormat::Source,
            "position" => OutputFormat::Position,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "Format '{}' is not supported for the {} stage",
                format.as_str(),
                spec.stage_name()
            )));
        }
        Ok(spec)
    }

    /// Get all supported stage and format pairs
    pub fn available_specs() -> Vec<ProcessingSpec> {
        use OutputFormat::*;
        let token = [Simple, Json].map(|format| ProcessingSpec {
            stage: ProcessingStage::Token,
            format,
        });
        let ast = [Tag, Treeviz, Json, Yaml, Source, Position].map(|format| ProcessingSpec {
            stage: ProcessingStage::Ast,
            format,
        });
        token.into_iter().chain(ast).collect()
    }

    fn stage_name(&self) -> &'static str {
        match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage_name(), self.format.as_str())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("Missing extra: {0}")]
    MissingExtra(&'static str),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Lookup(#[from] PositionLookupError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Process a source buffer according to the given processing spec
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_source_with_extras(source, spec, &HashMap::new())
}

/// Process a source buffer with format-specific extras. `ast-position`
/// reads the `position` extra.
pub fn process_source_with_extras(
    source: &str,
    spec: &ProcessingSpec,
    extras: &HashMap<String, String>,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokenize_with_spans(source), spec.format),
        ProcessingStage::Ast => {
            let doc = parse_document(source);
            let registry_name = match spec.format {
                OutputFormat::Position => {
                    let position = extras
                        .get("position")
                        .ok_or(ProcessingError::MissingExtra("position"))?;
                    return Ok(format_at_position(&doc, position)?);
                }
                OutputFormat::Simple => {
                    return Err(ProcessingError::InvalidFormatType(
                        "simple format only works with token stage".to_string(),
                    ))
                }
                other => other.as_str(),
            };
            Ok(FormatRegistry::with_defaults().serialize(&doc, registry_name)?)
        }
    }
}

/// Format tokens according to the specified output format.
pub fn format_tokens(
    tokens: &[(Token, Range<usize>)],
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for (token, _) in tokens {
                result.push_str(&token.to_string());
                if matches!(token, Token::Newline) {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format only works with ast stage",
            other.as_str()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}
