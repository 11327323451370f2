//! File processing API
//!
//! Runs one file through a chosen stage of the pipeline and prints the result in a chosen
//! format, for inspecting what the compilers do with a document:
//!
//!     token-simple    tokens, one line of the source per line
//!     token-json      tokens as JSON
//!     ast-tag         the tree as XML-like tags
//!     ast-json        the tree as JSON
//!     html-fragment   rendered markup, as embedded into a page
//!     html-page       rendered markup inside the page shell
//!     code-html       the whole file highlighted as code
//!     code-json       the highlighter's classified tokens as JSON

use crate::quire::formats::{FormatError, FormatRegistry};
use crate::quire::highlight::Highlighter;
use crate::quire::lexer::{lex, Token, TokenKind};
use crate::quire::parser::{parse_document, ParseError};
use crate::quire::site::PageShell;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Html,
    Code,
}

impl ProcessingStage {
    fn name(self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Html => "html",
            ProcessingStage::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Tag,
    Fragment,
    Page,
    Html,
}

impl OutputFormat {
    fn name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Tag => "tag",
            OutputFormat::Fragment => "fragment",
            OutputFormat::Page => "page",
            OutputFormat::Html => "html",
        }
    }
}

/// A stage plus a format, written `<stage>-<format>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "html-page"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "html" => ProcessingStage::Html,
            "code" => ProcessingStage::Code,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let spec = Self::available_specs()
            .into_iter()
            .find(|spec| spec.stage == stage && spec.format.name() == format);
        spec.ok_or_else(|| {
            ProcessingError::InvalidFormatType(format!(
                "'{}' is not supported for the {} stage",
                format,
                stage.name()
            ))
        })
    }

    /// Every supported stage/format pair
    pub fn available_specs() -> Vec<ProcessingSpec> {
        use OutputFormat as F;
        use ProcessingStage as S;
        [
            (S::Token, F::Simple),
            (S::Token, F::Json),
            (S::Ast, F::Tag),
            (S::Ast, F::Json),
            (S::Html, F::Fragment),
            (S::Html, F::Page),
            (S::Code, F::Html),
            (S::Code, F::Json),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl std::fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format.name())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Failed to parse document: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Read a file and process it at the stage and format named by `spec`
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path)
        .map_err(|e| ProcessingError::IoError(format!("{}: {}", file_path.display(), e)))?;
    let name = file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    process_source(&name, &content, spec)
}

/// Process in-memory source; `name` titles the page for `html-page`
pub fn process_source(
    name: &str,
    content: &str,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    tracing::debug!(%spec, document = name, "processing");
    let registry = FormatRegistry::default();

    match (spec.stage, spec.format) {
        (ProcessingStage::Token, format) => format_tokens(&lex(content), format),
        (ProcessingStage::Ast, OutputFormat::Tag) => {
            Ok(registry.serialize(&parse_document(content)?, "tag")?)
        }
        (ProcessingStage::Ast, _) => Ok(registry.serialize(&parse_document(content)?, "json")?),
        (ProcessingStage::Html, OutputFormat::Page) => {
            let fragment = registry.serialize(&parse_document(content)?, "html")?;
            Ok(PageShell::default().wrap(name, &fragment))
        }
        (ProcessingStage::Html, _) => Ok(registry.serialize(&parse_document(content)?, "html")?),
        (ProcessingStage::Code, OutputFormat::Json) => {
            let tokens = Highlighter::default().classify(content);
            serde_json::to_string_pretty(&tokens)
                .map_err(|e| ProcessingError::from(FormatError::SerializationError(e.to_string())))
        }
        (ProcessingStage::Code, _) => Ok(Highlighter::default().highlight(content)),
    }
}

fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::from(FormatError::SerializationError(e.to_string()))),
        _ => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if token.is(TokenKind::Newline) {
                    result.push('\n');
                }
            }
            Ok(result)
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}
