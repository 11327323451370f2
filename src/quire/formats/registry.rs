//! Format registry for document serialization
//!
//! Each format implements the `Formatter` trait and is registered with `FormatRegistry` under
//! its name.

use crate::quire::ast::Document;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Trait for document formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "html", "tag")
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;
}

/// Pretty printed serde JSON of the tree
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|error| FormatError::SerializationError(error.to_string()))
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// Registered names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::HtmlFormatter::default());
        registry.register(super::TagFormatter);
        registry.register(JsonFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quire::ast::{Block, Inline, Paragraph};

    struct UpperFormatter;

    impl Formatter for UpperFormatter {
        fn name(&self) -> &str {
            "upper"
        }

        fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
            Ok(doc
                .blocks
                .iter()
                .flat_map(|block| block.inline_runs())
                .map(|run| crate::quire::ast::plain_text(run).to_uppercase())
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }

    fn hello() -> Document {
        Document::new(vec![Block::Paragraph(Paragraph::new(vec![Inline::Text(
            "Hello".to_string(),
        )]))])
    }

    #[test]
    fn test_register_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(UpperFormatter);

        assert!(registry.has("upper"));
        assert_eq!(registry.serialize(&hello(), "upper").unwrap(), "HELLO");
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::new();
        assert_eq!(
            registry.serialize(&hello(), "nope"),
            Err(FormatError::FormatNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["html", "json", "tag"]);
    }

    #[test]
    fn test_json_uses_kebab_case_variants() {
        let json = JsonFormatter.serialize(&hello()).unwrap();
        assert!(json.contains("\"paragraph\""));
        assert!(json.contains("\"text\": \"Hello\""));
    }
}
