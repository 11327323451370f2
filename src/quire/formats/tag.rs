//! XML-like AST tag serialization
//!
//! Serializes the tree to an XML-like dump that mirrors its structure one node per tag.
//!
//! ## Format
//!
//! - Node type → tag name
//! - Inline text → text content
//! - Link, image and view targets → a `to` attribute; code block language → `language`
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <segment>
//!     <paragraph><heading level="1">Intro</heading></paragraph>
//!     <list>
//!       <item><text>see </text><link to="./a.html">a</link></item>
//!     </list>
//!   </segment>
//! </document>
//! ```

use super::registry::{FormatError, Formatter};
use crate::quire::ast::{Block, Document, Inline};

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for block in &doc.blocks {
        serialize_block(block, 1, &mut result);
    }
    result.push_str("</document>");
    result
}

fn serialize_block(block: &Block, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    match block {
        Block::Paragraph(p) => {
            output.push_str(&format!("{}<paragraph>", indent));
            serialize_inlines(&p.content, output);
            output.push_str("</paragraph>\n");
        }
        Block::List(l) => {
            output.push_str(&format!("{}<list>\n", indent));
            let item_indent = "  ".repeat(indent_level + 1);
            for item in &l.items {
                output.push_str(&format!("{}<item>", item_indent));
                serialize_inlines(&item.content, output);
                output.push_str("</item>\n");
            }
            output.push_str(&format!("{}</list>\n", indent));
        }
        Block::Table(t) => {
            output.push_str(&format!("{}<table>\n", indent));
            let row_indent = "  ".repeat(indent_level + 1);
            for row in &t.rows {
                output.push_str(&format!("{}<row>", row_indent));
                for cell in &row.cells {
                    output.push_str("<cell>");
                    serialize_inlines(&cell.content, output);
                    output.push_str("</cell>");
                }
                output.push_str("</row>\n");
            }
            output.push_str(&format!("{}</table>\n", indent));
        }
        Block::Segment(s) => {
            if s.blocks.is_empty() {
                output.push_str(&format!("{}<segment></segment>\n", indent));
                return;
            }
            output.push_str(&format!("{}<segment>\n", indent));
            for child in &s.blocks {
                serialize_block(child, indent_level + 1, output);
            }
            output.push_str(&format!("{}</segment>\n", indent));
        }
    }
}

fn serialize_inlines(content: &[Inline], output: &mut String) {
    for inline in content {
        let tag = inline.node_type();
        let attributes = match inline {
            Inline::Heading { level, .. } => format!(" level=\"{}\"", level),
            Inline::CodeBlock {
                language: Some(language),
                ..
            } => format!(" language=\"{}\"", escape_xml(language)),
            Inline::Link { address, .. } | Inline::View { address, .. } => {
                format!(" to=\"{}\"", escape_xml(address))
            }
            Inline::Image { src, .. } => format!(" to=\"{}\"", escape_xml(src)),
            _ => String::new(),
        };
        let text = match inline {
            Inline::View { label, .. } => label.as_str(),
            other => other.plain_text(),
        };
        output.push_str(&format!(
            "<{tag}{attributes}>{}</{tag}>",
            escape_xml(text)
        ));
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quire::parser::parse_document;

    fn tags(source: &str) -> String {
        serialize_document(&parse_document(source).expect("Failed to parse"))
    }

    #[test]
    fn test_serialize_simple_paragraph() {
        assert_eq!(
            tags("Hello world\n"),
            "<document>\n  <paragraph><text>Hello world</text></paragraph>\n</document>"
        );
    }

    #[test]
    fn test_serialize_segment_with_list() {
        let result = tags("{\n# Intro\n- see [a](./a.html)\n}\n");
        assert!(result.contains("  <segment>\n"));
        assert!(result.contains("    <paragraph><heading level=\"1\">Intro</heading></paragraph>\n"));
        assert!(result.contains(
            "      <item><text>see </text><link to=\"./a.html\">a</link></item>\n"
        ));
        assert!(result.contains("  </segment>\n"));
    }

    #[test]
    fn test_view_keeps_its_label() {
        let result = tags("$[meta](./m)\n");
        assert!(result.contains("<view to=\"./m\">meta</view>"));
    }

    #[test]
    fn test_xml_escaping() {
        let result = tags("Text with <special> & \"chars\"\n");
        assert!(result.contains("&lt;special&gt;"));
        assert!(result.contains("&amp;"));
        assert!(result.contains("&quot;"));
    }

    #[test]
    fn test_empty_segment() {
        assert!(tags("{}\n").contains("<segment></segment>"));
    }
}
