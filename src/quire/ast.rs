//! AST for the quire markup
//!
//! The parser builds this tree; render passes in [formats](crate::quire::formats) walk it.
//!
//!     Document
//!     └── Block*        Paragraph | List | Table | Segment
//!         └── Inline*   Text | Heading | Bold | Italic | Code | CodeBlock | Link | Image | View
//!
//! Segments hold blocks again, which is the only place the tree nests without bound.
//! Headings and fenced code blocks are inline nodes: they are recognised while a line is
//! being read, so they live inside the paragraph of that line.

use serde::Serialize;

/// Inline nodes of a single line (or table cell)
pub type InlineContent = Vec<Inline>;

/// Root of a parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All view directives in document order, including those inside segments.
    ///
    /// Views never render; this is the only way to reach them.
    pub fn views(&self) -> Vec<(&str, &str)> {
        let mut views = Vec::new();
        collect_views(&self.blocks, &mut views);
        views
    }
}

fn collect_views<'a>(blocks: &'a [Block], out: &mut Vec<(&'a str, &'a str)>) {
    for block in blocks {
        match block {
            Block::Segment(segment) => collect_views(&segment.blocks, out),
            other => {
                for content in other.inline_runs() {
                    for inline in content {
                        if let Inline::View { label, address } = inline {
                            out.push((label.as_str(), address.as_str()));
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Block {
    Paragraph(Paragraph),
    List(List),
    Table(Table),
    Segment(Segment),
}

impl Block {
    /// Short name of the node type, used in assertion messages and tag output
    pub fn node_type(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::List(_) => "list",
            Block::Table(_) => "table",
            Block::Segment(_) => "segment",
        }
    }

    /// Every inline run held directly by this block (segments hold none)
    pub fn inline_runs(&self) -> Vec<&InlineContent> {
        match self {
            Block::Paragraph(p) => vec![&p.content],
            Block::List(l) => l.items.iter().map(|item| &item.content).collect(),
            Block::Table(t) => t
                .rows
                .iter()
                .flat_map(|row| row.cells.iter().map(|cell| &cell.content))
                .collect(),
            Block::Segment(_) => Vec::new(),
        }
    }
}

/// One line of inline content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub content: InlineContent,
}

impl Paragraph {
    pub fn new(content: InlineContent) -> Self {
        Self { content }
    }

    pub fn text(&self) -> String {
        plain_text(&self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: InlineContent,
}

impl ListItem {
    pub fn text(&self) -> String {
        plain_text(&self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub content: InlineContent,
}

impl TableCell {
    pub fn text(&self) -> String {
        plain_text(&self.content)
    }
}

/// A brace-delimited sub-document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Inline {
    Text(String),
    Heading { level: u8, text: String },
    Bold(String),
    Italic(String),
    Code(String),
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Link { label: String, address: String },
    Image { alt: String, src: String },
    View { label: String, address: String },
}

impl Inline {
    pub fn node_type(&self) -> &'static str {
        match self {
            Inline::Text(_) => "text",
            Inline::Heading { .. } => "heading",
            Inline::Bold(_) => "bold",
            Inline::Italic(_) => "italic",
            Inline::Code(_) => "code",
            Inline::CodeBlock { .. } => "code-block",
            Inline::Link { .. } => "link",
            Inline::Image { .. } => "image",
            Inline::View { .. } => "view",
        }
    }

    /// Visible text of the node, without markup
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text(text)
            | Inline::Bold(text)
            | Inline::Italic(text)
            | Inline::Code(text)
            | Inline::Heading { text, .. } => text.as_str(),
            Inline::CodeBlock { code, .. } => code.as_str(),
            Inline::Link { label, .. } => label.as_str(),
            Inline::Image { alt, .. } => alt.as_str(),
            Inline::View { .. } => "",
        }
    }
}

/// Concatenated visible text of an inline run
pub fn plain_text(content: &[Inline]) -> String {
    content.iter().map(Inline::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(content: InlineContent) -> Block {
        Block::Paragraph(Paragraph::new(content))
    }

    #[test]
    fn test_plain_text_skips_views() {
        let content = vec![
            Inline::Text("see ".to_string()),
            Inline::Link {
                label: "home".to_string(),
                address: "./index.html".to_string(),
            },
            Inline::View {
                label: "hidden".to_string(),
                address: "x".to_string(),
            },
        ];
        assert_eq!(plain_text(&content), "see home");
    }

    #[test]
    fn test_views_are_collected_through_segments() {
        let view = |label: &str| Inline::View {
            label: label.to_string(),
            address: format!("./{}", label),
        };
        let doc = Document::new(vec![
            paragraph(vec![view("a")]),
            Block::Segment(Segment {
                blocks: vec![Block::List(List {
                    items: vec![ListItem {
                        content: vec![view("b")],
                    }],
                })],
            }),
        ]);
        assert_eq!(doc.views(), vec![("a", "./a"), ("b", "./b")]);
    }

    #[test]
    fn test_node_type_names() {
        assert_eq!(paragraph(vec![]).node_type(), "paragraph");
        assert_eq!(
            Inline::CodeBlock {
                language: None,
                code: String::new()
            }
            .node_type(),
            "code-block"
        );
    }
}
