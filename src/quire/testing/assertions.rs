//! Fluent assertion API for document trees

use super::matchers::TextMatch;
use crate::quire::ast::{
    plain_text, Block, Document, Inline, InlineContent, List, Paragraph, Segment, Table,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion {
        blocks: &doc.blocks,
        context: "document".to_string(),
    }
}

fn summarize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::node_type)
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_inlines(content: &[Inline]) -> String {
    content
        .iter()
        .map(Inline::node_type)
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_index(len: usize, index: usize, what: &str, context: &str) {
    assert!(
        index < len,
        "{}: {} index {} out of bounds (found {})",
        context,
        what,
        index,
        len
    );
}

// ============================================================================
// Document / Segment Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    blocks: &'a [Block],
    context: String,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top level blocks
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.blocks.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} blocks, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_blocks(self.blocks)
        );
        self
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert_index(self.blocks.len(), index, "Block", &self.context);
        assertion(BlockAssertion {
            block: &self.blocks[index],
            context: format!("{}.blocks[{}]", self.context, index),
        });
        self
    }
}

pub struct SegmentAssertion<'a> {
    segment: &'a Segment,
    context: String,
}

impl<'a> SegmentAssertion<'a> {
    pub fn block_count(self, expected: usize) -> Self {
        DocumentAssertion {
            blocks: &self.segment.blocks,
            context: self.context.clone(),
        }
        .block_count(expected);
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        DocumentAssertion {
            blocks: &self.segment.blocks,
            context: self.context.clone(),
        }
        .block(index, assertion);
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    fn wrong_type(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.block.node_type()
        )
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.block {
            Block::Paragraph(paragraph) => ParagraphAssertion {
                paragraph,
                context: self.context,
            },
            _ => self.wrong_type("paragraph"),
        }
    }

    pub fn assert_list(self) -> ListAssertion<'a> {
        match self.block {
            Block::List(list) => ListAssertion {
                list,
                context: self.context,
            },
            _ => self.wrong_type("list"),
        }
    }

    pub fn assert_table(self) -> TableAssertion<'a> {
        match self.block {
            Block::Table(table) => TableAssertion {
                table,
                context: self.context,
            },
            _ => self.wrong_type("table"),
        }
    }

    pub fn assert_segment(self) -> SegmentAssertion<'a> {
        match self.block {
            Block::Segment(segment) => SegmentAssertion {
                segment,
                context: self.context,
            },
            _ => self.wrong_type("segment"),
        }
    }
}

// ============================================================================
// Paragraph Assertions
// ============================================================================

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    /// Assert exact plain text match
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.paragraph.text(), &self.context);
        self
    }

    /// Assert plain text contains substring
    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.paragraph.text(), &self.context);
        self
    }

    pub fn inline_count(self, expected: usize) -> Self {
        assert_inline_count(&self.paragraph.content, expected, &self.context);
        self
    }

    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        assert_inline_at(&self.paragraph.content, index, &self.context, assertion);
        self
    }
}

fn assert_inline_count(content: &[Inline], expected: usize, context: &str) {
    let actual = content.len();
    assert_eq!(
        actual,
        expected,
        "{}: Expected {} inline nodes, found {}: [{}]",
        context,
        expected,
        actual,
        summarize_inlines(content)
    );
}

fn assert_inline_at<'a, F>(content: &'a InlineContent, index: usize, context: &str, assertion: F)
where
    F: FnOnce(InlineAssertion<'a>),
{
    assert_index(content.len(), index, "Inline", context);
    assertion(InlineAssertion {
        inline: &content[index],
        context: format!("{}.inlines[{}]", context, index),
    });
}

// ============================================================================
// List Assertions
// ============================================================================

pub struct ListAssertion<'a> {
    list: &'a List,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} list items, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the plain text of an item
    pub fn item_text(self, index: usize, expected: &str) -> Self {
        assert_index(self.list.items.len(), index, "Item", &self.context);
        let context = format!("{}.items[{}]", self.context, index);
        TextMatch::Exact(expected.to_string()).assert(&self.list.items[index].text(), &context);
        self
    }

    pub fn item_inline<F>(self, index: usize, inline: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        assert_index(self.list.items.len(), index, "Item", &self.context);
        let context = format!("{}.items[{}]", self.context, index);
        assert_inline_at(&self.list.items[index].content, inline, &context, assertion);
        self
    }
}

// ============================================================================
// Table Assertions
// ============================================================================

pub struct TableAssertion<'a> {
    table: &'a Table,
    context: String,
}

impl<'a> TableAssertion<'a> {
    pub fn row_count(self, expected: usize) -> Self {
        let actual = self.table.rows.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} rows, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the plain text of every cell of a row
    pub fn row_texts(self, row: usize, expected: &[&str]) -> Self {
        assert_index(self.table.rows.len(), row, "Row", &self.context);
        let actual: Vec<String> = self.table.rows[row]
            .cells
            .iter()
            .map(|cell| cell.text())
            .collect();
        assert_eq!(
            actual, expected,
            "{}.rows[{}]: cell texts differ",
            self.context, row
        );
        self
    }

    pub fn cell_inline<F>(self, row: usize, cell: usize, inline: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        assert_index(self.table.rows.len(), row, "Row", &self.context);
        let cells = &self.table.rows[row].cells;
        let row_context = format!("{}.rows[{}]", self.context, row);
        assert_index(cells.len(), cell, "Cell", &row_context);
        let context = format!("{}.cells[{}]", row_context, cell);
        assert_inline_at(&cells[cell].content, inline, &context, assertion);
        self
    }
}

// ============================================================================
// Inline Assertions
// ============================================================================

pub struct InlineAssertion<'a> {
    inline: &'a Inline,
    context: String,
}

impl<'a> InlineAssertion<'a> {
    fn wrong_type(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} ({:?})",
            self.context,
            expected,
            self.inline.node_type(),
            self.inline
        )
    }

    pub fn text(self, expected: &str) -> Self {
        match self.inline {
            Inline::Text(text) => TextMatch::Exact(expected.to_string()).assert(text, &self.context),
            _ => self.wrong_type("text"),
        }
        self
    }

    pub fn heading(self, level: u8, expected: &str) -> Self {
        match self.inline {
            Inline::Heading { level: actual, text } => {
                assert_eq!(*actual, level, "{}: heading level", self.context);
                TextMatch::Exact(expected.to_string()).assert(text, &self.context);
            }
            _ => self.wrong_type("heading"),
        }
        self
    }

    pub fn bold(self, expected: &str) -> Self {
        match self.inline {
            Inline::Bold(text) => TextMatch::Exact(expected.to_string()).assert(text, &self.context),
            _ => self.wrong_type("bold"),
        }
        self
    }

    pub fn italic(self, expected: &str) -> Self {
        match self.inline {
            Inline::Italic(text) => {
                TextMatch::Exact(expected.to_string()).assert(text, &self.context)
            }
            _ => self.wrong_type("italic"),
        }
        self
    }

    pub fn code(self, expected: &str) -> Self {
        match self.inline {
            Inline::Code(text) => TextMatch::Exact(expected.to_string()).assert(text, &self.context),
            _ => self.wrong_type("code"),
        }
        self
    }

    pub fn code_block(self, language: Option<&str>, code_contains: &str) -> Self {
        match self.inline {
            Inline::CodeBlock {
                language: actual,
                code,
            } => {
                assert_eq!(actual.as_deref(), language, "{}: language", self.context);
                TextMatch::Contains(code_contains.to_string()).assert(code, &self.context);
            }
            _ => self.wrong_type("code-block"),
        }
        self
    }

    pub fn link(self, label: &str, address: &str) -> Self {
        match self.inline {
            Inline::Link {
                label: actual_label,
                address: actual_address,
            } => {
                assert_eq!(actual_label, label, "{}: link label", self.context);
                assert_eq!(actual_address, address, "{}: link address", self.context);
            }
            _ => self.wrong_type("link"),
        }
        self
    }

    pub fn image(self, alt: &str, src: &str) -> Self {
        match self.inline {
            Inline::Image {
                alt: actual_alt,
                src: actual_src,
            } => {
                assert_eq!(actual_alt, alt, "{}: image alt", self.context);
                assert_eq!(actual_src, src, "{}: image src", self.context);
            }
            _ => self.wrong_type("image"),
        }
        self
    }

    pub fn view(self, label: &str, address: &str) -> Self {
        match self.inline {
            Inline::View {
                label: actual_label,
                address: actual_address,
            } => {
                assert_eq!(actual_label, label, "{}: view label", self.context);
                assert_eq!(actual_address, address, "{}: view address", self.context);
            }
            _ => self.wrong_type("view"),
        }
        self
    }

    /// Assert the visible text regardless of node type
    pub fn plain_text(self, expected: &str) -> Self {
        let actual = plain_text(std::slice::from_ref(self.inline));
        TextMatch::Exact(expected.to_string()).assert(&actual, &self.context);
        self
    }
}
