//! HTML rendering
//!
//! A direct walk of the tree. The mapping:
//!
//! | Node | Markup |
//! |------|--------|
//! | Paragraph | `<div class="text">` around each run of plain inlines |
//! | Heading | `<h1 class="text">` / `<h2 class="text">` |
//! | Bold / Italic | `<strong>` / `<em>` |
//! | Code | `<code>`, escaped |
//! | CodeBlock | highlighted holder (see [highlight](crate::quire::highlight)) |
//! | Link | `<a href>` |
//! | Image | `<img src alt>` |
//! | View | nothing |
//! | List | `<ul class="list"><li>` |
//! | Table | `<table class="table"><tr><td>` |
//! | Segment | `<div class="segment">` |
//!
//! Headings and code blocks are block-level in the output even though the tree keeps them
//! inside the paragraph of their line, so a paragraph is split around them. A text run whose
//! rendered content is blank emits nothing.
//!
//! Prose text is emitted as written, so authors may embed raw markup. Code and attribute
//! values are escaped.

use super::registry::{FormatError, Formatter};
use crate::quire::ast::{Block, Document, Inline};
use crate::quire::highlight::render::escape_html;
use crate::quire::highlight::Highlighter;
use crate::quire::parser::{parse_document, ParseError};

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    highlighter: Highlighter,
}

impl HtmlRenderer {
    pub fn new(highlighter: Highlighter) -> Self {
        Self { highlighter }
    }

    pub fn render_document(&self, doc: &Document) -> String {
        let mut out = String::new();
        self.render_blocks(&doc.blocks, &mut out);
        out
    }

    fn render_blocks(&self, blocks: &[Block], out: &mut String) {
        for block in blocks {
            self.render_block(block, out);
        }
    }

    fn render_block(&self, block: &Block, out: &mut String) {
        match block {
            Block::Paragraph(paragraph) => self.render_paragraph(&paragraph.content, out),
            Block::List(list) => {
                out.push_str("<ul class=\"list\">");
                for item in &list.items {
                    out.push_str("<li>");
                    self.render_inlines(&item.content, out);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
            Block::Table(table) => {
                out.push_str("<table class=\"table\">");
                for row in &table.rows {
                    out.push_str("<tr>");
                    for cell in &row.cells {
                        out.push_str("<td>");
                        self.render_inlines(&cell.content, out);
                        out.push_str("</td>");
                    }
                    out.push_str("</tr>");
                }
                out.push_str("</table>");
            }
            Block::Segment(segment) => {
                out.push_str("<div class=\"segment\">");
                self.render_blocks(&segment.blocks, out);
                out.push_str("</div>");
            }
        }
    }

    fn render_paragraph(&self, content: &[Inline], out: &mut String) {
        let mut run = String::new();
        for inline in content {
            if is_block_level(inline) {
                flush_text_run(&mut run, out);
                self.render_inline(inline, out);
            } else {
                self.render_inline(inline, &mut run);
            }
        }
        flush_text_run(&mut run, out);
    }

    fn render_inlines(&self, content: &[Inline], out: &mut String) {
        for inline in content {
            self.render_inline(inline, out);
        }
    }

    fn render_inline(&self, inline: &Inline, out: &mut String) {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Heading { level, text } => {
                let tag = if *level >= 2 { "h2" } else { "h1" };
                out.push_str(&format!("<{tag} class=\"text\">{text}</{tag}>"));
            }
            Inline::Bold(text) => out.push_str(&format!("<strong>{}</strong>", text)),
            Inline::Italic(text) => out.push_str(&format!("<em>{}</em>", text)),
            Inline::Code(code) => out.push_str(&format!("<code>{}</code>", escape_html(code))),
            Inline::CodeBlock { language, code } => {
                out.push_str(&self.highlighter.highlight_tagged(code, language.as_deref()))
            }
            Inline::Link { label, address } => out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_attribute(address),
                label
            )),
            Inline::Image { alt, src } => out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_attribute(src),
                escape_attribute(alt)
            )),
            Inline::View { .. } => {}
        }
    }
}

fn is_block_level(inline: &Inline) -> bool {
    matches!(inline, Inline::Heading { .. } | Inline::CodeBlock { .. })
}

fn flush_text_run(run: &mut String, out: &mut String) {
    let text = run.trim();
    if !text.is_empty() {
        out.push_str(&format!("<div class=\"text\">{}</div>", text));
    }
    run.clear();
}

fn escape_attribute(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}

/// Render a parsed document with the default highlighter
pub fn render_document(doc: &Document) -> String {
    HtmlRenderer::default().render_document(doc)
}

/// Parse and render markup source in one step
pub fn render_fragment(source: &str) -> Result<String, ParseError> {
    let doc = parse_document(source)?;
    Ok(render_document(&doc))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormatter {
    renderer: HtmlRenderer,
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.renderer.render_document(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        render_fragment(source).expect("Failed to parse")
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render("hello\n"), "<div class=\"text\">hello</div>");
    }

    #[test]
    fn test_headings_are_not_wrapped() {
        assert_eq!(render("# Title\n"), "<h1 class=\"text\">Title</h1>");
        assert_eq!(render("## Sub\n"), "<h2 class=\"text\">Sub</h2>");
    }

    #[test]
    fn test_heading_followed_by_text() {
        assert_eq!(
            render("# Title *aside*\n"),
            "<h1 class=\"text\">Title</h1><div class=\"text\"><em>aside</em></div>"
        );
    }

    #[test]
    fn test_emphasis_and_inline_code() {
        assert_eq!(
            render("**a** *b* `x<y`\n"),
            "<div class=\"text\"><strong>a</strong> <em>b</em> <code>x&lt;y</code></div>"
        );
    }

    #[test]
    fn test_link_and_image() {
        assert_eq!(
            render("[Home](./index.html) ![logo](./logo.png)\n"),
            "<div class=\"text\"><a href=\"./index.html\">Home</a> \
             <img src=\"./logo.png\" alt=\"logo\"></div>"
        );
    }

    #[test]
    fn test_view_only_paragraph_is_suppressed() {
        assert_eq!(render("$[meta](./data)\n"), "");
        assert_eq!(render("  $[a](b)  $[c](d) \n"), "");
    }

    #[test]
    fn test_list() {
        assert_eq!(
            render("- a\n- b\n- c\n"),
            "<ul class=\"list\"><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn test_table_with_inline_cells() {
        assert_eq!(
            render("|a|b|\n|**x**|d|\n"),
            "<table class=\"table\"><tr><td>a</td><td>b</td></tr>\
             <tr><td><strong>x</strong></td><td>d</td></tr></table>"
        );
    }

    #[test]
    fn test_nested_segments() {
        assert_eq!(
            render("{\nouter\n{\ninner\n}\n}\n"),
            "<div class=\"segment\"><div class=\"text\">outer</div>\
             <div class=\"segment\"><div class=\"text\">inner</div></div></div>"
        );
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = render("```cpp\nwhile (true) {}\n```\n");
        assert!(html.starts_with("<div class=\"holder code\" data-language=\"cpp\">"));
        assert!(html.contains("<span class=\"control-keyword\">while</span>"));
        assert!(html.contains("<div class=\"lines-index\">1</div>"));
        assert!(!html.contains("<div class=\"text\">"));
    }

    #[test]
    fn test_malformed_link_fails_fragment() {
        assert!(render_fragment("[Home](./index.html\n").is_err());
    }
}
