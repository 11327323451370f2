//! Line-numbered markup for classified code

use super::classify::{Category, CodeToken};
use once_cell::sync::Lazy;
use regex::Regex;

static INCLUDE_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(#include)\s*(<[^>]+>|"[^"]+")$"#).unwrap());

/// Escape text for use inside markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A run of text that shares one span class (or none)
#[derive(Debug, Clone, PartialEq, Eq)]
struct Piece<'a> {
    class: Option<&'static str>,
    text: &'a str,
}

impl<'a> Piece<'a> {
    fn new(class: Option<&'static str>, text: &'a str) -> Self {
        Self { class, text }
    }

    fn plain(text: &'a str) -> Self {
        Self::new(None, text)
    }
}

/// Pieces of one token. Call shapes and control keywords ending in `(` are split into the
/// name, any whitespace before the paren, and the paren as an operator.
fn pieces(token: &CodeToken) -> Vec<Piece<'_>> {
    let text = token.text.as_str();
    match token.category {
        Category::FunctionName | Category::ControlKeyword if text.ends_with('(') => {
            let head = &text[..text.len() - 1];
            let name = head.trim_end();
            let class = token.category.class_name();
            vec![
                Piece::new(class, name),
                Piece::plain(&head[name.len()..]),
                Piece::new(Some("operator"), "("),
            ]
        }
        Category::Include => match INCLUDE_PARTS.captures(text) {
            Some(parts) => {
                let keyword = parts.get(1).map_or("", |m| m.as_str());
                let path = parts.get(2).map_or("", |m| m.as_str());
                vec![
                    Piece::new(Some("include-keyword"), keyword),
                    Piece::plain(" "),
                    Piece::new(Some("include-path"), path),
                ]
            }
            None => vec![Piece::plain(text)],
        },
        category => vec![Piece::new(category.class_name(), text)],
    }
}

/// Markup of each physical line of the snippet.
///
/// Spans never cross a line break; a token spanning lines is closed and reopened. Leading and
/// trailing blank lines are dropped, interior blank lines are kept.
pub fn render_lines(tokens: &[CodeToken]) -> Vec<String> {
    let mut lines: Vec<(String, bool)> = vec![(String::new(), true)];

    for token in tokens {
        for piece in pieces(token) {
            for (i, part) in piece.text.split('\n').enumerate() {
                if i > 0 {
                    lines.push((String::new(), true));
                }
                let part = part.trim_end_matches('\r');
                if part.is_empty() {
                    continue;
                }
                let Some((markup, blank)) = lines.last_mut() else {
                    continue;
                };
                if !part.trim().is_empty() {
                    *blank = false;
                }
                match piece.class {
                    Some(class) => {
                        markup.push_str(&format!(
                            "<span class=\"{}\">{}</span>",
                            class,
                            escape_html(part)
                        ));
                    }
                    None => markup.push_str(&escape_html(part)),
                }
            }
        }
    }

    let first = lines.iter().position(|(_, blank)| !blank);
    let last = lines.iter().rposition(|(_, blank)| !blank);
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last]
            .iter()
            .map(|(markup, _)| markup.clone())
            .collect(),
        _ => Vec::new(),
    }
}

/// The line-numbered holder around rendered lines
pub fn render_holder(lines: &[String], language: Option<&str>) -> String {
    let mut out = String::new();
    match language {
        Some(language) => out.push_str(&format!(
            "<div class=\"holder code\" data-language=\"{}\">",
            escape_html(language)
        )),
        None => out.push_str("<div class=\"holder code\">"),
    }

    out.push_str("<div class=\"lines\">");
    for index in 1..=lines.len() {
        out.push_str(&format!("<div class=\"lines-index\">{}</div>", index));
    }
    out.push_str("</div>");

    out.push_str("<div class=\"scrollable\"><div class=\"codes\">");
    for line in lines {
        out.push_str(&format!(
            "<div class=\"code-line-parent\"><div class=\"code-line\">{}</div></div>",
            line
        ));
    }
    out.push_str("</div></div></div>");
    out
}
