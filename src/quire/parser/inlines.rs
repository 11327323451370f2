//! Inline level parsing
//!
//! Consumes the tokens of one line (or one table cell) and builds inline nodes:
//!
//!     #  ##           heading, level 1 or 2; the following text token is the title
//!     *x*  **x**      italic / bold, content taken verbatim up to the first closing marker
//!     `x`             inline code
//!     ```...```       fenced code block, may span lines
//!     [label](addr)   link
//!     $[label](addr)  view: parsed like a link, never rendered
//!     ![alt](src)     image; malformed images fall back to a literal `!`
//!
//! Any other token is kept as text. Emphasis does not nest: the first closing marker wins.
//! An emphasis or code marker with no closing marker on the same line is kept as text.

use crate::quire::ast::{Inline, InlineContent};
use crate::quire::lexer::{detokenize, TokenKind};
use crate::quire::parser::cursor::Cursor;
use crate::quire::parser::error::ParseError;

/// Where the inline content being parsed lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineContext {
    /// A paragraph or list item line, terminated by a newline
    Line,
    /// A table cell, also terminated by a pipe
    Cell,
}

impl LineContext {
    fn is_terminator(self, kind: Option<TokenKind>) -> bool {
        match kind {
            None | Some(TokenKind::Newline) => true,
            Some(TokenKind::Pipe) => self == LineContext::Cell,
            Some(_) => false,
        }
    }
}

/// Parse inline content up to (not including) the terminator of `context`
pub fn parse_inlines(
    cursor: &mut Cursor,
    context: LineContext,
) -> Result<InlineContent, ParseError> {
    let mut content = InlineContent::new();

    while !context.is_terminator(cursor.current_kind()) {
        let node = match cursor.current_kind() {
            Some(TokenKind::Hashtag) => parse_heading(cursor),
            Some(TokenKind::Star) => parse_emphasis(cursor, context),
            Some(TokenKind::Backtick) => parse_code(cursor, context)?,
            Some(TokenKind::BracketOpen) => parse_link(cursor)?,
            Some(TokenKind::Dollar) => parse_view(cursor)?,
            Some(TokenKind::Bang) => parse_image(cursor, context),
            _ => match cursor.advance() {
                Some(token) => Inline::Text(token.value.clone()),
                None => break,
            },
        };
        push_inline(&mut content, node);
    }

    Ok(content)
}

/// Append a node, merging adjacent text
pub fn push_inline(content: &mut InlineContent, node: Inline) {
    if let Inline::Text(text) = &node {
        if text.is_empty() {
            return;
        }
        if let Some(Inline::Text(existing)) = content.last_mut() {
            existing.push_str(text);
            return;
        }
    }
    content.push(node);
}

/// Trim surrounding whitespace of a line's content and drop text left empty
pub fn trim_content(mut content: InlineContent) -> InlineContent {
    if let Some(Inline::Text(text)) = content.first_mut() {
        *text = text.trim_start().to_string();
    }
    if let Some(Inline::Text(text)) = content.last_mut() {
        *text = text.trim_end().to_string();
    }
    content.retain(|node| !matches!(node, Inline::Text(text) if text.is_empty()));
    content
}

fn parse_heading(cursor: &mut Cursor) -> Inline {
    cursor.eat(TokenKind::Hashtag);
    let level = if cursor.eat(TokenKind::Hashtag) { 2 } else { 1 };

    // Hashes past the second belong to the title
    let start = cursor.index();
    while cursor.eat(TokenKind::Hashtag) {}
    cursor.eat(TokenKind::Text);
    let text = detokenize(cursor.slice(start, cursor.index())).trim().to_string();

    Inline::Heading { level, text }
}

fn parse_emphasis(cursor: &mut Cursor, context: LineContext) -> Inline {
    cursor.eat(TokenKind::Star);

    if cursor.eat(TokenKind::Star) {
        let bold_close = [TokenKind::Star, TokenKind::Star];
        match collect_until(cursor, context, |c| c.at_sequence(&bold_close)) {
            Some(body) => {
                cursor.eat(TokenKind::Star);
                cursor.eat(TokenKind::Star);
                Inline::Bold(body)
            }
            None => Inline::Text("**".to_string()),
        }
    } else {
        match collect_until(cursor, context, |c| c.at(TokenKind::Star)) {
            Some(body) => {
                cursor.eat(TokenKind::Star);
                Inline::Italic(body)
            }
            None => Inline::Text("*".to_string()),
        }
    }
}

fn parse_code(cursor: &mut Cursor, context: LineContext) -> Result<Inline, ParseError> {
    let fence = [TokenKind::Backtick; 3];
    if cursor.at_sequence(&fence) {
        return parse_code_block(cursor);
    }

    cursor.eat(TokenKind::Backtick);
    let inline = match collect_until(cursor, context, |c| c.at(TokenKind::Backtick)) {
        Some(body) => {
            cursor.eat(TokenKind::Backtick);
            Inline::Code(body)
        }
        None => Inline::Text("`".to_string()),
    };
    Ok(inline)
}

/// A fenced block: raw text, across lines, up to the next three backticks
fn parse_code_block(cursor: &mut Cursor) -> Result<Inline, ParseError> {
    let fence = [TokenKind::Backtick; 3];
    for _ in 0..fence.len() {
        cursor.eat(TokenKind::Backtick);
    }

    let start = cursor.index();
    while !cursor.at_sequence(&fence) {
        if cursor.advance().is_none() {
            return Err(cursor.unexpected(TokenKind::Backtick));
        }
    }
    let raw = detokenize(cursor.slice(start, cursor.index()));
    for _ in 0..fence.len() {
        cursor.eat(TokenKind::Backtick);
    }

    let (language, code) = split_info_string(raw);
    Ok(Inline::CodeBlock { language, code })
}

/// A single word right after the opening fence, on its own line, names the language
fn split_info_string(raw: String) -> (Option<String>, String) {
    if let Some((first, rest)) = raw.split_once('\n') {
        let tag = first.trim();
        let is_tag = tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '#' | '_' | '.'));
        if !tag.is_empty() && is_tag {
            return (Some(tag.to_string()), rest.to_string());
        }
    }
    (None, raw)
}

fn parse_link(cursor: &mut Cursor) -> Result<Inline, ParseError> {
    let (label, address) = parse_link_parts(cursor)?;
    Ok(Inline::Link { label, address })
}

/// `$` starts a view only when a bracket follows; otherwise it is plain text
fn parse_view(cursor: &mut Cursor) -> Result<Inline, ParseError> {
    if cursor.peek_kind(1) != Some(TokenKind::BracketOpen) {
        cursor.advance();
        return Ok(Inline::Text("$".to_string()));
    }
    cursor.eat(TokenKind::Dollar);
    let (label, address) = parse_link_parts(cursor)?;
    Ok(Inline::View { label, address })
}

/// `![alt](src)`. Anything malformed renders as `!` plus the next raw token.
fn parse_image(cursor: &mut Cursor, context: LineContext) -> Inline {
    cursor.eat(TokenKind::Bang);
    let start = cursor.index();

    if cursor.at(TokenKind::BracketOpen) {
        if let Ok((alt, src)) = parse_link_parts(cursor) {
            return Inline::Image { alt, src };
        }
        cursor.seek(start);
    }

    let mut text = String::from("!");
    if !context.is_terminator(cursor.current_kind()) {
        if let Some(token) = cursor.advance() {
            text.push_str(&token.value);
        }
    }
    Inline::Text(text)
}

/// `[label](address)` with the cursor on the opening bracket
fn parse_link_parts(cursor: &mut Cursor) -> Result<(String, String), ParseError> {
    cursor.expect(TokenKind::BracketOpen)?;
    let label = collect_enclosed(cursor, TokenKind::BracketOpen, TokenKind::BracketClose)?;
    cursor.expect(TokenKind::ParenOpen)?;
    let address = collect_enclosed(cursor, TokenKind::ParenOpen, TokenKind::ParenClose)?;
    Ok((label, address.trim().to_string()))
}

/// Raw text up to the `close` matching an already consumed `open`, on the current line.
/// The closing token is consumed.
fn collect_enclosed(
    cursor: &mut Cursor,
    open: TokenKind,
    close: TokenKind,
) -> Result<String, ParseError> {
    let start = cursor.index();
    let mut depth = 0usize;
    loop {
        match cursor.current_kind() {
            None | Some(TokenKind::Newline) => return Err(cursor.unexpected(close)),
            Some(kind) if kind == close && depth == 0 => {
                let raw = detokenize(cursor.slice(start, cursor.index()));
                cursor.advance();
                return Ok(raw);
            }
            Some(kind) => {
                if kind == open {
                    depth += 1;
                } else if kind == close {
                    depth -= 1;
                }
                cursor.advance();
            }
        }
    }
}

/// Raw text until `stop` holds, without consuming the stop tokens.
///
/// Returns `None` (and leaves the cursor where it started) when the line ends first.
fn collect_until<F>(cursor: &mut Cursor, context: LineContext, stop: F) -> Option<String>
where
    F: Fn(&Cursor) -> bool,
{
    let start = cursor.index();
    while !stop(cursor) {
        if context.is_terminator(cursor.current_kind()) {
            cursor.seek(start);
            return None;
        }
        cursor.advance();
    }
    Some(detokenize(cursor.slice(start, cursor.index())))
}
