//! Block level parsing
//!
//! Blank lines are skipped, then the leading token of the line picks the construct:
//!
//!     -       list: consecutive dash-led lines
//!     {       segment: blocks parsed recursively until a `}` at block start
//!     |       table: consecutive pipe-led lines, one row each
//!     other   paragraph: the inline content of the line
//!
//! Only a `}` where a block would start closes a segment. Braces inside a line, inline code
//! or a fenced block are content. A `}` at block start with no open segment is a structural
//! error, and so is a segment still open at the end of input.

use crate::quire::ast::{
    Block, InlineContent, List, ListItem, Paragraph, Segment, Table, TableCell, TableRow,
};
use crate::quire::lexer::TokenKind;
use crate::quire::parser::cursor::Cursor;
use crate::quire::parser::error::ParseError;
use crate::quire::parser::inlines::{parse_inlines, trim_content, LineContext};

/// Parse blocks until the cursor is exhausted
pub fn parse_blocks(cursor: &mut Cursor) -> Result<Vec<Block>, ParseError> {
    let mut blocks = Vec::new();
    loop {
        cursor.skip_newlines();
        if cursor.is_at_end() {
            break;
        }
        if let Some(block) = parse_block(cursor)? {
            blocks.push(block);
        }
    }
    Ok(blocks)
}

/// Parse the block starting at the current token.
///
/// Returns `None` for lines that render to nothing (whitespace only).
pub fn parse_block(cursor: &mut Cursor) -> Result<Option<Block>, ParseError> {
    match cursor.current_kind() {
        Some(TokenKind::Dash) => parse_list(cursor).map(Some),
        Some(TokenKind::BraceOpen) => parse_segment(cursor).map(Some),
        Some(TokenKind::BraceClose) => {
            Err(cursor.unmatched(TokenKind::BraceOpen, TokenKind::BraceClose))
        }
        Some(TokenKind::Pipe) => parse_table(cursor),
        _ => parse_paragraph(cursor),
    }
}

fn parse_list(cursor: &mut Cursor) -> Result<Block, ParseError> {
    let mut items = Vec::new();
    while cursor.eat(TokenKind::Dash) {
        let content = trim_content(parse_inlines(cursor, LineContext::Line)?);
        items.push(ListItem { content });
        cursor.eat(TokenKind::Newline);
    }
    Ok(Block::List(List { items }))
}

fn parse_segment(cursor: &mut Cursor) -> Result<Block, ParseError> {
    let (open, line) = (cursor.index(), cursor.line());
    cursor.eat(TokenKind::BraceOpen);

    let mut blocks = Vec::new();
    loop {
        cursor.skip_newlines();
        match cursor.current_kind() {
            None => {
                return Err(ParseError::Unexpected {
                    expected: TokenKind::BraceClose,
                    found: None,
                    position: open,
                    line,
                })
            }
            Some(TokenKind::BraceClose) => {
                cursor.advance();
                break;
            }
            Some(_) => {
                if let Some(block) = parse_block(cursor)? {
                    blocks.push(block);
                }
            }
        }
    }

    Ok(Block::Segment(Segment { blocks }))
}

fn parse_table(cursor: &mut Cursor) -> Result<Option<Block>, ParseError> {
    let mut rows = Vec::new();
    while cursor.eat(TokenKind::Pipe) {
        let cells = parse_row(cursor)?;
        if !cells.is_empty() {
            rows.push(TableRow { cells });
        }
        cursor.eat(TokenKind::Newline);
    }

    if rows.is_empty() {
        return Ok(None);
    }
    Ok(Some(Block::Table(Table { rows })))
}

/// Cells of one row; the leading pipe is already consumed.
///
/// A row ends at the end of the line. An empty cell right before the end of the line is the
/// trailing pipe of the row and is not kept.
fn parse_row(cursor: &mut Cursor) -> Result<Vec<TableCell>, ParseError> {
    let mut cells = Vec::new();
    loop {
        let content = trim_content(parse_inlines(cursor, LineContext::Cell)?);
        let closed_by_pipe = cursor.eat(TokenKind::Pipe);

        if content.is_empty() && cursor.at_line_end() {
            break;
        }
        cells.push(TableCell { content });
        if !closed_by_pipe {
            break;
        }
    }
    Ok(cells)
}

fn parse_paragraph(cursor: &mut Cursor) -> Result<Option<Block>, ParseError> {
    let content: InlineContent = trim_content(parse_inlines(cursor, LineContext::Line)?);
    cursor.eat(TokenKind::Newline);

    if content.is_empty() {
        return Ok(None);
    }
    Ok(Some(Block::Paragraph(Paragraph::new(content))))
}
