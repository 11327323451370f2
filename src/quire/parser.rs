//! Parser module for the quire markup
//!
//! A hand written recursive descent parser over the flat token stream produced by the
//! [lexer](crate::quire::lexer). It walks the tokens top to bottom with one token of lookahead
//! and never backtracks, with one exception: a malformed image is re-read as plain text.
//!
//! Once a delimited construct is entered it must complete. A link whose `]` or `)` is missing,
//! an unterminated fenced block or an unbalanced segment fails the whole document with a
//! [ParseError]. Callers handle that per document; see [site](crate::quire::site).
//!
//! The parser produces a [Document] tree; rendering is a separate pass in
//! [formats](crate::quire::formats).

pub mod blocks;
pub mod cursor;
pub mod error;
pub mod inlines;

pub use cursor::Cursor;
pub use error::ParseError;

use crate::quire::ast::Document;
use crate::quire::lexer::{lex, Token};

/// Parse a token stream into a document
pub fn parse(tokens: &[Token]) -> Result<Document, ParseError> {
    let mut cursor = Cursor::new(tokens);
    let blocks = blocks::parse_blocks(&mut cursor)?;
    Ok(Document::new(blocks))
}

/// Main parser function that takes source text and returns a parsed document.
/// This is the primary entry point for parsing quire documents.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let tokens = lex(source);
    parse(&tokens)
}
