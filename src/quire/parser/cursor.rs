//! Token cursor
//!
//! An index into the token slice plus lookahead. Parsing functions advance it and may look at
//! the tokens after the current one before consuming. Positions are token indices, which is
//! what errors report.

use crate::quire::lexer::{Token, TokenKind};
use crate::quire::parser::error::ParseError;

#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    index: usize,
}

impl<'t> Cursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&'t Token> {
        self.token_at(self.index)
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    /// Kind of the token `offset` positions after the current one
    pub fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.token_at(self.index + offset).map(|t| t.kind)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Whether the next tokens are exactly `kinds`, starting at the current one
    pub fn at_sequence(&self, kinds: &[TokenKind]) -> bool {
        kinds
            .iter()
            .enumerate()
            .all(|(offset, kind)| self.peek_kind(offset) == Some(*kind))
    }

    /// Newline or end of input
    pub fn at_line_end(&self) -> bool {
        matches!(self.current_kind(), None | Some(TokenKind::Newline))
    }

    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.current();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with a structural error
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.index += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(kind)),
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.eat(TokenKind::Newline) {}
    }

    /// The tokens between two positions, clamped to the end of input
    pub fn slice(&self, start: usize, end: usize) -> &'t [Token] {
        let end = end.min(self.tokens.len());
        &self.tokens[start.min(end)..end]
    }

    /// Move back (or forward) to an absolute position, clamped to the end of input
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.tokens.len());
    }

    /// Structural error for a missing `expected` token at the current position
    pub fn unexpected(&self, expected: TokenKind) -> ParseError {
        ParseError::Unexpected {
            expected,
            found: self.current_kind(),
            position: self.index,
            line: self.line(),
        }
    }

    /// Structural error for a stray `found` closing token at the current position
    pub fn unmatched(&self, expected: TokenKind, found: TokenKind) -> ParseError {
        ParseError::Unmatched {
            expected,
            found,
            position: self.index,
            line: self.line(),
        }
    }

    /// 1-based source line of the current position
    pub fn line(&self) -> usize {
        let upto = self.index.min(self.tokens.len());
        1 + self.tokens[..upto]
            .iter()
            .filter(|t| t.kind == TokenKind::Newline)
            .count()
    }

    fn token_at(&self, index: usize) -> Option<&'t Token> {
        self.tokens.get(index)
    }
}
