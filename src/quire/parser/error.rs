//! Structural parse errors
//!
//! The lexer is total, so the only way a document can fail is a delimiter-matched construct
//! (link, view, image address, segment, fenced code) that never finds its closing token, or a
//! segment close with nothing to close.

use crate::quire::lexer::TokenKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A construct was entered but the token needed to continue or close it is missing
    #[error("line {line}: expected {expected}, found {}", found_name(.found))]
    Unexpected {
        expected: TokenKind,
        found: Option<TokenKind>,
        position: usize,
        line: usize,
    },

    /// A closing delimiter appeared at block start with no construct open
    #[error("line {line}: {found} has no matching {expected}")]
    Unmatched {
        expected: TokenKind,
        found: TokenKind,
        position: usize,
        line: usize,
    },
}

fn found_name(found: &Option<TokenKind>) -> &'static str {
    found.map_or("end of input", TokenKind::name)
}

impl ParseError {
    pub fn expected(&self) -> TokenKind {
        match self {
            ParseError::Unexpected { expected, .. } | ParseError::Unmatched { expected, .. } => {
                *expected
            }
        }
    }

    /// Kind of the offending token, `None` when input ran out
    pub fn found(&self) -> Option<TokenKind> {
        match self {
            ParseError::Unexpected { found, .. } => *found,
            ParseError::Unmatched { found, .. } => Some(*found),
        }
    }

    /// Token index the error was detected at
    pub fn position(&self) -> usize {
        match self {
            ParseError::Unexpected { position, .. } | ParseError::Unmatched { position, .. } => {
                *position
            }
        }
    }

    /// 1-based source line
    pub fn line(&self) -> usize {
        match self {
            ParseError::Unexpected { line, .. } | ParseError::Unmatched { line, .. } => *line,
        }
    }
}
