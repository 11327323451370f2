//! Lexer module for the quire markup
//!
//! This module contains the tokenization logic for the quire markup, including token
//! definitions and the lexer implementation.
//!
//! The lexer is total: every character is either one of the fourteen structural markers
//! (`#`, `` ` ``, `-`, `|`, `(`, `)`, `[`, `]`, `{`, `}`, `$`, `!`, `*`, newline) or part of a
//! maximal text run. Carriage returns are dropped. Interpretation of the markers (whether a
//! `-` starts a list or is just a hyphen) is left entirely to the parser.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::detokenize;
pub use lexer_impl::tokenize;
pub use tokens::{Token, TokenKind};

/// Preprocesses source text to ensure it ends with a newline.
///
/// Document entry points use this so that the last line of a document is terminated the
/// same way as every other line.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

/// Tokenize a whole document: newline-terminated, then lexed
pub fn lex(source: &str) -> Vec<Token> {
    tokenize(&ensure_source_ends_with_newline(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_newline_appends_once() {
        assert_eq!(ensure_source_ends_with_newline("a"), "a\n");
        assert_eq!(ensure_source_ends_with_newline("a\n"), "a\n");
        assert_eq!(ensure_source_ends_with_newline(""), "");
    }

    #[test]
    fn test_lex_terminates_last_line() {
        let tokens = lex("# Title");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Newline));
    }
}
