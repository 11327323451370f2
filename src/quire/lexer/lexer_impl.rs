//! Implementation of the quire lexer
//!
//! Logos does the character classification. The only work done here is building owned
//! tokens and keeping `Text` runs maximal: a skipped carriage return splits a run inside
//! logos, so adjacent runs are merged back together.

use crate::quire::lexer::tokens::{Token, TokenKind};
use logos::Logos;

/// Tokenize a string into markup tokens.
///
/// Never fails. Concatenating the values of the returned tokens gives back the source
/// with carriage returns removed.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(result) = lexer.next() {
        let Ok(kind) = result else {
            continue;
        };
        let slice = lexer.slice();
        match (kind, tokens.last_mut()) {
            (TokenKind::Text, Some(last)) if last.kind == TokenKind::Text => {
                last.value.push_str(slice);
            }
            _ => tokens.push(Token::new(kind, slice)),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("hello world");
        assert_eq!(tokens, vec![Token::text("hello world")]);
    }

    #[test]
    fn test_heading_tokenization() {
        let tokens = tokenize("# Title\n");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Hashtag, "#"),
                Token::text(" Title"),
                Token::new(TokenKind::Newline, "\n"),
            ]
        );
    }

    #[test]
    fn test_link_tokenization() {
        let tokens = tokenize("[Home](./index.html)");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::BracketOpen,
                TokenKind::Text,
                TokenKind::BracketClose,
                TokenKind::ParenOpen,
                TokenKind::Text,
                TokenKind::ParenClose,
            ]
        );
        assert_eq!(tokens[4].value, "./index.html");
    }

    #[test]
    fn test_list_item_tokenization() {
        let tokens = tokenize("- a\n- b");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Dash,
                TokenKind::Text,
                TokenKind::Newline,
                TokenKind::Dash,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn test_carriage_returns_are_dropped_and_runs_merged() {
        let tokens = tokenize("ab\r\ncd\ref");
        assert_eq!(
            tokens,
            vec![
                Token::text("ab"),
                Token::new(TokenKind::Newline, "\n"),
                Token::text("cdef"),
            ]
        );
    }

    #[test]
    fn test_unicode_text() {
        let tokens = tokenize("naïve café ünïcode");
        assert_eq!(tokens, vec![Token::text("naïve café ünïcode")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_consecutive_markers() {
        let tokens = tokenize("***");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Star, TokenKind::Star, TokenKind::Star]
        );
    }
}
