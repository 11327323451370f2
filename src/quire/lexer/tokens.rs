//! Token definitions for the quire markup
//!
//! This module defines all the tokens that can be produced by the quire lexer.
//! Token kinds are declared with the logos derive macro. Every structural marker is a single
//! character; everything else is gathered into `Text` runs.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible token kinds in the quire markup
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[logos(skip r"\r")]
pub enum TokenKind {
    // Block and heading markers
    #[token("#")]
    Hashtag,
    #[token("`")]
    Backtick,
    #[token("-")]
    Dash,
    #[token("|")]
    Pipe,

    // Paired delimiters
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,

    // Inline directives
    #[token("$")]
    Dollar,
    #[token("!")]
    Bang,
    #[token("*")]
    Star,

    // Line breaks
    #[token("\n")]
    Newline,

    // Text content (catch-all for non-marker characters)
    #[regex(r"[^#`\-|()\[\]{}$!*\n\r]+")]
    Text,
}

impl TokenKind {
    /// Stable, human readable name used in diagnostics and token dumps
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Hashtag => "heading-mark",
            TokenKind::Backtick => "code-mark",
            TokenKind::Dash => "dash",
            TokenKind::Pipe => "pipe",
            TokenKind::ParenOpen => "paren-open",
            TokenKind::ParenClose => "paren-close",
            TokenKind::BracketOpen => "bracket-open",
            TokenKind::BracketClose => "bracket-close",
            TokenKind::BraceOpen => "brace-open",
            TokenKind::BraceClose => "brace-close",
            TokenKind::Dollar => "dollar",
            TokenKind::Bang => "bang",
            TokenKind::Star => "star",
            TokenKind::Newline => "newline",
            TokenKind::Text => "text",
        }
    }

    /// Check if this kind is one of the single-character structural markers
    pub fn is_marker(self) -> bool {
        !matches!(self, TokenKind::Text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its kind plus the exact source text it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, value)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Text => write!(f, "<text:{:?}>", self.value),
            kind => write!(f, "<{}>", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source)
            .filter_map(|result| result.ok())
            .collect()
    }

    #[test]
    fn test_single_markers() {
        assert_eq!(
            kinds("#`-|()[]{}$!*\n"),
            vec![
                TokenKind::Hashtag,
                TokenKind::Backtick,
                TokenKind::Dash,
                TokenKind::Pipe,
                TokenKind::ParenOpen,
                TokenKind::ParenClose,
                TokenKind::BracketOpen,
                TokenKind::BracketClose,
                TokenKind::BraceOpen,
                TokenKind::BraceClose,
                TokenKind::Dollar,
                TokenKind::Bang,
                TokenKind::Star,
                TokenKind::Newline,
            ]
        );
    }

    #[test]
    fn test_text_runs_stop_at_markers() {
        assert_eq!(
            kinds("hello world*x"),
            vec![TokenKind::Text, TokenKind::Star, TokenKind::Text]
        );
    }

    #[test]
    fn test_carriage_return_is_skipped() {
        assert_eq!(kinds("\r\n"), vec![TokenKind::Newline]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TokenKind::Hashtag.to_string(), "heading-mark");
        assert_eq!(TokenKind::Backtick.to_string(), "code-mark");
        assert_eq!(Token::text("a b").to_string(), "<text:\"a b\">");
        assert_eq!(Token::new(TokenKind::Pipe, "|").to_string(), "<pipe>");
    }

    #[test]
    fn test_marker_predicate() {
        assert!(TokenKind::Dash.is_marker());
        assert!(TokenKind::Newline.is_marker());
        assert!(!TokenKind::Text.is_marker());
    }
}
