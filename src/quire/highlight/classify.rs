//! Code lexing and classification
//!
//! One combined pattern splits a snippet into lexical tokens; each token is then given exactly
//! one [Category] by an ordered rule list. The first rule that applies wins:
//!
//!     comment, control keyword, type keyword, string literal, char literal,
//!     hex, binary, decimal, call shape (`name(`), include directive,
//!     declared custom type, enum member, operator run, identifier
//!
//! Keyword and declared-name rules look at the leading word of the token only, so `while (`
//! is a control keyword and `Point` inside a string literal is not a type.

use super::language::Language;
use super::scan::DeclaredNames;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static CODE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b0[xX][0-9a-fA-F]+\b",
        r"|\b0[bB][01]+\b",
        r"|\b\d+(?:\.\d+)?[fF]?\b",
        r#"|"(?:\\.|[^"\\])*""#,
        r"|'(?:\\.|[^'\\])*'",
        r"|\w+\s*\(",
        r"|//[^\n]*",
        r"|#include\s*<[^>]+>",
        r#"|#include\s*"[^"]+""#,
        r"|\w+",
        r"|\s+",
        r"|[^\s\w]+",
    ))
    .unwrap()
});

static STRING_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"(?:\\.|[^"\\])*"$"#).unwrap());
static CHAR_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^'(?:\\.|[^'\\])'$").unwrap());
static HEX_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]+$").unwrap());
static BINARY_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[bB][01]+$").unwrap());
static DECIMAL_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?[fF]?$").unwrap());
static CALL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+\s*\($").unwrap());
static INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^#include\s*(?:<[^>]+>|"[^"]+")$"#).unwrap());
static LEADING_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Comment,
    ControlKeyword,
    TypeKeyword,
    TextLiteral,
    NumericalLiteral,
    FunctionName,
    Include,
    CustomType,
    EnumType,
    Operator,
    /// Anything else: emitted as plain text
    Identifier,
}

impl Category {
    /// CSS class of the span, `None` for plain text
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Category::Comment => Some("comment"),
            Category::ControlKeyword => Some("control-keyword"),
            Category::TypeKeyword => Some("type-keyword"),
            Category::TextLiteral => Some("text-literal"),
            Category::NumericalLiteral => Some("numerical-literal"),
            Category::FunctionName => Some("function-name"),
            Category::Include => Some("include"),
            Category::CustomType => Some("custom-type"),
            Category::EnumType => Some("enum-type"),
            Category::Operator => Some("operator"),
            Category::Identifier => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeToken {
    pub category: Category,
    pub text: String,
}

/// Split a snippet into lexical tokens. Concatenating them gives back `code`.
pub fn lex_code(code: &str) -> Vec<&str> {
    CODE_TOKEN.find_iter(code).map(|m| m.as_str()).collect()
}

/// Category of a single lexical token given the snippet's declared names
pub fn classify_token(text: &str, language: &Language, names: &DeclaredNames) -> Category {
    let word = LEADING_WORD.find(text).map_or("", |m| m.as_str());

    if text.starts_with("//") {
        Category::Comment
    } else if language.is_control_keyword(word) {
        Category::ControlKeyword
    } else if language.is_type_keyword(word) {
        Category::TypeKeyword
    } else if STRING_LITERAL.is_match(text) || CHAR_LITERAL.is_match(text) {
        Category::TextLiteral
    } else if HEX_LITERAL.is_match(text)
        || BINARY_LITERAL.is_match(text)
        || DECIMAL_LITERAL.is_match(text)
    {
        Category::NumericalLiteral
    } else if CALL_SHAPE.is_match(text) {
        Category::FunctionName
    } else if INCLUDE.is_match(text) {
        Category::Include
    } else if names.is_custom_type(word) {
        Category::CustomType
    } else if names.is_enum_member(word) {
        Category::EnumType
    } else if language.is_operator_run(text) {
        Category::Operator
    } else {
        Category::Identifier
    }
}

/// Lex and classify a whole snippet
pub fn classify(code: &str, language: &Language) -> Vec<CodeToken> {
    let names = DeclaredNames::scan(code, language);
    lex_code(code)
        .into_iter()
        .map(|text| CodeToken {
            category: classify_token(text, language, &names),
            text: text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(code: &str) -> Vec<(Category, String)> {
        classify(code, Language::cpp())
            .into_iter()
            .filter(|t| !t.text.trim().is_empty())
            .map(|t| (t.category, t.text))
            .collect()
    }

    #[test]
    fn test_lexing_is_lossless() {
        let code = "int main() {\n  return 0x1F + 0b10 + 3.5f; // done\n}\n";
        assert_eq!(lex_code(code).concat(), code);
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            categories(r#"0xFF 0b101 42 3.14f "a \"q\"" 'c'"#),
            vec![
                (Category::NumericalLiteral, "0xFF".to_string()),
                (Category::NumericalLiteral, "0b101".to_string()),
                (Category::NumericalLiteral, "42".to_string()),
                (Category::NumericalLiteral, "3.14f".to_string()),
                (Category::TextLiteral, r#""a \"q\"""#.to_string()),
                (Category::TextLiteral, "'c'".to_string()),
            ]
        );
    }

    #[test]
    fn test_keywords_take_precedence_over_call_shape() {
        assert_eq!(
            categories("while (x) sizeof(int);"),
            vec![
                (Category::ControlKeyword, "while (".to_string()),
                (Category::Identifier, "x".to_string()),
                (Category::Operator, ")".to_string()),
                (Category::TypeKeyword, "sizeof(".to_string()),
                (Category::TypeKeyword, "int".to_string()),
                (Category::Operator, ");".to_string()),
            ]
        );
    }

    #[test]
    fn test_comment_wins_over_keywords() {
        assert_eq!(
            categories("// while we wait"),
            vec![(Category::Comment, "// while we wait".to_string())]
        );
    }

    #[test]
    fn test_call_shape_and_include() {
        assert_eq!(
            categories("#include <cstdio>\nprintf(\"hi\");"),
            vec![
                (Category::Include, "#include <cstdio>".to_string()),
                (Category::FunctionName, "printf(".to_string()),
                (Category::TextLiteral, "\"hi\"".to_string()),
                (Category::Operator, ");".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_symbols_are_identifiers() {
        assert_eq!(
            categories("a @ b"),
            vec![
                (Category::Identifier, "a".to_string()),
                (Category::Identifier, "@".to_string()),
                (Category::Identifier, "b".to_string()),
            ]
        );
    }
}
