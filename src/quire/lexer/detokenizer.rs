//! Detokenizer for the quire markup
//!
//! Converts a stream of tokens back into a string. Since every token keeps its exact source
//! text this is plain concatenation. The parser uses it for verbatim spans: emphasis and code
//! bodies, link labels and addresses, fenced blocks.
use crate::quire::lexer::tokens::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.value.len()).sum());
    for token in tokens {
        result.push_str(&token.value);
    }
    result
}
