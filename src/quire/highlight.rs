//! Code highlighter for fenced code blocks
//!
//! The second compiler of the crate, shaped like the markup one: a lexer built from one
//! combined pattern, then a classifier that gives every token a [Category]. Type and enum
//! names are found by a pre-pass over the whole snippet ([DeclaredNames]) so later and
//! earlier uses of a declared name are both tagged.
//!
//! The highlighter is total. Tokens that match no rule are emitted as plain text, or as an
//! operator span when they consist of operators only.
//!
//! ```rust,ignore
//! use quire::quire::highlight::Highlighter;
//!
//! let markup = Highlighter::default().highlight("int x = 0;");
//! ```

pub mod classify;
pub mod language;
pub mod render;
pub mod scan;

pub use classify::{Category, CodeToken};
pub use language::Language;
pub use scan::DeclaredNames;

/// Highlights snippets with one set of language tables
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    language: &'static Language,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(Language::cpp())
    }
}

impl Highlighter {
    pub fn new(language: &'static Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    /// Lex and classify a snippet
    pub fn classify(&self, code: &str) -> Vec<CodeToken> {
        classify::classify(code, self.language)
    }

    /// Category a token of `code` would get, given the names declared in `code`
    pub fn classify_token(&self, text: &str, names: &DeclaredNames) -> Category {
        classify::classify_token(text, self.language, names)
    }

    /// Markup of each non-trimmed line
    pub fn lines(&self, code: &str) -> Vec<String> {
        render::render_lines(&self.classify(code))
    }

    /// Full line-numbered markup for a snippet
    pub fn highlight(&self, code: &str) -> String {
        self.highlight_tagged(code, None)
    }

    /// Like [Highlighter::highlight], recording the fence's language tag on the holder
    pub fn highlight_tagged(&self, code: &str, language: Option<&str>) -> String {
        let lines = self.lines(code);
        tracing::debug!(lines = lines.len(), "highlighted code block");
        render::render_holder(&lines, language)
    }
}

/// Highlight a C++ snippet
pub fn highlight(code: &str) -> String {
    Highlighter::default().highlight(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tokens: &[CodeToken], text: &str) -> Vec<Category> {
        tokens
            .iter()
            .filter(|t| t.text == text)
            .map(|t| t.category)
            .collect()
    }

    #[test]
    fn test_while_is_always_control() {
        let highlighter = Highlighter::default();
        for code in ["while(x)", "while (x)", "do {} while", "x = while;"] {
            let tokens = highlighter.classify(code);
            let category = tokens
                .iter()
                .find(|t| t.text.starts_with("while"))
                .map(|t| t.category);
            assert_eq!(category, Some(Category::ControlKeyword), "in {:?}", code);
        }
    }

    #[test]
    fn test_declared_struct_is_tagged_everywhere() {
        let code = "Point origin;\nstruct Point { int x; Point* next; };\nPoint p;";
        let tokens = Highlighter::default().classify(code);
        let categories = tagged(&tokens, "Point");
        assert_eq!(categories.len(), 4);
        assert!(categories.iter().all(|c| *c == Category::CustomType));
    }

    #[test]
    fn test_enum_members() {
        let code = "enum class Color { RED, GREEN };\nColor c = RED;";
        let tokens = Highlighter::default().classify(code);
        assert_eq!(tagged(&tokens, "Color"), vec![Category::CustomType; 2]);
        assert_eq!(tagged(&tokens, "RED"), vec![Category::EnumType; 2]);
        assert_eq!(tagged(&tokens, "class"), vec![Category::TypeKeyword]);
    }

    #[test]
    fn test_reclassifying_is_stable() {
        let code = "#include <cstdint>\nstruct S { uint8_t v; };\nint f(S s) { return s.v ? 0x1 : 2; } // ok";
        let highlighter = Highlighter::default();
        let names = DeclaredNames::scan(code, highlighter.language());
        for token in highlighter.classify(code) {
            assert_eq!(
                highlighter.classify_token(&token.text, &names),
                token.category,
                "token {:?}",
                token.text
            );
        }
    }

    #[test]
    fn test_highlight_escapes_and_numbers_lines() {
        let markup = highlight("\n\nif (a < b) {\n\n    return a;\n}\n\n");
        assert_eq!(markup.matches("<div class=\"lines-index\">").count(), 4);
        assert!(markup.contains("<div class=\"lines-index\">4</div>"));
        assert!(markup.contains("<span class=\"operator\">&lt;</span>"));
        assert!(markup.contains(
            "<span class=\"control-keyword\">if</span> <span class=\"operator\">(</span>"
        ));
        assert!(!markup.contains("< b"));
    }

    #[test]
    fn test_blank_snippet_has_no_lines() {
        let markup = highlight("  \n \n");
        assert!(!markup.contains("lines-index"));
        assert!(!markup.contains("code-line"));
    }
}
