//! Declaration pre-pass
//!
//! Before any token is classified the whole snippet is scanned once for type declarations
//! (`class X`, `struct X`, `typename X`, `enum X`) and for enum member lists. The result is
//! immutable and consulted read-only while classifying, so a name is recognised everywhere in
//! the snippet, including before its declaration.

use super::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TYPE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(class|struct|typename|enum)\s+(\w+)").unwrap());

static ENUM_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(enum|enum\s+class)\s+\w+\s*\{([^}]*)\}").unwrap());

static LEADING_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+").unwrap());

const DECLARATION_KEYWORDS: &[&str] = &["class", "struct", "typename", "enum"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredNames {
    custom_types: HashSet<String>,
    enum_members: HashSet<String>,
}

impl DeclaredNames {
    /// Scan `code` for declared type names and enum members.
    ///
    /// The language's built-in types are always included.
    pub fn scan(code: &str, language: &Language) -> Self {
        let mut names = DeclaredNames::default();
        names
            .custom_types
            .extend(language.builtin_types().map(str::to_string));

        let mut position = 0;
        while let Some(captures) = TYPE_DECLARATION.captures_at(code, position) {
            let (Some(whole), Some(keyword), Some(name)) =
                (captures.get(0), captures.get(1), captures.get(2))
            else {
                break;
            };
            if DECLARATION_KEYWORDS.contains(&name.as_str()) {
                // `enum class Color`: rescan from the second keyword
                position = whole.start() + keyword.len();
            } else {
                names.custom_types.insert(name.as_str().to_string());
                position = whole.end();
            }
        }

        for captures in ENUM_BODY.captures_iter(code) {
            let Some(body) = captures.get(2) else {
                continue;
            };
            for member in body.as_str().split(',') {
                // `RED = 1` declares `RED`
                if let Some(word) = LEADING_WORD.find(member.trim()) {
                    names.enum_members.insert(word.as_str().to_string());
                }
            }
        }

        names
    }

    pub fn is_custom_type(&self, word: &str) -> bool {
        self.custom_types.contains(word)
    }

    pub fn is_enum_member(&self, word: &str) -> bool {
        self.enum_members.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_and_class_names() {
        let names = DeclaredNames::scan(
            "struct Point { int x; };\nclass Shape;\ntemplate <typename T> T id(T v);",
            Language::cpp(),
        );
        assert!(names.is_custom_type("Point"));
        assert!(names.is_custom_type("Shape"));
        assert!(names.is_custom_type("T"));
        assert!(!names.is_custom_type("x"));
    }

    #[test]
    fn test_enum_class_does_not_declare_keyword() {
        let names = DeclaredNames::scan("enum class Color { RED, GREEN = 2, };", Language::cpp());
        assert!(names.is_custom_type("Color"));
        assert!(!names.is_custom_type("class"));
        assert!(names.is_enum_member("RED"));
        assert!(names.is_enum_member("GREEN"));
        assert!(!names.is_enum_member(""));
    }

    #[test]
    fn test_builtin_types_are_seeded() {
        let names = DeclaredNames::scan("", Language::cpp());
        assert!(names.is_custom_type("size_t"));
        assert!(names.is_custom_type("int32_t"));
    }
}
