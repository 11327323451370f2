//! Keyword and operator tables
//!
//! A [Language] is read-only once built. The C++ tables are built on first use and shared.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

const CPP_CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "switch", "case", "default", "do", "while", "for", "break", "continue",
    "return", "goto", "try", "catch", "throw",
];

const CPP_TYPE_KEYWORDS: &[&str] = &[
    "bool", "char", "short", "int", "long", "signed", "unsigned", "float", "double", "void",
    "auto", "decltype", "const", "volatile", "mutable", "static", "extern", "register",
    "thread_local", "namespace", "using", "class", "struct", "union", "friend", "public",
    "private", "protected", "virtual", "explicit", "final", "override", "sizeof", "alignof",
    "new", "delete", "co_await", "co_return", "co_yield", "static_cast", "dynamic_cast",
    "const_cast", "reinterpret_cast", "and", "and_eq", "bitand", "bitor", "not", "not_eq", "or",
    "or_eq", "xor", "xor_eq", "compl", "asm", "static_assert", "noexcept", "nullptr", "typeid",
    "typedef", "requires", "concept", "alignas", "consteval", "constexpr", "constinit", "import",
    "module", "reflexpr", "synchronized", "enum", "template", "typename",
];

const CPP_OPERATORS: &[&str] = &[
    ">", "<", ",", "{", "}", "(", ")", "+", "-", "*", "/", "%", "++", "--", "==", "!=", "<=",
    ">=", "&&", "||", "!", "&", "|", "^", "~", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "<<=", ">>=", "->", ".", "->*", ".*", "::", ";", "[", "]",
];

const CPP_BUILTIN_TYPES: &[&str] = &[
    "size_t", "char8_t", "char16_t", "char32_t", "wchar_t", "int8_t", "int16_t", "int32_t",
    "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
];

static CPP: Lazy<Language> = Lazy::new(|| {
    Language::new(
        "cpp",
        CPP_CONTROL_KEYWORDS,
        CPP_TYPE_KEYWORDS,
        CPP_OPERATORS,
        CPP_BUILTIN_TYPES,
    )
});

#[derive(Debug)]
pub struct Language {
    name: &'static str,
    control_keywords: HashSet<&'static str>,
    type_keywords: HashSet<&'static str>,
    builtin_types: HashSet<&'static str>,
    /// Whole-token match of one or more operators back to back
    operator_run: Regex,
}

impl Language {
    pub fn new(
        name: &'static str,
        control_keywords: &[&'static str],
        type_keywords: &[&'static str],
        operators: &[&'static str],
        builtin_types: &[&'static str],
    ) -> Self {
        let mut sorted: Vec<&str> = operators.to_vec();
        sorted.sort_by_key(|op| std::cmp::Reverse(op.len()));
        let alternation = sorted
            .iter()
            .map(|op| regex::escape(op))
            .collect::<Vec<_>>()
            .join("|");
        let operator_run = Regex::new(&format!("^(?:{})+$", alternation)).unwrap();

        Self {
            name,
            control_keywords: control_keywords.iter().copied().collect(),
            type_keywords: type_keywords.iter().copied().collect(),
            builtin_types: builtin_types.iter().copied().collect(),
            operator_run,
        }
    }

    /// The built-in C++ tables
    pub fn cpp() -> &'static Language {
        &CPP
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_control_keyword(&self, word: &str) -> bool {
        self.control_keywords.contains(word)
    }

    pub fn is_type_keyword(&self, word: &str) -> bool {
        self.type_keywords.contains(word)
    }

    pub fn builtin_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builtin_types.iter().copied()
    }

    /// Whether `text` is made only of operators, e.g. `->*` or `};`
    pub fn is_operator_run(&self, text: &str) -> bool {
        self.operator_run.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tables() {
        let cpp = Language::cpp();
        assert!(cpp.is_control_keyword("while"));
        assert!(!cpp.is_control_keyword("int"));
        assert!(cpp.is_type_keyword("constexpr"));
        assert!(cpp.builtin_types().any(|t| t == "uint64_t"));
        assert_eq!(cpp.name(), "cpp");
    }

    #[test]
    fn test_operator_runs() {
        let cpp = Language::cpp();
        for run in ["->*", "<<=", "};", "::", "()", "->"] {
            assert!(cpp.is_operator_run(run), "{} should be an operator run", run);
        }
        for other in ["@", "\"", "#", "a+", ""] {
            assert!(!cpp.is_operator_run(other), "{:?} is not an operator run", other);
        }
    }
}
