//! Text matching for AST assertions

/// How an assertion compares rendered or plain text
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
        }
    }

    fn describe(&self) -> String {
        match self {
            TextMatch::Exact(expected) => format!("be {:?}", expected),
            TextMatch::StartsWith(prefix) => format!("start with {:?}", prefix),
            TextMatch::Contains(needle) => format!("contain {:?}", needle),
        }
    }

    /// Panic with `context` when `actual` does not match
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: Expected text to {}, but got {:?}",
            context,
            self.describe(),
            actual
        );
    }
}
