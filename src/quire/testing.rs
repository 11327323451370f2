//! Testing utilities for AST assertions
//!
//! This module provides a fluent API for asserting on document trees, which keeps parser
//! tests readable when a document holds nested segments, tables and inline runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use quire::quire::testing::assert_ast;
//!
//! let doc = parse_document("- a\n- b\n").unwrap();
//!
//! assert_ast(&doc)
//!     .block_count(1)
//!     .block(0, |block| {
//!         block.assert_list().item_count(2).item_text(0, "a");
//!     });
//! ```

mod assertions;
mod matchers;

pub use assertions::{
    assert_ast, BlockAssertion, DocumentAssertion, InlineAssertion, ListAssertion,
    ParagraphAssertion, SegmentAssertion, TableAssertion,
};
pub use matchers::TextMatch;
