//! Output formats for parsed documents
//!
//! - html: the rendered page fragment (the compiler's real output)
//! - tag: an XML-like dump of the tree, for inspection
//! - json: the tree through serde
//!
//! Every format implements [Formatter] and is reachable by name through [FormatRegistry].

pub mod html;
pub mod registry;
pub mod tag;

pub use html::{render_document, render_fragment, HtmlFormatter, HtmlRenderer};
pub use registry::{FormatError, FormatRegistry, Formatter, JsonFormatter};
pub use tag::{serialize_document as serialize_ast_tag, TagFormatter};
