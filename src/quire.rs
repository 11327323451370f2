//! Main module for quire library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod highlight;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod site;
pub mod testing;

pub use formats::html::render_fragment;
pub use highlight::highlight;
pub use lexer::tokenize;
pub use parser::{parse, parse_document, ParseError};
