//! # quire
//!
//! A compiler for the quire page markup.
//!
//! File Layout
//!
//! The crate holds two small compilers that share the same shape: a lexer that classifies
//! characters into a flat token stream and a consumer that walks that stream with one token
//! of lookahead.
//!
//! src/quire
//!   ├── lexer        Markup lexer (characters -> tokens)
//!   ├── parser       Recursive descent parser (tokens -> Document)
//!   ├── ast          The Document / Block / Inline tree
//!   ├── formats      Render passes over the tree (html, tag)
//!   ├── highlight    Source code tokenizer and classifier for fenced code
//!   ├── processor    Stage/format inspection of a single file
//!   ├── site         Page assembly and the per-document error boundary
//!   └── config       Layered configuration for the site builder
//!
//! The compilers themselves never touch the file system. Only `site` and `processor` do.
//!
//! For parser test helpers, see the [testing module](quire::testing).

pub mod quire;
