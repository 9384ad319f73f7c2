//! gqlex: context-sensitive GraphQL tokenizer.
//!
//! Turns GraphQL schema and query documents into a flat stream of classified tokens for
//! syntax highlighting. The same identifier is classified differently depending on where
//! it appears (a declared type name, a field argument, a selected field, ...), which the
//! scanner tracks with a stack of lexical contexts.
//!
//! # Example
//!
//! ```
//! use gqlex_lib::{TokenKind, token_text, tokenize};
//!
//! let source = "type User { id: ID! }";
//! let tokens = tokenize(source);
//!
//! let user = tokens.iter().find(|t| token_text(source, t) == "User").unwrap();
//! assert_eq!(user.kind, TokenKind::NameClass);
//! ```
//!
//! The scanner never fails: text no rule accepts becomes one `Unknown` token per
//! character, and the tokens always cover the whole input.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod descriptor;
pub mod highlight;
pub mod scanner;
pub mod table;
pub mod token;

mod invariants;

#[cfg(test)]
mod descriptor_tests;
#[cfg(test)]
mod token_tests;

pub use descriptor::{GRAPHQL, LexerDescriptor};
pub use highlight::{Colors, render};
pub use scanner::{ContextStack, Scanner, tokenize};
pub use table::{ContextId, ContextTable, TableError};
pub use token::{Token, TokenKind, token_text};

/// Errors surfaced by the library.
///
/// Scanning is infallible; only building a custom context table can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid context table: {0}")]
    Table(#[from] TableError),
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Builds a custom context table, wrapping validation failures in [`Error`].
pub fn build_table(defs: Vec<table::ContextDef>) -> Result<ContextTable> {
    Ok(ContextTable::build(defs)?)
}
