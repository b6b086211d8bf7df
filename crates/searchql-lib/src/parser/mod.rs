//! Parser infrastructure for the common query language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace collected, then attached as leading trivia
//! - Checkpoint-based wrapping: retroactively wrap a clause in an `Or` node once `or` is seen
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. An open group ends its clause list at `)`; a stray `)` elsewhere is an error
//! 4. On recursion limit, remaining input goes into single Error node
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{Expr, Field, FieldName, Group, Not, Or, Phrase, Root, Term};

pub use core::{ParseResult, Parser};

/// Parses with default limits: no exec fuel, no recursion limit.
pub fn parse(source: &str) -> crate::Result<ParseResult> {
    Parser::new(source, lexer::lex(source)).parse()
}
