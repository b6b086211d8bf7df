//! searchql: one search query language, many full-text backends.
//!
//! Queries are written in a small common language (terms, `"phrases"`,
//! `(groups)`, `-negation`, `field:value` and `or`) and compiled into the
//! native syntax of a search backend.
//!
//! # Example
//!
//! ```
//! use searchql_lib::{Backend, compile, compile_split};
//!
//! let text = compile("kansas sports", Backend::Solr).unwrap();
//! assert_eq!(text, "kansas AND sports");
//!
//! let (text, fields) = compile_split("author:John", Backend::Mysql).unwrap();
//! assert_eq!(text, "");
//! assert_eq!(fields["author"], "John");
//! ```
//!
//! Pipeline stages:
//! - `parser` - lexer, CST, and typed AST
//! - `events` - flattening the AST into a start/end/term event stream
//! - `emit` - emitter protocol, emitter state, and field splitting
//! - `backends` - per-backend dialects and the backend registry
//! - `query` - high-level Query facade and compile entry points
//! - `request` - search request descriptor (ordering, offset/limit)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod backends;
pub mod diagnostics;
pub mod emit;
pub mod events;
pub mod parser;
pub mod query;
pub mod request;

pub use backends::{Backend, Dialect, FieldMode};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::{Emitter, EmitterState, FieldMap};
pub use events::{Event, EventKind, Events};
pub use query::{
    CompiledQuery, Query, QueryBuilder, compile, compile_for, compile_split, compile_split_with,
    compile_with,
};
pub use request::{SearchRequest, SortKey};

/// Errors that can occur while compiling a query.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("query parsing failed with {} errors", .0.error_count())]
    QueryParseError(Diagnostics),

    /// Split mode can only extract a field whose value is a term or a phrase.
    #[error("field `{name}` cannot be split out: its value must be a term or a phrase")]
    UnsplittableField { name: String },

    #[error("unknown backend `{name}` (available: {available})")]
    UnknownBackend { name: String, available: String },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;
