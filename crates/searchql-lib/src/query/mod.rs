//! Query facade: parse once, compile for any backend.
//!
//! [`QueryBuilder`] carries the parser limits; [`Query`] owns the parse
//! tree and its diagnostics. The free functions cover the common one-shot
//! cases and treat the empty string as an empty query.

mod dump;
mod printer;
pub use printer::QueryPrinter;

#[cfg(test)]
mod query_tests;

use log::debug;
use serde::Serialize;

use crate::backends::{Backend, FieldMode};
use crate::diagnostics::Diagnostics;
use crate::emit::{self, Emitter, FieldMap};
use crate::events::Events;
use crate::parser::lexer::lex;
use crate::parser::{ParseResult, Parser, Root, SyntaxNode};
use crate::{Error, Result};

const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Parser limits for a query.
pub struct QueryBuilder<'q> {
    src: &'q str,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
}

impl<'q> QueryBuilder<'q> {
    pub fn new(src: &'q str) -> Self {
        Self {
            src,
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Token budget; `None` disables the limit.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Nesting budget; `None` disables the limit.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Parses the query. Syntax problems become diagnostics; only fuel
    /// exhaustion is an `Err`.
    pub fn parse(self) -> Result<Query<'q>> {
        let parser = Parser::new(self.src, lex(self.src))
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel);

        let ParseResult {
            root,
            diagnostics,
            exec_fuel_consumed,
        } = parser.parse()?;

        debug!(
            "parsed {} bytes: {} errors, {} warnings, {} fuel",
            self.src.len(),
            diagnostics.error_count(),
            diagnostics.warning_count(),
            exec_fuel_consumed
        );

        Ok(Query {
            source: self.src,
            root,
            diagnostics,
            exec_fuel_consumed,
        })
    }
}

/// A parsed query.
///
/// Check [`is_valid`](Self::is_valid) or [`diagnostics`](Self::diagnostics)
/// to see whether it has syntax errors. Compiling an invalid query fails with
/// [`Error::QueryParseError`].
#[derive(Debug, Clone)]
pub struct Query<'a> {
    source: &'a str,
    root: Root,
    diagnostics: Diagnostics,
    exec_fuel_consumed: u32,
}

impl<'a> TryFrom<&'a str> for Query<'a> {
    type Error = Error;

    fn try_from(source: &'a str) -> Result<Self> {
        QueryBuilder::new(source).parse()
    }
}

impl<'a> Query<'a> {
    pub fn builder(source: &'a str) -> QueryBuilder<'a> {
        QueryBuilder::new(source)
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        self.root.as_cst()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    /// `true` when there are no error diagnostics. Warnings don't count.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// The flattened event stream. Produced fresh on every call.
    pub fn events(&self) -> Events {
        Events::new(&self.root)
    }

    pub fn compile(&self, backend: Backend) -> Result<String> {
        self.compile_with(backend.emitter())
    }

    pub fn compile_split(&self, backend: Backend) -> Result<(String, FieldMap)> {
        self.compile_split_with(backend.emitter())
    }

    pub fn compile_with(&self, emitter: &dyn Emitter) -> Result<String> {
        self.ensure_valid()?;
        let text = emit::render(emitter, self.events());
        debug!(
            "compiled for {} (inline): {} bytes",
            emitter.dialect().name,
            text.len()
        );
        Ok(text)
    }

    pub fn compile_split_with(&self, emitter: &dyn Emitter) -> Result<(String, FieldMap)> {
        self.ensure_valid()?;
        let (text, fields) = emit::render_split(emitter, self.events())?;
        debug!(
            "compiled for {} (split): {} bytes, {} fields",
            emitter.dialect().name,
            text.len(),
            fields.len()
        );
        Ok((text, fields))
    }

    /// Compiles using the backend's declared field policy.
    pub fn compile_for(&self, backend: Backend) -> Result<CompiledQuery> {
        match backend.field_mode() {
            FieldMode::Inline => Ok(CompiledQuery {
                query: self.compile(backend)?,
                fields: FieldMap::new(),
            }),
            FieldMode::Split => {
                let (query, fields) = self.compile_split(backend)?;
                Ok(CompiledQuery { query, fields })
            }
        }
    }

    pub fn printer(&self) -> QueryPrinter<'_, 'a> {
        QueryPrinter::new(self)
    }

    fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        Err(Error::QueryParseError(self.diagnostics.clone()))
    }
}

/// Backend-native query text plus any extracted field clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledQuery {
    pub query: String,
    pub fields: FieldMap,
}

/// Compiles `query` inline for `backend`. `""` compiles to `""`.
pub fn compile(query: &str, backend: Backend) -> Result<String> {
    compile_with(query, backend.emitter())
}

/// Compiles `query` for `backend`, extracting field clauses. `""` compiles to `("", {})`.
pub fn compile_split(query: &str, backend: Backend) -> Result<(String, FieldMap)> {
    compile_split_with(query, backend.emitter())
}

pub fn compile_with(query: &str, emitter: &dyn Emitter) -> Result<String> {
    if query.is_empty() {
        return Ok(String::new());
    }
    Query::try_from(query)?.compile_with(emitter)
}

pub fn compile_split_with(query: &str, emitter: &dyn Emitter) -> Result<(String, FieldMap)> {
    if query.is_empty() {
        return Ok((String::new(), FieldMap::new()));
    }
    Query::try_from(query)?.compile_split_with(emitter)
}

/// Compiles `query` using the backend's declared field policy.
pub fn compile_for(query: &str, backend: Backend) -> Result<CompiledQuery> {
    if query.is_empty() {
        return Ok(CompiledQuery::default());
    }
    Query::try_from(query)?.compile_for(backend)
}
