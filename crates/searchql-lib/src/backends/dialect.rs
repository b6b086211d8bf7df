//! Token sets of the supported query syntaxes.

/// How a backend expects field-qualified clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldMode {
    /// `name:value` stays inside the query text.
    Inline,
    /// Field clauses are extracted into a separate map for structured filtering.
    Split,
}

/// Named constant set describing a backend's native query syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub name: &'static str,
    pub quotes: (&'static str, &'static str),
    pub groupers: (&'static str, &'static str),
    /// Written before each top-level clause; `None` for dialects where AND is implicit.
    pub and: Option<&'static str>,
    pub or: &'static str,
    pub not: &'static str,
    pub separator: &'static str,
    pub in_quotes_separator: &'static str,
    pub field_separator: &'static str,
    pub fields: FieldMode,
}

/// The input language itself: compiling with it normalizes a query.
pub const COMMON: Dialect = Dialect {
    name: "common",
    quotes: ("\"", "\""),
    groupers: ("(", ")"),
    and: None,
    or: " or ",
    not: "-",
    separator: " ",
    in_quotes_separator: " ",
    field_separator: ":",
    fields: FieldMode::Inline,
};

/// MySQL `MATCH ... AGAINST (... IN BOOLEAN MODE)`.
pub const MYSQL: Dialect = Dialect {
    name: "mysql",
    and: Some("+"),
    or: " ",
    fields: FieldMode::Split,
    ..COMMON
};

/// PostgreSQL `to_tsquery`.
pub const POSTGRES: Dialect = Dialect {
    name: "postgresql",
    quotes: ("'", "'"),
    or: " | ",
    not: "!",
    separator: " & ",
    fields: FieldMode::Split,
    ..COMMON
};

pub const LUCENE: Dialect = Dialect {
    name: "lucene",
    or: " ",
    not: "NOT ",
    separator: " AND ",
    ..COMMON
};

pub const SOLR: Dialect = Dialect {
    name: "solr",
    ..LUCENE
};

pub const XAPIAN: Dialect = Dialect {
    name: "xapian",
    or: " OR ",
    not: "NOT ",
    separator: " AND ",
    ..COMMON
};

/// Hyperestraier takes attribute conditions separately from the phrase.
pub const HYPERESTRAIER: Dialect = Dialect {
    name: "hyperestraier",
    fields: FieldMode::Split,
    ..LUCENE
};

/// Sphinx extended query syntax; fields render as `(@field value)`.
pub const SPHINX: Dialect = Dialect {
    name: "sphinx",
    or: " | ",
    field_separator: " ",
    ..COMMON
};
