//! Backend registry and per-backend emitters.
//!
//! Backends are an immutable, closed set. Each one pairs a [`Dialect`] with an
//! [`Emitter`]; most emitters only supply their dialect and inherit every
//! callback, Sphinx overrides field names.

pub mod dialect;
mod sphinx;


use std::fmt;
use std::str::FromStr;

pub use dialect::{Dialect, FieldMode};
pub use sphinx::Sphinx;

use crate::Error;
use crate::emit::Emitter;

/// Emitter that renders purely from its dialect.
macro_rules! dialect_emitter {
    ($(#[$meta:meta])* $name:ident => $dialect:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Emitter for $name {
            fn dialect(&self) -> &Dialect {
                &$dialect
            }
        }
    };
}

dialect_emitter!(
    /// Identity backend: renders the common query language itself.
    Common => dialect::COMMON
);
dialect_emitter!(
    /// MySQL boolean-mode full-text search.
    Mysql => dialect::MYSQL
);
dialect_emitter!(
    /// PostgreSQL tsquery.
    Postgres => dialect::POSTGRES
);
dialect_emitter!(Lucene => dialect::LUCENE);
dialect_emitter!(Solr => dialect::SOLR);
dialect_emitter!(Xapian => dialect::XAPIAN);
dialect_emitter!(Hyperestraier => dialect::HYPERESTRAIER);

macro_rules! define_backends {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                emitter: $emitter:ident,
                names: [$($alias:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        /// A supported search backend.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Backend {
            $($variant,)*
        }

        impl Backend {
            /// Every backend, in listing order.
            pub const ALL: &'static [Backend] = &[$(Backend::$variant,)*];

            /// Canonical name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Backend::$variant => $name,)*
                }
            }

            /// Every accepted name, canonical name first.
            pub fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $(Backend::$variant => &[$($alias),*],)*
                }
            }

            /// Case-insensitive lookup by name or alias.
            pub fn from_name(s: &str) -> Option<Backend> {
                match s.to_ascii_lowercase().as_str() {
                    $($($alias)|* => Some(Backend::$variant),)*
                    _ => None,
                }
            }

            pub fn emitter(&self) -> &'static dyn Emitter {
                match self {
                    $(Backend::$variant => &$emitter,)*
                }
            }
        }
    };
}

define_backends! {
    Common => {
        name: "common",
        emitter: Common,
        names: ["common", "dummy"],
    },
    Mysql => {
        name: "mysql",
        emitter: Mysql,
        names: ["mysql"],
    },
    Postgres => {
        name: "postgresql",
        emitter: Postgres,
        names: ["postgresql", "postgres", "pg"],
    },
    Lucene => {
        name: "lucene",
        emitter: Lucene,
        names: ["lucene"],
    },
    Solr => {
        name: "solr",
        emitter: Solr,
        names: ["solr"],
    },
    Xapian => {
        name: "xapian",
        emitter: Xapian,
        names: ["xapian"],
    },
    Hyperestraier => {
        name: "hyperestraier",
        emitter: Hyperestraier,
        names: ["hyperestraier", "estraier"],
    },
    Sphinx => {
        name: "sphinx",
        emitter: Sphinx,
        names: ["sphinx"],
    },
}

impl Backend {
    pub fn dialect(&self) -> &'static Dialect {
        self.emitter().dialect()
    }

    /// Whether field clauses stay inline or are split out by default.
    pub fn field_mode(&self) -> FieldMode {
        self.dialect().fields
    }

    /// Comma-separated canonical names, for error messages.
    pub fn available() -> String {
        Backend::ALL
            .iter()
            .map(|b| b.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Backend::from_name(s).ok_or_else(|| Error::UnknownBackend {
            name: s.to_string(),
            available: Backend::available(),
        })
    }
}
