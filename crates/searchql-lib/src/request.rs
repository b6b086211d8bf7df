//! Search request descriptor: the query plus ordering and result window.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::backends::Backend;
use crate::query::{CompiledQuery, compile_for};
use crate::Result;

/// Pseudo-field ordering by match score.
pub const RELEVANCE: &str = "relevance";

/// One ordering key. Written `title` for ascending, `-title` for descending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

impl SortKey {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    pub fn is_relevance(&self) -> bool {
        self.field == RELEVANCE
    }

    /// `field asc|desc`, with relevance spelled `score`.
    pub fn sort_clause(&self) -> String {
        let field = if self.is_relevance() {
            "score"
        } else {
            self.field.as_str()
        };
        let direction = if self.descending { "desc" } else { "asc" };
        format!("{field} {direction}")
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.strip_prefix('-') {
            Some(field) => SortKey::descending(field),
            None => SortKey::ascending(s),
        }
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SortKey::from(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            f.write_str("-")?;
        }
        f.write_str(&self.field)
    }
}

/// A query together with the models it targets, its ordering, and an
/// offset/limit window.
///
/// Limits compose: each [`set_limits`](Self::set_limits) call is applied
/// relative to the window already in place, so slicing a slice narrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    query: String,
    models: Vec<String>,
    order_by: Vec<SortKey>,
    low_mark: usize,
    high_mark: Option<usize>,
}

impl SearchRequest {
    /// New request ordered by descending relevance with no window.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            models: Vec::new(),
            order_by: vec![SortKey::descending(RELEVANCE)],
            low_mark: 0,
            high_mark: None,
        }
    }

    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the ordering. Keys use the `-field` convention.
    pub fn order_by<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.order_by = keys.into_iter().map(|k| SortKey::from(k.as_ref())).collect();
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn ordering(&self) -> &[SortKey] {
        &self.order_by
    }

    /// Narrows the window. `low` and `high` are relative to the current offset,
    /// and neither bound can move past the current upper bound.
    pub fn set_limits(&mut self, low: Option<usize>, high: Option<usize>) {
        if let Some(high) = high {
            let candidate = self.low_mark + high;
            self.high_mark = Some(match self.high_mark {
                Some(current) => current.min(candidate),
                None => candidate,
            });
        }
        if let Some(low) = low {
            let candidate = self.low_mark + low;
            self.low_mark = match self.high_mark {
                Some(current) => current.min(candidate),
                None => candidate,
            };
        }
    }

    pub fn clear_limits(&mut self) {
        self.low_mark = 0;
        self.high_mark = None;
    }

    pub fn offset(&self) -> usize {
        self.low_mark
    }

    /// Number of results requested; `None` means unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.high_mark.map(|high| high.saturating_sub(self.low_mark))
    }

    /// Comma-joined `field asc|desc` list for engines that take a sort parameter.
    pub fn sort_clause(&self) -> String {
        self.order_by
            .iter()
            .map(SortKey::sort_clause)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn compile(&self, backend: Backend) -> Result<CompiledQuery> {
        compile_for(&self.query, backend)
    }
}
