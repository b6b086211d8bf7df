use crate::backends::Dialect;

/// Per-compilation output buffer and scope bookkeeping.
///
/// Separators are written eagerly after every term and retracted when a
/// closing delimiter (or the end of the query) makes them redundant.
#[derive(Debug, Default)]
pub struct EmitterState {
    out: String,
    in_quotes: bool,
    sepstack: Vec<&'static str>,
    /// Length of the separator currently ending `out`; zero after any other write.
    trailing_sep: usize,
    not_depth: u32,
    or_depth: u32,
    field_value_depth: u32,
}

impl EmitterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
        self.trailing_sep = 0;
    }

    /// Appends exactly one separator: the pushed one if any, else the
    /// dialect's in-quotes or default separator.
    pub fn write_sep(&mut self, dialect: &Dialect) {
        let sep = match self.sepstack.pop() {
            Some(sep) => sep,
            None if self.in_quotes => dialect.in_quotes_separator,
            None => dialect.separator,
        };
        self.out.push_str(sep);
        self.trailing_sep = sep.len();
    }

    /// Makes `sep` the next separator written.
    pub fn push_sep(&mut self, sep: &'static str) {
        self.sepstack.push(sep);
    }

    /// Removes the separator ending the buffer, if any.
    pub fn retract_sep(&mut self) {
        let len = self.out.len() - self.trailing_sep;
        self.out.truncate(len);
        self.trailing_sep = 0;
    }

    /// Writes `text` in front of the trailing separator, keeping the separator last.
    pub fn insert_before_sep(&mut self, text: &str) {
        let at = self.out.len() - self.trailing_sep;
        self.out.insert_str(at, text);
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn finish(mut self) -> String {
        self.retract_sep();
        self.out
    }

    pub fn in_quotes(&self) -> bool {
        self.in_quotes
    }

    pub fn not_depth(&self) -> u32 {
        self.not_depth
    }

    pub fn or_depth(&self) -> u32 {
        self.or_depth
    }

    pub fn field_value_depth(&self) -> u32 {
        self.field_value_depth
    }

    /// Whether an explicit AND connective belongs before the next clause.
    pub fn at_clause_level(&self) -> bool {
        !self.in_quotes && self.not_depth == 0 && self.or_depth == 0 && self.field_value_depth == 0
    }

    pub(crate) fn set_in_quotes(&mut self, value: bool) {
        self.in_quotes = value;
    }

    pub(crate) fn enter_not(&mut self) {
        self.not_depth += 1;
    }

    pub(crate) fn exit_not(&mut self) {
        self.not_depth = self.not_depth.saturating_sub(1);
    }

    pub(crate) fn enter_or(&mut self) {
        self.or_depth += 1;
    }

    pub(crate) fn exit_or(&mut self) {
        self.or_depth = self.or_depth.saturating_sub(1);
    }

    pub(crate) fn enter_field_value(&mut self) {
        self.field_value_depth += 1;
    }

    pub(crate) fn exit_field_value(&mut self) {
        self.field_value_depth = self.field_value_depth.saturating_sub(1);
    }
}
