use crate::emit::{Emitter, EmitterState};

use super::dialect::{Dialect, SPHINX};

/// Sphinx extended syntax.
///
/// A field clause renders as `(@field value)`. The parentheses matter: a bare
/// `@field` limit stays in force until the next field operator or closing
/// parenthesis, so `@title foo bar` would search `bar` in `title` too.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphinx;

impl Emitter for Sphinx {
    fn dialect(&self) -> &Dialect {
        &SPHINX
    }

    fn start_field(&self, state: &mut EmitterState) {
        state.write(SPHINX.groupers.0);
    }

    fn start_fieldname(&self, state: &mut EmitterState) {
        state.write("@");
        state.push_sep(SPHINX.field_separator);
    }

    fn end_field(&self, state: &mut EmitterState) {
        // The pending separator may be an `or` pushed before the field.
        state.insert_before_sep(SPHINX.groupers.1);
    }
}
