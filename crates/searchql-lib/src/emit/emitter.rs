use crate::backends::Dialect;

use super::state::EmitterState;

/// Rendering callbacks driven by the event stream.
///
/// Every callback has a default body written against [`Emitter::dialect`], so a
/// backend overrides only what its syntax does differently. Scope depths in
/// [`EmitterState`] are maintained by the driver, not by these callbacks.
pub trait Emitter {
    fn dialect(&self) -> &Dialect;

    /// Writes the dialect's AND connective when the next clause sits at clause level.
    fn write_and(&self, state: &mut EmitterState) {
        if let Some(and) = self.dialect().and
            && state.at_clause_level()
        {
            state.write(and);
        }
    }

    fn handle_term(&self, state: &mut EmitterState, term: &str) {
        self.write_and(state);
        state.write(term);
        state.write_sep(self.dialect());
    }

    fn start_quotes(&self, state: &mut EmitterState) {
        self.write_and(state);
        state.write(self.dialect().quotes.0);
    }

    fn end_quotes(&self, state: &mut EmitterState) {
        state.retract_sep();
        state.write(self.dialect().quotes.1);
        state.write_sep(self.dialect());
    }

    fn start_group(&self, state: &mut EmitterState) {
        self.write_and(state);
        state.write(self.dialect().groupers.0);
    }

    fn end_group(&self, state: &mut EmitterState) {
        state.retract_sep();
        state.write(self.dialect().groupers.1);
        state.write_sep(self.dialect());
    }

    fn start_not(&self, state: &mut EmitterState) {
        state.write(self.dialect().not);
    }

    fn end_not(&self, _state: &mut EmitterState) {}

    fn start_or(&self, state: &mut EmitterState) {
        state.push_sep(self.dialect().or);
    }

    fn end_or(&self, _state: &mut EmitterState) {}

    fn start_field(&self, _state: &mut EmitterState) {}

    fn end_field(&self, _state: &mut EmitterState) {}

    fn start_fieldname(&self, state: &mut EmitterState) {
        state.push_sep(self.dialect().field_separator);
    }

    fn end_fieldname(&self, _state: &mut EmitterState) {}
}
