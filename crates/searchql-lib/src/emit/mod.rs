//! Rendering event streams into backend-native query text.
//!
//! [`render`] feeds every event to an [`Emitter`]; [`render_split`] first
//! offers each event to a [`FieldSplitter`] so field clauses land in a
//! [`FieldMap`] instead of the text, then drops constructs left empty.

mod emitter;
mod split;
mod state;


pub use emitter::Emitter;
pub use split::{FieldMap, FieldSplitter};
pub use state::EmitterState;

use log::trace;

use crate::Result;
use crate::events::{Event, EventKind};
use split::Remainder;

/// Renders the whole stream inline. Trailing separators are trimmed.
pub fn render(emitter: &dyn Emitter, events: impl Iterator<Item = Event>) -> String {
    let mut state = EmitterState::new();
    for event in events {
        dispatch(emitter, &mut state, &event);
    }
    state.finish()
}

/// Renders free text only and collects field clauses into a map.
///
/// Fails if a field value has structure a column filter cannot express.
pub fn render_split(
    emitter: &dyn Emitter,
    events: impl Iterator<Item = Event>,
) -> Result<(String, FieldMap)> {
    let mut splitter = FieldSplitter::new();
    let mut remainder = Remainder::default();
    for event in events {
        if splitter.accept(&event)? {
            trace!("{}: diverted `{event}`", emitter.dialect().name);
            continue;
        }
        remainder.push(event);
    }

    let mut state = EmitterState::new();
    for event in remainder.into_events() {
        dispatch(emitter, &mut state, &event);
    }
    Ok((state.finish(), splitter.finish()))
}

/// Routes one event to its callback and keeps the scope depths in step.
///
/// Depths are raised after a start callback and lowered before an end
/// callback, so a construct's own delimiters see the enclosing scope.
pub fn dispatch(emitter: &dyn Emitter, state: &mut EmitterState, event: &Event) {
    trace!("{}: {event}", emitter.dialect().name);
    match event {
        Event::Term(text) => emitter.handle_term(state, text),
        Event::Start(kind) => match kind {
            EventKind::Group => emitter.start_group(state),
            EventKind::Quotes => {
                emitter.start_quotes(state);
                state.set_in_quotes(true);
            }
            EventKind::Not => {
                emitter.start_not(state);
                state.enter_not();
            }
            EventKind::Or => {
                emitter.start_or(state);
                state.enter_or();
            }
            EventKind::Field => emitter.start_field(state),
            EventKind::FieldName => emitter.start_fieldname(state),
        },
        Event::End(kind) => match kind {
            EventKind::Group => emitter.end_group(state),
            EventKind::Quotes => {
                state.set_in_quotes(false);
                emitter.end_quotes(state);
            }
            EventKind::Not => {
                state.exit_not();
                emitter.end_not(state);
            }
            EventKind::Or => {
                state.exit_or();
                emitter.end_or(state);
            }
            EventKind::Field => {
                state.exit_field_value();
                emitter.end_field(state);
            }
            EventKind::FieldName => {
                emitter.end_fieldname(state);
                state.enter_field_value();
            }
        },
    }
}
