use indexmap::IndexMap;

use crate::events::{Event, EventKind};
use crate::{Error, Result};

/// Field name → value, in first-seen order. Later occurrences overwrite the value.
pub type FieldMap = IndexMap<String, String>;

#[derive(Debug, Default)]
struct PendingField {
    name: String,
    in_name: bool,
    value: Vec<String>,
}

/// Diverts every event between `Start(field)` and `End(field)` into a [`FieldMap`].
///
/// A value is a single term or a phrase, stored as its terms joined by a
/// single space. Groups, negation and `or` have no equality-filter form, so a
/// field holding one is rejected with [`Error::UnsplittableField`].
#[derive(Debug, Default)]
pub struct FieldSplitter {
    pending: Option<PendingField>,
    fields: FieldMap,
}

impl FieldSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Ok(true)` if the event belongs to a field and was consumed.
    pub fn accept(&mut self, event: &Event) -> Result<bool> {
        if *event == Event::Start(EventKind::Field) {
            self.pending = Some(PendingField::default());
            return Ok(true);
        }

        if *event == Event::End(EventKind::Field) {
            let Some(field) = self.pending.take() else {
                return Ok(false);
            };
            log::trace!("extracted field `{}`", field.name);
            self.fields.insert(field.name, field.value.join(" "));
            return Ok(true);
        }

        let Some(pending) = self.pending.as_mut() else {
            return Ok(false);
        };

        match event {
            Event::Start(EventKind::FieldName) => pending.in_name = true,
            Event::End(EventKind::FieldName) => pending.in_name = false,
            Event::Term(text) if pending.in_name => pending.name.push_str(text),
            Event::Term(text) => pending.value.push(text.clone()),
            Event::Start(EventKind::Quotes) | Event::End(EventKind::Quotes) => {}
            Event::Start(_) | Event::End(_) => {
                return Err(Error::UnsplittableField {
                    name: pending.name.clone(),
                });
            }
        }
        Ok(true)
    }

    pub fn finish(self) -> FieldMap {
        self.fields
    }
}

/// Events left for the emitter once fields are gone.
///
/// A group, negation or `or` whose contents were all split out is dropped
/// together with its delimiters, so no backend ever sees `()` or `-()`.
#[derive(Debug, Default)]
pub(super) struct Remainder {
    events: Vec<Event>,
}

impl Remainder {
    pub(super) fn push(&mut self, event: Event) {
        if let Event::End(kind) = &event
            && self.events.last() == Some(&Event::Start(*kind))
        {
            log::trace!("dropped empty {kind}");
            self.events.pop();
            return;
        }
        self.events.push(event);
    }

    pub(super) fn into_events(self) -> Vec<Event> {
        self.events
    }
}
