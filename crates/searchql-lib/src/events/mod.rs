//! Flattening a parsed query into a linear event stream.
//!
//! Composite nodes emit `Start(kind)`, their children's events, then
//! `End(kind)`. Terms emit a single `Term(text)`. Backends only ever see
//! this stream, never the tree.


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::{Expr, Root};

/// Kind of a composite construct in the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Group,
    Quotes,
    Not,
    Field,
    FieldName,
    Or,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Group => "group",
            EventKind::Quotes => "quotes",
            EventKind::Not => "not",
            EventKind::Field => "field",
            EventKind::FieldName => "fieldname",
            EventKind::Or => "or",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the flattened query.
///
/// Serializes as `{"action": "start", "arg": "group"}` or
/// `{"action": "term", "arg": "video"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "arg", rename_all = "lowercase")]
pub enum Event {
    Start(EventKind),
    End(EventKind),
    Term(String),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Start(kind) => write!(f, "start {kind}"),
            Event::End(kind) => write!(f, "end {kind}"),
            Event::Term(text) => write!(f, "term {text}"),
        }
    }
}

enum Step {
    Visit(Expr),
    Emit(Event),
}

/// Lazy, once-only event iterator over a parse tree.
///
/// Walks with an explicit stack, so nesting depth never touches the call stack.
pub struct Events {
    stack: Vec<Step>,
}

impl Events {
    pub fn new(root: &Root) -> Self {
        let mut stack: Vec<Step> = root.clauses().map(Step::Visit).collect();
        stack.reverse();
        Self { stack }
    }

    fn expand(&mut self, expr: Expr) -> Event {
        match expr {
            Expr::Term(term) => Event::Term(term.text()),
            Expr::Phrase(phrase) => self.open(EventKind::Quotes, phrase.terms().map(Expr::Term)),
            Expr::Group(group) => self.open(EventKind::Group, group.clauses()),
            Expr::Not(not) => self.open(EventKind::Not, not.operand()),
            Expr::Or(or) => self.open(EventKind::Or, or.left().into_iter().chain(or.right())),
            Expr::Field(field) => {
                let name = field.name().map(|n| n.text()).unwrap_or_default();
                self.stack.push(Step::Emit(Event::End(EventKind::Field)));
                if let Some(value) = field.value() {
                    self.stack.push(Step::Visit(value));
                }
                self.stack
                    .push(Step::Emit(Event::End(EventKind::FieldName)));
                self.stack.push(Step::Emit(Event::Term(name)));
                self.stack
                    .push(Step::Emit(Event::Start(EventKind::FieldName)));
                Event::Start(EventKind::Field)
            }
        }
    }

    fn open(&mut self, kind: EventKind, children: impl IntoIterator<Item = Expr>) -> Event {
        self.stack.push(Step::Emit(Event::End(kind)));
        let children: Vec<Expr> = children.into_iter().collect();
        self.stack
            .extend(children.into_iter().rev().map(Step::Visit));
        Event::Start(kind)
    }
}

impl Iterator for Events {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        match self.stack.pop()? {
            Step::Emit(event) => Some(event),
            Step::Visit(expr) => Some(self.expand(expr)),
        }
    }
}

/// Flattens a parse tree into its event stream.
pub fn flatten(root: &Root) -> Events {
    Events::new(root)
}
