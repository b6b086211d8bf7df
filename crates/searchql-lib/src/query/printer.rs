use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::{Expr, SyntaxNode};

use super::Query;

/// Debug dumps of a parsed query: typed AST (default), raw CST, or events.
pub struct QueryPrinter<'q, 'src> {
    query: &'q Query<'src>,
    raw: bool,
    trivia: bool,
    spans: bool,
    events: bool,
}

impl<'q, 'src> QueryPrinter<'q, 'src> {
    pub fn new(query: &'q Query<'src>) -> Self {
        Self {
            query,
            raw: false,
            trivia: false,
            spans: false,
            events: false,
        }
    }

    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn only_events(mut self, value: bool) -> Self {
        self.events = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.events {
            self.format_events(w)
        } else if self.raw {
            self.format_cst(self.query.as_cst(), 0, w)
        } else {
            self.format_root(w)
        }
    }

    fn format_events(&self, w: &mut impl Write) -> std::fmt::Result {
        for event in self.query.events() {
            writeln!(w, "{}", event)?;
        }
        Ok(())
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_root(&self, w: &mut impl Write) -> std::fmt::Result {
        let root = self.query.root();
        let span = self.span_str(root.as_cst().text_range());
        writeln!(w, "Root{}", span)?;

        for clause in root.clauses() {
            self.format_expr(&clause, 1, w)?;
        }
        Ok(())
    }

    fn format_expr(&self, expr: &Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(expr.as_cst().text_range());

        match expr {
            Expr::Term(t) => {
                writeln!(w, "{}Term{} {}", prefix, span, t.text())?;
            }
            Expr::Phrase(p) => {
                writeln!(w, "{}Phrase{}", prefix, span)?;
                for term in p.terms() {
                    self.format_expr(&Expr::Term(term), indent + 1, w)?;
                }
            }
            Expr::Group(g) => {
                writeln!(w, "{}Group{}", prefix, span)?;
                for clause in g.clauses() {
                    self.format_expr(&clause, indent + 1, w)?;
                }
            }
            Expr::Not(n) => {
                writeln!(w, "{}Not{}", prefix, span)?;
                if let Some(operand) = n.operand() {
                    self.format_expr(&operand, indent + 1, w)?;
                }
            }
            Expr::Field(f) => {
                let name = f.name().map(|n| n.text()).unwrap_or_default();
                writeln!(w, "{}Field{} {}:", prefix, span, name)?;
                if let Some(value) = f.value() {
                    self.format_expr(&value, indent + 1, w)?;
                }
            }
            Expr::Or(o) => {
                writeln!(w, "{}Or{}", prefix, span)?;
                if let Some(left) = o.left() {
                    self.format_expr(&left, indent + 1, w)?;
                }
                for clause in o.right() {
                    self.format_expr(&clause, indent + 1, w)?;
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}
