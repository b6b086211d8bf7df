//! Grammar productions for the common query language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Precedence, loosest first: clause lists (implicit AND), `or`, `field:`, `-`,
//! then groups, phrases and bare terms.

use rowan::TextRange;

use super::core::Parser;

use super::cst::SyntaxKind;
use super::cst::token_sets::{CLAUSE_FIRST, PHRASE_WORD, QUOTES, UNIT_FIRST};
use crate::diagnostics::DiagnosticKind;

/// Uppercase words that other engines treat as operators, with the fix we suggest.
const UPPERCASE_OPERATORS: &[(&str, &str, &str)] = &[
    ("OR", "use the lowercase `or` keyword", "or"),
    ("AND", "clauses are joined by AND already; remove it", ""),
    ("NOT", "negate with `-`", "-"),
];

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);

        let clauses = self.parse_clauses();
        if clauses == 0 && !self.diagnostics.has_errors() && !self.has_fatal_error() {
            self.error(DiagnosticKind::ExpectedExpression, None);
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Clause list: everything up to EOF, or up to `)` when a group is open.
    /// Returns the number of clauses parsed.
    fn parse_clauses(&mut self) -> usize {
        let mut count = 0;
        loop {
            let kind = self.current();
            if self.should_stop() {
                break;
            }
            match kind {
                k if CLAUSE_FIRST.contains(k) => {
                    self.parse_or_expr();
                    count += 1;
                }
                SyntaxKind::ParenClose if self.inside_group() => break,
                SyntaxKind::ParenClose => self.error_and_bump(DiagnosticKind::UnmatchedParen, None),
                SyntaxKind::KwOr => self.error_and_bump(DiagnosticKind::DanglingOr, None),
                SyntaxKind::Colon => self.error_and_bump(DiagnosticKind::ExpectedFieldName, None),
                _ => {
                    let text = self.current_text();
                    self.error_and_bump(DiagnosticKind::UnexpectedToken, Some(format!("`{text}`")));
                }
            }
        }
        count
    }

    /// `clause ("or" clauses)?`
    ///
    /// The right side of `or` is the whole remaining clause list, so
    /// `a or b c` is `a or (b c)`.
    fn parse_or_expr(&mut self) {
        if !self.enter_recursion() {
            self.bail_out();
            return;
        }

        let checkpoint = self.checkpoint();
        self.parse_field_expr();

        if self.at(SyntaxKind::KwOr) {
            self.start_node_at(checkpoint, SyntaxKind::Or);
            self.bump();
            if self.parse_clauses() == 0 {
                self.error(DiagnosticKind::ExpectedExpression, Some("after `or`".into()));
            }
            self.finish_node();
        }

        self.exit_recursion();
    }

    /// `name ":" not` or a plain `not`. LL(2) on `Word ":"`.
    fn parse_field_expr(&mut self) {
        if self.at(SyntaxKind::Word) && self.next_is(SyntaxKind::Colon) {
            self.parse_field();
        } else {
            self.parse_not_expr();
        }
    }

    fn parse_field(&mut self) {
        self.start_node(SyntaxKind::Field);

        self.start_node(SyntaxKind::FieldName);
        let span = self.current_span();
        let name = self.current_text();
        self.bump();
        self.finish_node();
        self.validate_field_name(name, span);

        let colon = self.current();
        debug_assert_eq!(colon, SyntaxKind::Colon, "field name must be followed by `:`");
        self.bump();

        if self.at_any(CLAUSE_FIRST) {
            self.parse_not_expr();
        } else {
            self.error(
                DiagnosticKind::ExpectedFieldValue,
                Some(format!("after `{name}:`")),
            );
        }

        self.finish_node();
    }

    /// `"-" unit | unit`. Negation applies to the next unit only.
    fn parse_not_expr(&mut self) {
        if !self.at(SyntaxKind::Minus) {
            self.parse_unit();
            return;
        }

        self.start_node(SyntaxKind::Not);
        self.bump();

        if self.at(SyntaxKind::Minus) {
            self.error_and_bump(DiagnosticKind::DoubleNegation, None);
        }

        if self.at_any(UNIT_FIRST) {
            self.parse_unit();
        } else {
            self.error(DiagnosticKind::ExpectedExpression, Some("after `-`".into()));
        }

        self.finish_node();
    }

    fn parse_unit(&mut self) {
        if !self.enter_recursion() {
            self.bail_out();
            return;
        }

        match self.current() {
            SyntaxKind::ParenOpen => self.parse_group(),
            k if QUOTES.contains(k) => self.parse_phrase(),
            SyntaxKind::Word => self.parse_term(),
            _ => self.error(DiagnosticKind::ExpectedExpression, Some("here".into())),
        }

        self.exit_recursion();
    }

    fn parse_term(&mut self) {
        let span = self.current_span();
        let text = self.current_text();

        self.start_node(SyntaxKind::Term);
        self.bump();
        self.finish_node();

        self.validate_term(text, span);
        self.check_uppercase_operator(text, span);
    }

    /// `"(" clauses ")"`
    fn parse_group(&mut self) {
        let open = self.current_span();
        self.start_node(SyntaxKind::Group);
        self.open_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        if self.at(SyntaxKind::ParenClose) {
            let close = self.current_span();
            self.error_at(
                DiagnosticKind::EmptyGroup,
                TextRange::new(open.start(), close.end()),
                None,
            );
            self.close_delimiter();
            self.bump();
            self.finish_node();
            return;
        }

        self.parse_clauses();
        self.close_delimiter();

        if self.at(SyntaxKind::ParenClose) {
            self.bump();
        } else {
            self.error_unclosed(DiagnosticKind::UnclosedGroup, open, "group", ")");
        }

        self.finish_node();
    }

    /// `'"' terms '"'` or `"'" terms "'"`. Only terms are allowed inside.
    fn parse_phrase(&mut self) {
        let quote = self.current();
        let open = self.current_span();
        self.start_node(SyntaxKind::Phrase);
        self.open_delimiter(quote);
        self.bump();

        let mut terms = 0;
        loop {
            let kind = self.current();
            if self.should_stop() || kind == quote {
                break;
            }
            if PHRASE_WORD.contains(kind) {
                self.parse_phrase_term();
                terms += 1;
            } else {
                let text = self.current_text();
                self.error_and_bump(DiagnosticKind::InvalidPhraseContent, Some(format!("`{text}`")));
            }
        }

        self.close_delimiter();

        if self.at(quote) {
            let close = self.current_span();
            if terms == 0 {
                self.error_at(
                    DiagnosticKind::EmptyPhrase,
                    TextRange::new(open.start(), close.end()),
                    None,
                );
            }
            self.bump();
        } else {
            let closer = if quote == SyntaxKind::DoubleQuote {
                "\""
            } else {
                "'"
            };
            self.error_unclosed(DiagnosticKind::UnclosedPhrase, open, "phrase", closer);
        }

        self.finish_node();
    }

    /// A phrase term glues raw-adjacent words, `-` and `or`: `"a-b or-c"`.
    fn parse_phrase_term(&mut self) {
        let start = self.current_span().start();
        self.start_node(SyntaxKind::Term);
        self.bump();
        while self.raw_at_any(PHRASE_WORD) {
            self.bump();
        }
        self.finish_node();

        let end = self.last_token_end().unwrap_or(start);
        let span = TextRange::new(start, end);
        let source = self.source;
        let text = &source[usize::from(start)..usize::from(end)];
        self.validate_term(text, span);
    }

    /// Swallows the rest of the input once a fuel limit has tripped.
    fn bail_out(&mut self) {
        self.start_node(SyntaxKind::Error);
        while !self.at_eof() {
            self.bump();
        }
        self.finish_node();
    }

    fn validate_field_name(&mut self, name: &str, span: TextRange) {
        if name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return;
        }
        self.error_at(DiagnosticKind::InvalidFieldName, span, Some(name));
    }

    fn validate_term(&mut self, text: &str, span: TextRange) {
        if text.contains('_') {
            self.error_at(DiagnosticKind::UnderscoreInTerm, span, Some(text));
        }
    }

    fn check_uppercase_operator(&mut self, text: &str, span: TextRange) {
        let Some((_, description, replacement)) =
            UPPERCASE_OPERATORS.iter().find(|(op, _, _)| *op == text)
        else {
            return;
        };
        if let Some(builder) = self.report(DiagnosticKind::UppercaseOperator, span) {
            builder.message(text).fix(*description, *replacement).emit();
        }
    }
}
