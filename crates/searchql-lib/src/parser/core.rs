//! Token cursor, tree building, fuel accounting and error reporting.
//!
//! Grammar productions live in `grammar.rs`; everything here is shared
//! machinery they call into.

use rowan::{Checkpoint, GreenNodeBuilder, TextRange, TextSize};

use super::ast::Root;
use super::cst::{SyntaxKind, SyntaxNode, TokenSet};
use super::lexer::{Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticBuilder, DiagnosticKind, Diagnostics};

#[derive(Debug)]
pub struct ParseResult {
    pub root: Root,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

/// An opened `(` or quote that has not been closed yet.
#[derive(Debug, Clone, Copy)]
struct Opener {
    kind: SyntaxKind,
    start: TextSize,
}

/// Parser limits. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default)]
struct Fuel {
    exec_limit: Option<u32>,
    exec_used: u32,
    depth_limit: Option<u32>,
}

impl Fuel {
    /// Spends one token operation. `false` once the budget is gone.
    fn spend(&mut self) -> bool {
        match self.exec_limit {
            Some(limit) if self.exec_used >= limit => false,
            Some(_) => {
                self.exec_used += 1;
                true
            }
            None => true,
        }
    }

    fn allows_depth(&self, depth: u32) -> bool {
        self.depth_limit.is_none_or(|limit| depth < limit)
    }
}

/// Resilient recursive-descent parser over a pre-lexed token stream.
///
/// Whitespace is buffered as it is skipped and attached to the next node or
/// token, so the tree reproduces the input byte for byte.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    pending_trivia: Vec<Token>,
    builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    depth: u32,
    last_report: Option<TextSize>,
    openers: Vec<Opener>,
    fuel: Fuel,
    fatal: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            pending_trivia: Vec::new(),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_report: None,
            openers: Vec::new(),
            fuel: Fuel::default(),
            fatal: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.fuel.exec_limit = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.fuel.depth_limit = limit;
        self
    }

    /// Builds the tree. Syntax errors become diagnostics; only running out
    /// of fuel is an `Err`.
    pub fn parse(mut self) -> Result<ParseResult, Error> {
        self.parse_root();
        self.flush_trivia();

        if let Some(err) = self.fatal {
            return Err(err);
        }

        let exec_fuel_consumed = if self.fuel.exec_limit.is_some() {
            self.fuel.exec_used
        } else {
            0
        };
        let green = self.builder.finish();
        let root = Root::cast(SyntaxNode::new_root(green)).expect("parser always produces Root");

        Ok(ParseResult {
            root,
            diagnostics: self.diagnostics,
            exec_fuel_consumed,
        })
    }

    // Cursor

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    /// Text of the current token, or `""` at EOF.
    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia();
        let source = self.source;
        self.tokens.get(self.pos).map_or("", |t| token_text(source, t))
    }

    pub(super) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_any(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Like [`at_any`](Self::at_any) but without skipping whitespace first.
    pub(super) fn raw_at_any(&self, set: TokenSet) -> bool {
        self.tokens
            .get(self.pos)
            .is_some_and(|t| set.contains(t.kind))
    }

    /// Kind of the second non-trivia token from the cursor.
    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.skip_trivia();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(1)
            .is_some_and(|t| t.kind == kind)
    }

    pub(super) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.at_eof() || self.fatal.is_some()
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal.is_some()
    }

    /// End of the last non-trivia token consumed.
    pub(super) fn last_token_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    fn eof_offset(&self) -> TextSize {
        TextSize::of(self.source)
    }

    fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos)
            && token.kind.is_trivia()
        {
            self.pending_trivia.push(*token);
            self.pos += 1;
        }
    }

    // Tree building

    fn flush_trivia(&mut self) {
        for token in self.pending_trivia.drain(..) {
            self.builder
                .token(token.kind.into(), token_text(self.source, &token));
        }
    }

    /// Attaches any whitespace before the cursor to the open node.
    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia();
        self.flush_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    /// Moves the current token into the tree. Every call costs one unit of
    /// exec fuel.
    pub(super) fn bump(&mut self) {
        assert!(!self.at_eof(), "bump called at EOF");
        if !self.fuel.spend() {
            self.fatal.get_or_insert(Error::ExecFuelExhausted);
        }

        self.flush_trivia();
        let token = self.tokens[self.pos];
        self.builder
            .token(token.kind.into(), token_text(self.source, &token));
        self.pos += 1;
    }

    // Nesting

    pub(super) fn enter_recursion(&mut self) -> bool {
        if !self.fuel.allows_depth(self.depth) {
            self.fatal.get_or_insert(Error::RecursionLimitExceeded);
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(super) fn open_delimiter(&mut self, kind: SyntaxKind) {
        let start = self.current_span().start();
        self.openers.push(Opener { kind, start });
    }

    pub(super) fn close_delimiter(&mut self) {
        self.openers.pop();
    }

    /// Whether a `(` is still open, so `)` ends the current clause list.
    pub(super) fn inside_group(&self) -> bool {
        self.openers.iter().any(|o| o.kind == SyntaxKind::ParenOpen)
    }

    // Diagnostics

    /// Starts a diagnostic unless one was already reported at the same offset.
    pub(super) fn report(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
    ) -> Option<DiagnosticBuilder<'_>> {
        if !self.first_report_at(range.start()) {
            return None;
        }
        Some(self.diagnostics.report(kind, range))
    }

    fn first_report_at(&mut self, pos: TextSize) -> bool {
        if self.last_report == Some(pos) {
            return false;
        }
        self.last_report = Some(pos);
        true
    }

    /// Reports at the current token. Inside an unclosed delimiter the
    /// diagnostic may hide weaker ones from the opener to EOF.
    pub(super) fn error(&mut self, kind: DiagnosticKind, message: Option<String>) {
        let range = self.current_span();
        let suppression = match self.openers.last() {
            Some(opener) => TextRange::new(opener.start, self.eof_offset()),
            None => range,
        };
        if let Some(builder) = self.report(kind, range) {
            with_message(builder, message)
                .suppression_range(suppression)
                .emit();
        }
    }

    /// Reports at an explicit range.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange, message: Option<&str>) {
        if let Some(builder) = self.report(kind, range) {
            with_message(builder, message).emit();
        }
    }

    /// Reports at the current token and wraps it in an `Error` node.
    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind, message: Option<String>) {
        self.error(kind, message);
        if !self.at_eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Reports a missing closer, spanning from the opener to the cursor.
    /// Deduplicated on the cursor position, not the opener.
    pub(super) fn error_unclosed(
        &mut self,
        kind: DiagnosticKind,
        opened: TextRange,
        what: &str,
        closer: &str,
    ) {
        let current = self.current_span();
        if !self.first_report_at(current.start()) {
            return;
        }
        self.diagnostics
            .report(kind, TextRange::new(opened.start(), current.end()))
            .related_to(format!("{what} opened here"), opened)
            .hint(format!("add a closing `{closer}`"))
            .emit();
    }
}

fn with_message<'a>(
    builder: DiagnosticBuilder<'a>,
    message: Option<impl Into<String>>,
) -> DiagnosticBuilder<'a> {
    match message {
        Some(message) => builder.message(message),
        None => builder,
    }
}
