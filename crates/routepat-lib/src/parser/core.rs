//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::options::RouteOptions;

/// Lookaheads allowed between two consumed tokens before the parser counts as stuck.
pub(super) const LOOKAHEAD_BUDGET: u32 = 256;

/// Recursive-descent parser over a pre-lexed token stream.
///
/// Route templates have no trivia, so every token lands in the tree exactly where it was
/// consumed.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) options: RouteOptions,
    pub(super) lookahead_budget: Cell<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>, options: RouteOptions) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            options,
            lookahead_budget: Cell::new(LOOKAHEAD_BUDGET),
        }
    }

    pub(super) fn finish(self) -> (GreenNode, Diagnostics) {
        (self.builder.finish(), self.diagnostics)
    }

    /// Current token kind, `EndOfInput` past the last token.
    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::EndOfInput, |t| t.kind)
    }

    fn refill_lookahead_budget(&self) {
        self.lookahead_budget.set(LOOKAHEAD_BUDGET);
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    /// Text of the current token, empty at end of input.
    pub(super) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.refill_lookahead_budget();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Bumps the current token wrapped in a node of `kind`.
    pub(super) fn bump_wrapped(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    fn bump_as_error(&mut self) {
        if !self.eof() {
            self.bump_wrapped(SyntaxKind::Error);
        }
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        let text = self.current_text();
        self.diagnostics.report(kind, range).arg(text).emit();
        self.bump_as_error();
    }

    pub(super) fn last_token_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos].last().map(|t| t.span.end())
    }

    /// Range from `start` to the end of the last consumed token.
    pub(super) fn range_from(&self, start: TextSize) -> TextRange {
        let end = self.last_token_end().unwrap_or(start).max(start);
        TextRange::new(start, end)
    }

    pub(super) fn text_at(&self, range: TextRange) -> &'src str {
        &self.source[std::ops::Range::<usize>::from(range)]
    }

    pub(super) fn report(&mut self, kind: DiagnosticKind, range: TextRange) {
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn report_dialect(&mut self, kind: DiagnosticKind, range: TextRange) {
        self.diagnostics
            .report(kind, range)
            .arg(self.options.dialect.to_string())
            .emit();
    }
}
