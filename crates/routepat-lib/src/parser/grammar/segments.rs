use rowan::TextRange;

use super::SectionInfo;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::SECTION_FIRST;

impl Parser<'_> {
    /// `CompilationUnit := (Segment | Separator)*`
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::CompilationUnit);
        self.check_leading_tilde();

        // A catch-all stays pending until a later segment proves it is not last.
        let mut pending_catch_all: Option<TextRange> = None;
        let mut after_separator = false;

        loop {
            match self.current() {
                SyntaxKind::EndOfInput => break,
                SyntaxKind::Slash => {
                    self.parse_separator(after_separator);
                    after_separator = true;
                }
                _ if self.currently_is_one_of(SECTION_FIRST) => {
                    let sections = self.parse_segment();
                    if let Some(range) = pending_catch_all.take() {
                        self.report(DiagnosticKind::CatchAllNotLast, range);
                    }
                    pending_catch_all = sections
                        .iter()
                        .find(|s| s.is_catch_all())
                        .map(|s| s.range);
                    after_separator = false;
                }
                _ => {
                    self.error_and_bump(DiagnosticKind::UnexpectedToken);
                    after_separator = false;
                }
            }
        }

        self.finish_node();
    }

    fn parse_separator(&mut self, consecutive: bool) {
        self.assert_current(SyntaxKind::Slash);
        let span = self.current_span();
        self.bump_wrapped(SyntaxKind::Separator);
        if consecutive {
            self.report(DiagnosticKind::ConsecutiveSeparators, span);
        }
    }

    /// `Segment := (Literal | Parameter | Replacement)+`
    fn parse_segment(&mut self) -> Vec<SectionInfo> {
        let start = self.current_span().start();
        self.start_node(SyntaxKind::Segment);

        let mut sections = Vec::new();
        loop {
            let section = match self.current() {
                SyntaxKind::LiteralText => self.parse_literal(),
                SyntaxKind::OpenBrace => self.parse_parameter(),
                SyntaxKind::OpenBracket => self.parse_replacement(),
                _ => break,
            };
            sections.push(section);
        }

        self.finish_node();

        let range = self.range_from(start);
        self.validate_segment(&sections, range);
        sections
    }

    fn parse_literal(&mut self) -> SectionInfo {
        self.assert_current(SyntaxKind::LiteralText);
        let span = self.current_span();
        let text = self.current_text();
        self.bump_wrapped(SyntaxKind::Literal);
        self.validate_literal(text, span);
        SectionInfo {
            shape: super::SectionShape::Literal,
            range: span,
        }
    }
}
