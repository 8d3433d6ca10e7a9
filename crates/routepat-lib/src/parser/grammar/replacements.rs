use super::{SectionInfo, SectionShape};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    /// `[` name? `]`?, only lexed when the dialect supports token replacement.
    pub(super) fn parse_replacement(&mut self) -> SectionInfo {
        self.assert_current(SyntaxKind::OpenBracket);
        let start = self.current_span().start();
        self.start_node(SyntaxKind::Replacement);
        self.bump();

        let has_name = self.eat_token(SyntaxKind::ReplacementText);
        let closed = self.eat_token(SyntaxKind::CloseBracket);
        self.finish_node();

        let range = self.range_from(start);
        if !closed {
            self.report(DiagnosticKind::UnclosedReplacement, range);
        } else if !has_name {
            self.report(DiagnosticKind::EmptyReplacement, range);
        }

        SectionInfo {
            shape: SectionShape::Replacement,
            range,
        }
    }
}
