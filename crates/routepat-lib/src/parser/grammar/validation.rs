use rowan::TextRange;

use super::{SectionInfo, SectionShape};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::{has_lone, unescape};

/// Characters a decoded parameter name must not contain.
const INVALID_NAME_CHARS: [char; 5] = ['{', '}', '/', '?', '*'];

impl Parser<'_> {
    /// `~` may only start a template as the `~/` prefix.
    pub(super) fn check_leading_tilde(&mut self) {
        if !self.currently_is(SyntaxKind::LiteralText) {
            return;
        }
        let text = self.current_text();
        if !text.starts_with('~') {
            return;
        }
        if text == "~" && self.nth(1) == SyntaxKind::Slash {
            return;
        }
        let span = self.current_span();
        self.report(DiagnosticKind::TildeNotFollowedBySlash, span);
    }

    pub(super) fn validate_literal(&mut self, text: &str, span: TextRange) {
        let brackets = self.options.supports_token_replacement;

        if text.contains('?') {
            self.diagnostics
                .report(DiagnosticKind::LiteralQuestionMark, span)
                .arg(text)
                .emit();
        }

        if has_lone(text, '}', brackets) {
            self.report(DiagnosticKind::IncompleteParameter, span);
        }

        if brackets && has_lone(text, ']', brackets) {
            self.report(DiagnosticKind::ImbalancedReplacementDelimiters, span);
        }
    }

    /// A lone `{` wins over the name check, so each name gets at most one diagnostic.
    pub(super) fn validate_parameter_name(&mut self, text: &str, span: TextRange) {
        if has_lone(text, '{', false) {
            self.report(DiagnosticKind::UnescapedBrace, span);
            return;
        }

        let name = unescape(text, false);
        if name.is_empty() || name.contains(INVALID_NAME_CHARS) {
            self.diagnostics
                .report(DiagnosticKind::InvalidParameterName, span)
                .arg(name)
                .emit();
        }
    }

    /// Policy fragments and defaults keep their text raw but still need `{` escaped.
    pub(super) fn validate_escaped_braces(&mut self, text: &str, span: TextRange) {
        if has_lone(text, '{', false) {
            self.report(DiagnosticKind::UnescapedBrace, span);
        }
    }

    pub(super) fn validate_segment(&mut self, sections: &[SectionInfo], range: TextRange) {
        if sections.len() > 1 {
            for section in sections.iter().filter(|s| s.is_catch_all()) {
                self.report(DiagnosticKind::CatchAllInComplexSegment, section.range);
            }

            if !self.options.supports_complex_segments && !self.is_optional_extension(sections) {
                let segment = self.text_at(range);
                self.diagnostics
                    .report(DiagnosticKind::ComplexSegmentNotSupported, range)
                    .arg(segment)
                    .arg(self.options.dialect.to_string())
                    .emit();
            }
        }

        for (index, pair) in sections.windows(2).enumerate() {
            let [first, second] = pair else { continue };
            if !first.is_parameter() || !second.is_parameter() {
                continue;
            }
            // An optional final section is reported by optional placement instead.
            let is_last = index + 2 == sections.len();
            if second.is_optional() && is_last {
                continue;
            }
            self.report(DiagnosticKind::ConsecutiveParameters, second.range);
        }
    }

    /// `{name}.{ext?}`: the one multi-section shape allowed without complex segments.
    fn is_optional_extension(&self, sections: &[SectionInfo]) -> bool {
        let [first, period, last] = sections else {
            return false;
        };
        first.is_parameter()
            && !first.is_catch_all()
            && period.shape == SectionShape::Literal
            && self.text_at(period.range) == "."
            && last.is_optional()
    }
}
