use rowan::TextRange;

use super::{SectionInfo, SectionShape};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::POLICY_FRAGMENT_FIRST;

impl Parser<'_> {
    /// `{` `*`? name (`:` policy)* (`=` default)? `?`? `}`
    pub(super) fn parse_parameter(&mut self) -> SectionInfo {
        self.assert_current(SyntaxKind::OpenBrace);
        let start = self.current_span().start();
        self.start_node(SyntaxKind::Parameter);
        self.bump();

        let asterisk = self.parse_catch_all_marker();
        self.parse_parameter_name();

        while self.currently_is(SyntaxKind::Colon) {
            self.parse_policy();
        }

        let default_range = self
            .currently_is(SyntaxKind::Equals)
            .then(|| self.parse_default_value());

        let optional = self.currently_is(SyntaxKind::QuestionMark);
        if optional {
            self.bump_wrapped(SyntaxKind::OptionalMarker);
        }

        let closed = self.eat_token(SyntaxKind::CloseBrace);
        self.finish_node();

        let range = self.range_from(start);

        if let Some((asterisk_range, double)) = asterisk {
            if !self.options.supports_catch_all {
                self.report_dialect(DiagnosticKind::CatchAllNotSupported, asterisk_range);
            } else if double && !self.options.supports_two_asterisk_catch_all {
                self.report_dialect(
                    DiagnosticKind::TwoAsteriskCatchAllNotSupported,
                    asterisk_range,
                );
            }
        }

        if let Some(default_range) = default_range
            && !self.options.supports_default_values
        {
            self.report_dialect(DiagnosticKind::DefaultValueNotSupported, default_range);
        }

        if !closed {
            self.report(
                DiagnosticKind::IncompleteParameter,
                TextRange::empty(self.eof_offset()),
            );
        }

        if asterisk.is_some() && optional {
            self.report(DiagnosticKind::CatchAllCannotBeOptional, range);
        }

        if default_range.is_some() && optional {
            self.report(DiagnosticKind::OptionalCannotHaveDefault, range);
        }

        SectionInfo {
            shape: SectionShape::Parameter {
                catch_all: asterisk.is_some(),
                optional,
            },
            range,
        }
    }

    /// Returns the marker's range and whether it is the `**` form.
    fn parse_catch_all_marker(&mut self) -> Option<(TextRange, bool)> {
        if !self.currently_is(SyntaxKind::Asterisk) {
            return None;
        }
        let span = self.current_span();
        let double = self.current_text() == "**";
        self.bump_wrapped(SyntaxKind::CatchAllMarker);
        Some((span, double))
    }

    /// The `ParameterName` node is always present; its token is missing for `{}`.
    fn parse_parameter_name(&mut self) {
        self.start_node(SyntaxKind::ParameterName);
        let name = self.currently_is(SyntaxKind::ParameterNameText).then(|| {
            let span = self.current_span();
            let text = self.current_text();
            self.bump();
            (text, span)
        });
        self.finish_node();

        match name {
            Some((text, span)) => self.validate_parameter_name(text, span),
            // At end of input the missing `}` is the only thing worth reporting.
            None if self.eof() => {}
            None => {
                let span = self.current_span();
                self.diagnostics
                    .report(DiagnosticKind::InvalidParameterName, span)
                    .arg("")
                    .emit();
            }
        }
    }

    /// `:` (fragment | `(` fragment? `)`)*
    fn parse_policy(&mut self) {
        self.assert_current(SyntaxKind::Colon);
        self.start_node(SyntaxKind::ParameterPolicy);
        self.bump();

        while self.currently_is_one_of(POLICY_FRAGMENT_FIRST) {
            if self.currently_is(SyntaxKind::OpenParen) {
                self.parse_escaped_fragment();
                continue;
            }
            let span = self.current_span();
            let text = self.current_text();
            self.bump_wrapped(SyntaxKind::PolicyFragment);
            self.validate_escaped_braces(text, span);
        }

        self.finish_node();
    }

    fn parse_escaped_fragment(&mut self) {
        self.assert_current(SyntaxKind::OpenParen);
        self.start_node(SyntaxKind::PolicyFragmentEscaped);
        self.bump();

        if self.currently_is(SyntaxKind::PolicyFragmentText) {
            let span = self.current_span();
            let text = self.current_text();
            self.bump();
            self.validate_escaped_braces(text, span);
        }

        // The lexer only opens an argument when it found the `)`.
        self.assert_current(SyntaxKind::CloseParen);
        self.bump();
        self.finish_node();
    }

    /// `=` value?, returning the node range for the capability gate.
    fn parse_default_value(&mut self) -> TextRange {
        self.assert_current(SyntaxKind::Equals);
        let start = self.current_span().start();
        self.start_node(SyntaxKind::DefaultValue);
        self.bump();

        if self.currently_is(SyntaxKind::DefaultValueText) {
            let span = self.current_span();
            let text = self.current_text();
            self.bump();
            self.validate_escaped_braces(text, span);
        }

        self.finish_node();
        self.range_from(start)
    }
}
