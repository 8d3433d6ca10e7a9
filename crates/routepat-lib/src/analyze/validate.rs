//! Cross-parameter and cross-segment checks.
//!
//! - Uniqueness: parameter names are compared case-insensitively
//! - Optional placement: an optional parameter ends its segment, after nothing or a `.`
//! - Catch-all placement: nothing follows a catch-all
//! - Required after optional: gated by `allow_required_after_optional`

use indexmap::IndexMap;

use super::RouteParameter;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::options::RouteOptions;
use crate::parser::{CompilationUnit, Section, Segment};

pub fn validate(
    root: &CompilationUnit,
    parameters: &[RouteParameter],
    options: &RouteOptions,
    diagnostics: &mut Diagnostics,
) {
    validate_unique_names(parameters, diagnostics);

    let segments: Vec<Segment> = root.segments().collect();
    for segment in &segments {
        validate_optional_placement(segment, diagnostics);
    }

    validate_catch_all_placement(parameters, diagnostics);

    if !options.allow_required_after_optional {
        validate_required_after_optional(&segments, diagnostics);
    }
}

fn validate_unique_names(parameters: &[RouteParameter], diagnostics: &mut Diagnostics) {
    let mut seen: IndexMap<String, &RouteParameter> = IndexMap::new();
    for parameter in parameters {
        let key = parameter.name.to_lowercase();
        if let Some(first) = seen.get(&key) {
            diagnostics
                .report(DiagnosticKind::DuplicateParameter, parameter.span)
                .arg(&parameter.name)
                .related_to(format!("'{}' first declared here", first.name), first.span)
                .emit();
            continue;
        }
        seen.insert(key, parameter);
    }
}

fn validate_optional_placement(segment: &Segment, diagnostics: &mut Diagnostics) {
    let sections: Vec<Section> = segment.sections().collect();
    if sections.len() < 2 {
        return;
    }

    for (index, section) in sections.iter().enumerate() {
        let Some(parameter) = section.as_parameter() else {
            continue;
        };
        if !parameter.is_optional() {
            continue;
        }

        let name = parameter.name().map(|n| n.value()).unwrap_or_default();
        let range = parameter.as_cst().text_range();

        if let Some(following) = sections.get(index + 1) {
            diagnostics
                .report(DiagnosticKind::OptionalNotAtEndOfSegment, range)
                .arg(segment.text())
                .arg(name)
                .arg(following.as_cst().text().to_string())
                .emit();
            continue;
        }

        let Some(preceding) = index.checked_sub(1).and_then(|i| sections.get(i)) else {
            continue;
        };
        let is_period = matches!(preceding, Section::Literal(l) if l.text() == ".");
        if !is_period {
            diagnostics
                .report(DiagnosticKind::OptionalPrecededByInvalidSegment, range)
                .arg(segment.text())
                .arg(name)
                .arg(preceding.as_cst().text().to_string())
                .emit();
        }
    }
}

fn validate_catch_all_placement(parameters: &[RouteParameter], diagnostics: &mut Diagnostics) {
    for (index, parameter) in parameters.iter().enumerate() {
        if !parameter.is_catch_all || index + 1 == parameters.len() {
            continue;
        }
        if diagnostics.contains(DiagnosticKind::CatchAllNotLast, parameter.span) {
            continue;
        }
        diagnostics
            .report(DiagnosticKind::CatchAllNotLast, parameter.span)
            .emit();
    }
}

/// Once a segment holds an optional parameter, later segments may only be a lone optional
/// or catch-all parameter. Only the first offending segment is reported.
fn validate_required_after_optional(segments: &[Segment], diagnostics: &mut Diagnostics) {
    let mut seen_optional = false;
    for segment in segments {
        let sections: Vec<Section> = segment.sections().collect();

        if seen_optional {
            let relaxed = match sections.as_slice() {
                [Section::Parameter(p)] => p.is_optional() || p.is_catch_all(),
                _ => false,
            };
            if !relaxed {
                diagnostics
                    .report(
                        DiagnosticKind::RequiredAfterOptional,
                        segment.as_cst().text_range(),
                    )
                    .arg(segment.text())
                    .emit();
                return;
            }
        }

        seen_optional |= sections
            .iter()
            .filter_map(Section::as_parameter)
            .any(|p| p.is_optional());
    }
}
