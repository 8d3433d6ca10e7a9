//! Mapping diagnostics to edit proposals.
//!
//! Route edits are in decoded-text coordinates; `AddHandlerParameter` points into the host
//! document. Applying an edit is the host's job.

use rowan::{TextRange, TextSize};

use crate::binding::{BindingResolution, type_for_policy};
use crate::diagnostics::{DiagnosticKind, DiagnosticMessage};
use crate::parser::Parameter;
use crate::tree::RouteTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixEdit {
    /// Declare a new handler parameter after `insert_after` (host coordinates), or first
    /// when no candidate declaration is known.
    AddHandlerParameter {
        name: String,
        type_name: String,
        insert_after: Option<TextRange>,
    },
    Insert {
        at: TextSize,
        text: String,
    },
    Replace {
        range: TextRange,
        text: String,
    },
    Delete {
        range: TextRange,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixProposal {
    pub title: String,
    pub edit: FixEdit,
}

impl FixProposal {
    fn new(title: impl Into<String>, edit: FixEdit) -> Self {
        Self {
            title: title.into(),
            edit,
        }
    }
}

/// Edit proposals for `diagnostic`; empty when the kind has no automatic fix.
pub fn fixes_for(
    diagnostic: &DiagnosticMessage,
    tree: &RouteTree,
    resolution: Option<&BindingResolution<'_>>,
) -> Vec<FixProposal> {
    let range = diagnostic.range();
    match diagnostic.kind() {
        DiagnosticKind::RouteParameterUnused => add_handler_parameter(tree, range, resolution)
            .into_iter()
            .collect(),
        DiagnosticKind::ParameterConstraintMissing => {
            let Some(policy) = diagnostic.args().get(2) else {
                return Vec::new();
            };
            vec![FixProposal::new(
                format!("Add ':{policy}' constraint"),
                FixEdit::Insert {
                    at: range.end(),
                    text: format!(":{policy}"),
                },
            )]
        }
        DiagnosticKind::CatchAllCannotBeOptional => remove_optional(tree, range).into_iter().collect(),
        DiagnosticKind::OptionalCannotHaveDefault => {
            let mut fixes: Vec<FixProposal> = remove_optional(tree, range).into_iter().collect();
            if let Some(default) = parameter_at(tree, range).and_then(|p| p.default_value()) {
                fixes.push(FixProposal::new(
                    "Remove default value",
                    FixEdit::Delete {
                        range: default.as_cst().text_range(),
                    },
                ));
            }
            fixes
        }
        DiagnosticKind::UnescapedBrace => {
            let Some(text) = tree.text().get(std::ops::Range::<usize>::from(range)) else {
                return Vec::new();
            };
            vec![FixProposal::new(
                "Escape '{' as '{{'",
                FixEdit::Replace {
                    range,
                    text: escape_lone_open_braces(text),
                },
            )]
        }
        DiagnosticKind::TildeNotFollowedBySlash => vec![FixProposal::new(
            "Insert '/' after '~'",
            FixEdit::Insert {
                at: range.start() + TextSize::of('~'),
                text: "/".to_string(),
            },
        )],
        DiagnosticKind::ConsecutiveSeparators => vec![FixProposal::new(
            "Remove extra '/'",
            FixEdit::Delete { range },
        )],
        DiagnosticKind::EmptyReplacement => vec![FixProposal::new(
            "Remove empty replacement token",
            FixEdit::Delete { range },
        )],
        _ => Vec::new(),
    }
}

fn parameter_at(tree: &RouteTree, range: TextRange) -> Option<Parameter> {
    tree.root()
        .parameters()
        .find(|p| p.as_cst().text_range() == range)
}

fn remove_optional(tree: &RouteTree, range: TextRange) -> Option<FixProposal> {
    let marker = parameter_at(tree, range)?.optional()?;
    Some(FixProposal::new(
        "Remove '?'",
        FixEdit::Delete {
            range: marker.as_cst().text_range(),
        },
    ))
}

/// The handler parameter is typed from the first policy that implies a type.
fn add_handler_parameter(
    tree: &RouteTree,
    name_range: TextRange,
    resolution: Option<&BindingResolution<'_>>,
) -> Option<FixProposal> {
    let parameter = tree.parameters().iter().find(|p| p.name_span == name_range)?;

    let mut type_name = parameter
        .policy_names()
        .find_map(type_for_policy)
        .unwrap_or("string")
        .to_string();
    if parameter.is_optional {
        type_name.push('?');
    }

    let insert_after = resolution.and_then(|r| {
        r.candidates()
            .iter()
            .filter_map(|c| c.declaration)
            .max_by_key(|d| d.end())
    });

    Some(FixProposal::new(
        format!("Add '{}' parameter to the handler", parameter.name),
        FixEdit::AddHandlerParameter {
            name: parameter.name.clone(),
            type_name,
            insert_after,
        },
    ))
}

/// Doubles every `{` that is not already part of a `{{` pair.
fn escape_lone_open_braces(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if !matches!(c, '{' | '}') {
            continue;
        }
        if chars.peek() == Some(&c) {
            chars.next();
            out.push(c);
        } else if c == '{' {
            out.push('{');
        }
    }
    out
}
