//! Completion inside parameter names, policy names, and replacement tokens.

use rowan::{TextRange, TextSize};

use crate::binding::BindingResolution;
use crate::parser::{SyntaxKind, SyntaxToken};
use crate::tree::RouteTree;

/// Built-in route policies with a short description.
const BUILTIN_POLICIES: &[(&str, &str)] = &[
    ("int", "Matches any 32-bit integer"),
    ("bool", "Matches true or false, ignoring case"),
    ("datetime", "Matches a valid DateTime value"),
    ("decimal", "Matches a valid decimal value"),
    ("double", "Matches a valid double value"),
    ("float", "Matches a valid float value"),
    ("guid", "Matches a valid Guid value"),
    ("long", "Matches any 64-bit integer"),
    ("minlength", "String must be at least the given number of characters"),
    ("maxlength", "String must be no more than the given number of characters"),
    ("length", "String must be exactly, or within, the given lengths"),
    ("min", "Integer must be at least the given value"),
    ("max", "Integer must be no more than the given value"),
    ("range", "Integer must be within the given range"),
    ("alpha", "String must consist of one or more letters"),
    ("regex", "String must match the regular expression"),
    ("required", "A non-parameter value must be present"),
    ("file", "Matches a segment that looks like a file name"),
    ("nonfile", "Matches a segment that does not look like a file name"),
];

/// Replacement tokens understood by attribute routes.
const REPLACEMENT_NAMES: &[&str] = &["area", "controller", "action"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    ParameterName,
    PolicyName,
    ReplacementName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    pub kind: CompletionKind,
    /// What was typed between the start of the token and the cursor.
    pub prefix: String,
    /// The range an accepted item replaces.
    pub replace_range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    pub detail: Option<String>,
}

/// Works out what kind of name the cursor at `offset` is typing, if any.
pub fn completion_context(tree: &RouteTree, offset: TextSize) -> Option<CompletionContext> {
    let touching: Vec<SyntaxToken> = tree
        .syntax()
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| t.text_range().contains_inclusive(offset))
        .collect();

    for token in &touching {
        let Some(kind) = name_token_kind(token) else {
            continue;
        };
        let range = token.text_range();
        let typed = usize::from(offset - range.start());
        let prefix = token.text().get(..typed)?.to_string();
        return Some(CompletionContext {
            kind,
            prefix,
            replace_range: range,
        });
    }

    // Nothing typed yet: the cursor sits right after the delimiter that opens a name.
    touching
        .iter()
        .filter(|t| t.text_range().end() == offset)
        .find_map(|t| {
            let kind = match t.kind() {
                SyntaxKind::OpenBrace | SyntaxKind::Asterisk => CompletionKind::ParameterName,
                SyntaxKind::Colon => CompletionKind::PolicyName,
                SyntaxKind::OpenBracket => CompletionKind::ReplacementName,
                _ => return None,
            };
            Some(CompletionContext {
                kind,
                prefix: String::new(),
                replace_range: TextRange::empty(offset),
            })
        })
}

fn name_token_kind(token: &SyntaxToken) -> Option<CompletionKind> {
    match token.kind() {
        SyntaxKind::ParameterNameText => Some(CompletionKind::ParameterName),
        SyntaxKind::ReplacementText => Some(CompletionKind::ReplacementName),
        // Only the fragment right after `:` names the policy.
        SyntaxKind::PolicyFragmentText => {
            let fragment = token.parent()?;
            let after_colon = fragment.kind() == SyntaxKind::PolicyFragment
                && fragment
                    .prev_sibling_or_token()
                    .is_some_and(|s| s.kind() == SyntaxKind::Colon);
            after_colon.then_some(CompletionKind::PolicyName)
        }
        _ => None,
    }
}

/// Items for `context`, filtered by its prefix (case-insensitive).
///
/// Parameter names come from binding candidates no route parameter has claimed yet.
pub fn completion_items(
    context: &CompletionContext,
    resolution: Option<&BindingResolution<'_>>,
) -> Vec<CompletionItem> {
    let prefix = context.prefix.to_lowercase();
    let matches = |label: &str| label.to_lowercase().starts_with(&prefix);

    match context.kind {
        CompletionKind::ParameterName => resolution
            .into_iter()
            .flat_map(|r| r.unclaimed_candidates())
            .filter(|c| matches(c.binding_name()))
            .map(|c| CompletionItem {
                label: c.binding_name().to_string(),
                kind: CompletionKind::ParameterName,
                detail: c.type_name.clone(),
            })
            .collect(),
        CompletionKind::PolicyName => BUILTIN_POLICIES
            .iter()
            .filter(|(name, _)| matches(name))
            .map(|(name, detail)| CompletionItem {
                label: name.to_string(),
                kind: CompletionKind::PolicyName,
                detail: Some(detail.to_string()),
            })
            .collect(),
        CompletionKind::ReplacementName => REPLACEMENT_NAMES
            .iter()
            .filter(|name| matches(name))
            .map(|name| CompletionItem {
                label: name.to_string(),
                kind: CompletionKind::ReplacementName,
                detail: None,
            })
            .collect(),
    }
}
