//! Cross-reference highlighting between a route parameter and its bound candidate.

use rowan::{TextRange, TextSize};

use crate::binding::BindingResolution;
use crate::tree::RouteTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlights {
    /// The parameter name under the cursor, in decoded-text coordinates.
    pub name: TextRange,
    /// Declaration of the bound candidate, in host-document coordinates.
    pub declaration: Option<TextRange>,
    /// References to the bound candidate, in host-document coordinates.
    pub references: Vec<TextRange>,
}

/// Highlights for a cursor inside (or at either end of) a parameter name.
pub fn highlight(
    tree: &RouteTree,
    resolution: &BindingResolution<'_>,
    offset: TextSize,
) -> Option<Highlights> {
    let parameter = tree
        .parameters()
        .iter()
        .find(|p| p.name_span.contains_inclusive(offset))?;

    // Same-named parameters share the candidate bound to the first of them.
    let candidate = resolution.candidate_named(&parameter.name);
    Some(Highlights {
        name: parameter.name_span,
        declaration: candidate.and_then(|c| c.declaration),
        references: candidate.map(|c| c.references.clone()).unwrap_or_default(),
    })
}
