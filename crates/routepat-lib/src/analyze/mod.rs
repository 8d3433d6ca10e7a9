//! Semantic analysis over a parsed route template.
//!
//! Runs after parsing: collects the ordered parameter list in one tree walk, then enforces
//! the invariants that span several parameters or segments. Every check is non-fatal and
//! only appends diagnostics.

mod parameters;
mod validate;

#[cfg(test)]
mod analyze_tests;

pub use parameters::{RouteParameter, collect_parameters};
pub use validate::validate;

use crate::diagnostics::Diagnostics;
use crate::options::RouteOptions;
use crate::parser::CompilationUnit;

/// Collects parameters and runs every validation pass, appending to `diagnostics`.
pub fn analyze(
    root: &CompilationUnit,
    options: &RouteOptions,
    diagnostics: &mut Diagnostics,
) -> Vec<RouteParameter> {
    let parameters = collect_parameters(root);
    let before = diagnostics.len();
    validate(root, &parameters, options, diagnostics);

    tracing::debug!(
        parameters = parameters.len(),
        diagnostics = diagnostics.len() - before,
        "validated route parameters"
    );
    parameters
}
