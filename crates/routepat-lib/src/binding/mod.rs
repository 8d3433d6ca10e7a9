//! Matching route parameters to handler parameters.
//!
//! The host supplies binding candidates (handler parameters, or properties of a bound
//! object) in declaration order; each route parameter claims at most one of them.


use rowan::TextRange;
use serde::Serialize;

use crate::analyze::RouteParameter;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Route policies that pin down a handler parameter type, and the type they map to.
const TYPED_POLICIES: &[(&str, &str)] = &[
    ("int", "int"),
    ("long", "long"),
    ("bool", "bool"),
    ("guid", "Guid"),
    ("datetime", "DateTime"),
    ("decimal", "decimal"),
    ("double", "double"),
    ("float", "float"),
];

/// Handler parameter type for a route policy name, if the policy implies one.
pub fn type_for_policy(policy: &str) -> Option<&'static str> {
    TYPED_POLICIES
        .iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(policy))
        .map(|&(_, ty)| ty)
}

/// Route policy implied by a handler parameter type, accepting framework aliases.
pub fn policy_for_type(type_name: &str) -> Option<&'static str> {
    let bare = type_name.trim_end_matches('?');
    let bare = bare.rsplit('.').next().unwrap_or(bare);
    let alias = match bare {
        "Int32" => "int",
        "Int64" => "long",
        "Boolean" => "bool",
        "Single" => "float",
        other => other,
    };
    TYPED_POLICIES
        .iter()
        .find(|(_, ty)| ty.eq_ignore_ascii_case(alias))
        .map(|&(policy, _)| policy)
}

/// A handler-side target a route parameter can bind to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindingCandidate {
    pub name: String,
    /// Name given by an explicit binding attribute, preferred over `name`.
    pub explicit_name: Option<String>,
    pub is_ignored: bool,
    pub type_name: Option<String>,
    /// Host-document location of the declaration.
    #[serde(skip)]
    pub declaration: Option<TextRange>,
    /// Host-document locations of references to the candidate.
    #[serde(skip)]
    pub references: Vec<TextRange>,
}

impl BindingCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_explicit_name(mut self, name: impl Into<String>) -> Self {
        self.explicit_name = Some(name.into());
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_declaration(mut self, range: TextRange) -> Self {
        self.declaration = Some(range);
        self
    }

    pub fn with_reference(mut self, range: TextRange) -> Self {
        self.references.push(range);
        self
    }

    pub fn ignored(mut self) -> Self {
        self.is_ignored = true;
        self
    }

    /// The name route parameters are matched against.
    pub fn binding_name(&self) -> &str {
        self.explicit_name.as_deref().unwrap_or(&self.name)
    }
}

/// Result of matching route parameters against binding candidates.
#[derive(Debug, Clone)]
pub struct BindingResolution<'a> {
    parameters: &'a [RouteParameter],
    candidates: &'a [BindingCandidate],
    /// Candidate index per parameter, in parameter order.
    matches: Vec<Option<usize>>,
}

/// For each parameter in order, claim the first unconsumed candidate whose explicit name
/// matches, else the first whose own name matches. Names compare case-insensitively.
pub fn resolve<'a>(
    parameters: &'a [RouteParameter],
    candidates: &'a [BindingCandidate],
) -> BindingResolution<'a> {
    let mut consumed = vec![false; candidates.len()];
    let mut matches = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        let name = parameter.name.to_lowercase();
        let found = find_candidate(candidates, &consumed, |c| {
            c.explicit_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase() == name)
        })
        .or_else(|| {
            find_candidate(candidates, &consumed, |c| {
                c.explicit_name.is_none() && c.name.to_lowercase() == name
            })
        });

        if let Some(index) = found {
            consumed[index] = true;
        }
        matches.push(found);
    }

    let resolution = BindingResolution {
        parameters,
        candidates,
        matches,
    };
    tracing::debug!(
        parameters = parameters.len(),
        candidates = candidates.len(),
        unused = resolution.unused().count(),
        "resolved route parameter bindings"
    );
    resolution
}

fn find_candidate(
    candidates: &[BindingCandidate],
    consumed: &[bool],
    predicate: impl Fn(&BindingCandidate) -> bool,
) -> Option<usize> {
    candidates
        .iter()
        .zip(consumed)
        .position(|(c, &taken)| !taken && !c.is_ignored && predicate(c))
}

impl<'a> BindingResolution<'a> {
    /// Every parameter with its bound candidate, in parameter order.
    pub fn matches(&self) -> impl Iterator<Item = (&'a RouteParameter, Option<&'a BindingCandidate>)> {
        let candidates = self.candidates;
        self.parameters
            .iter()
            .zip(self.matches.iter())
            .map(move |(p, m)| (p, m.map(|i| &candidates[i])))
    }

    pub fn candidate_for(&self, parameter_index: usize) -> Option<&'a BindingCandidate> {
        let index = (*self.matches.get(parameter_index)?)?;
        self.candidates.get(index)
    }

    /// Candidate bound to the parameter with this name, if any.
    pub fn candidate_named(&self, name: &str) -> Option<&'a BindingCandidate> {
        let name = name.to_lowercase();
        let index = self
            .parameters
            .iter()
            .position(|p| p.name.to_lowercase() == name)?;
        self.candidate_for(index)
    }

    /// Parameters no candidate was found for.
    pub fn unused(&self) -> impl Iterator<Item = &'a RouteParameter> {
        self.matches().filter_map(|(p, c)| c.is_none().then_some(p))
    }

    /// Non-ignored candidates no parameter claimed.
    pub fn unclaimed_candidates(&self) -> impl Iterator<Item = &'a BindingCandidate> {
        let claimed: Vec<usize> = self.matches.iter().flatten().copied().collect();
        self.candidates
            .iter()
            .enumerate()
            .filter(move |(i, c)| !c.is_ignored && !claimed.contains(i))
            .map(|(_, c)| c)
    }

    pub fn candidates(&self) -> &'a [BindingCandidate] {
        self.candidates
    }

    /// One `RouteParameterUnused` warning per unmatched parameter, at its name.
    pub fn unused_diagnostics(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for parameter in self.unused() {
            diagnostics
                .report(DiagnosticKind::RouteParameterUnused, parameter.name_span)
                .arg(&parameter.name)
                .emit();
        }
        diagnostics
    }

    /// Hints for bound parameters whose candidate type implies a policy the route lacks.
    pub fn constraint_hints(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for (parameter, candidate) in self.matches() {
            let Some(type_name) = candidate.and_then(|c| c.type_name.as_deref()) else {
                continue;
            };
            let Some(policy) = policy_for_type(type_name) else {
                continue;
            };
            if !parameter.policies.is_empty() {
                continue;
            }
            diagnostics
                .report(DiagnosticKind::ParameterConstraintMissing, parameter.name_span)
                .arg(&parameter.name)
                .arg(type_name)
                .arg(policy)
                .emit();
        }
        diagnostics
    }
}
