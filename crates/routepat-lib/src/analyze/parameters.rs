use rowan::TextRange;
use serde::Serialize;

use crate::parser::{CompilationUnit, Parameter};

/// A route parameter as the router sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParameter {
    /// Decoded name (`{{`/`}}` collapsed).
    pub name: String,
    pub is_catch_all: bool,
    pub is_optional: bool,
    /// `false` only for the `{**name}` form.
    pub encode_slashes: bool,
    pub default_value: Option<String>,
    /// Raw policy texts, each starting with `:`.
    pub policies: Vec<String>,
    #[serde(skip)]
    pub span: TextRange,
    #[serde(skip)]
    pub name_span: TextRange,
}

impl RouteParameter {
    fn from_node(node: &Parameter) -> Option<Self> {
        let name_node = node.name()?;
        let name = name_node.value();
        if name.is_empty() {
            return None;
        }

        let catch_all = node.catch_all();
        Some(Self {
            name,
            is_catch_all: catch_all.is_some(),
            is_optional: node.is_optional(),
            encode_slashes: catch_all.is_none_or(|m| m.encode_slashes()),
            default_value: node.default_value().map(|d| d.text()),
            policies: node.policies().map(|p| p.raw_text()).collect(),
            span: node.as_cst().text_range(),
            name_span: name_node.as_cst().text_range(),
        })
    }

    /// Policy names without the colon or arguments, e.g. `int` for `:int`.
    pub fn policy_names(&self) -> impl Iterator<Item = &str> {
        self.policies.iter().filter_map(|p| {
            let body = p.strip_prefix(':')?;
            let name = body.split('(').next().unwrap_or(body);
            (!name.is_empty()).then_some(name)
        })
    }
}

/// Every parameter with a non-empty name, in document order.
pub fn collect_parameters(root: &CompilationUnit) -> Vec<RouteParameter> {
    root.parameters()
        .filter_map(|p| RouteParameter::from_node(&p))
        .collect()
}
