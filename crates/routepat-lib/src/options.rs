//! Grammar dialects as capability flags.
//!
//! The lexer, parser, and validator share one code path for every dialect and only consult
//! these flags, so shared productions produce identical trees in all modes.

use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// Named presets for [`RouteOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDialect {
    /// Conventional and minimal-API routing.
    #[default]
    Default,
    /// Attribute routes, which also accept `[controller]`-style replacement tokens.
    MvcAttributeRoute,
    /// Component page routes: no complex segments, no defaults, optional parameters trail.
    ComponentsRoute,
}

impl RouteDialect {
    pub fn options(self) -> RouteOptions {
        match self {
            RouteDialect::Default => RouteOptions::default(),
            RouteDialect::MvcAttributeRoute => RouteOptions::mvc_attribute_route(),
            RouteDialect::ComponentsRoute => RouteOptions::components_route(),
        }
    }
}

impl FromStr for RouteDialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(RouteDialect::Default),
            "mvc" => Ok(RouteDialect::MvcAttributeRoute),
            "components" => Ok(RouteDialect::ComponentsRoute),
            _ => Err(Error::InvalidDialect(s.to_string())),
        }
    }
}

impl std::fmt::Display for RouteDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteDialect::Default => write!(f, "default"),
            RouteDialect::MvcAttributeRoute => write!(f, "mvc"),
            RouteDialect::ComponentsRoute => write!(f, "components"),
        }
    }
}

/// Grammar capabilities threaded through lexing, parsing, and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RouteOptions {
    pub dialect: RouteDialect,
    /// `{*rest}` parameters.
    pub supports_catch_all: bool,
    /// `{**rest}` parameters, which keep slashes encoded.
    pub supports_two_asterisk_catch_all: bool,
    /// `[name]` replacement tokens in literal positions.
    pub supports_token_replacement: bool,
    /// Segments mixing several literal/parameter sections, such as `{a}.{b}`.
    pub supports_complex_segments: bool,
    /// `{name=value}` defaults.
    pub supports_default_values: bool,
    /// Whether a required parameter or literal may follow an optional parameter.
    pub allow_required_after_optional: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            dialect: RouteDialect::Default,
            supports_catch_all: true,
            supports_two_asterisk_catch_all: true,
            supports_token_replacement: false,
            supports_complex_segments: true,
            supports_default_values: true,
            allow_required_after_optional: true,
        }
    }
}

impl RouteOptions {
    pub fn mvc_attribute_route() -> Self {
        Self {
            dialect: RouteDialect::MvcAttributeRoute,
            supports_token_replacement: true,
            ..Self::default()
        }
    }

    pub fn components_route() -> Self {
        Self {
            dialect: RouteDialect::ComponentsRoute,
            supports_two_asterisk_catch_all: false,
            supports_complex_segments: false,
            supports_default_values: false,
            allow_required_after_optional: false,
            ..Self::default()
        }
    }

    pub fn with_catch_all(mut self, value: bool) -> Self {
        self.supports_catch_all = value;
        self
    }

    pub fn with_token_replacement(mut self, value: bool) -> Self {
        self.supports_token_replacement = value;
        self
    }
}
