//! Routepat: error-tolerant parsing and analysis of URL route templates.
//!
//! # Example
//!
//! ```
//! use routepat_lib::{RouteOptions, RouteTree};
//!
//! let tree = RouteTree::parse("products/{id:int?}", RouteOptions::default());
//! assert!(tree.is_valid());
//! assert_eq!(tree.parameters()[0].name, "id");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod binding;
pub mod diagnostics;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod services;
pub mod tree;


pub use analyze::RouteParameter;
pub use binding::{BindingCandidate, BindingResolution};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use options::{RouteDialect, RouteOptions};
pub use scanner::{VirtualChar, VirtualChars};
pub use tree::RouteTree;

/// Errors that stop a route template from being parsed at all.
///
/// Malformed templates never produce an `Error`; they produce a tree with diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The host literal could not be decoded into characters.
    #[error("route literal unavailable: {reason}")]
    LiteralUnavailable { reason: &'static str },

    #[error("unknown route dialect `{0}` (expected `default`, `mvc`, or `components`)")]
    InvalidDialect(String),
}

pub type Result<T> = std::result::Result<T, Error>;
