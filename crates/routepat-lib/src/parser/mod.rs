//! Parser infrastructure for route templates.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder,
//! following the layout of rust-analyzer style parsers:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Modal lexing: the lexer decides what a character means from where it sits
//! - Missing tokens are absent children, never placeholders
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree and never aborts.
//!
//! 1. A parameter or replacement cut short by the end of input is still a node, just
//!    without its closing delimiter
//! 2. Stray characters stay inside the surrounding literal or name and get a diagnostic
//! 3. Tokens no production accepts are wrapped in `SyntaxKind::Error` nodes and consumed

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    CatchAllMarker, CompilationUnit, DefaultValue, Fragment, Literal, OptionalMarker, Parameter,
    ParameterName, ParameterPolicy, PolicyFragment, PolicyFragmentEscaped, Replacement, Section,
    Segment, Separator,
};

pub use core::Parser;

use crate::diagnostics::Diagnostics;
use crate::options::RouteOptions;
use lexer::lex;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    cst: rowan::GreenNode,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    /// This is cheap: SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn root(&self) -> CompilationUnit {
        CompilationUnit::cast(self.syntax()).expect("parser always produces CompilationUnit")
    }
}

/// Main entry point: lexes and parses decoded route text.
pub fn parse(text: &str, options: RouteOptions) -> (Parse, Diagnostics) {
    let tokens = lex(text, &options);
    let token_count = tokens.len();
    let mut parser = Parser::new(text, tokens, options);
    parser.parse_root();
    let (cst, diagnostics) = parser.finish();

    tracing::debug!(
        dialect = %options.dialect,
        tokens = token_count,
        diagnostics = diagnostics.len(),
        "parsed route template"
    );
    (Parse { cst }, diagnostics)
}
