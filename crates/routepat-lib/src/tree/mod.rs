//! The parsed form of one route template.
//!
//! A `RouteTree` bundles everything one parse produces: the lossless syntax tree, the
//! diagnostics of every pass, and the ordered parameter list. Trees are built fresh per
//! literal and dropped after one query batch.

mod dump;
mod printer;


pub use printer::TreePrinter;

use rowan::{TextRange, TextSize};

use crate::Result;
use crate::analyze::{self, RouteParameter};
use crate::diagnostics::Diagnostics;
use crate::options::RouteOptions;
use crate::parser::{self, CompilationUnit, Parse, SyntaxNode};
use crate::scanner::{self, VirtualChars};

#[derive(Debug, Clone)]
pub struct RouteTree {
    chars: VirtualChars,
    options: RouteOptions,
    parse: Parse,
    diagnostics: Diagnostics,
    parameters: Vec<RouteParameter>,
}

impl RouteTree {
    /// Parses a bare template; tree ranges equal offsets into `text`.
    pub fn parse(text: &str, options: RouteOptions) -> Self {
        Self::from_chars(VirtualChars::from_plain(text), options)
    }

    /// Parses a host string literal, quotes and escapes included.
    ///
    /// `base` is the literal's offset in the host document.
    pub fn from_literal(literal: &str, base: TextSize, options: RouteOptions) -> Result<Self> {
        let chars = scanner::scan(literal, base)?;
        Ok(Self::from_chars(chars, options))
    }

    pub fn from_chars(chars: VirtualChars, options: RouteOptions) -> Self {
        let (parse, mut diagnostics) = parser::parse(chars.text(), options);
        let parameters = analyze::analyze(&parse.root(), &options, &mut diagnostics);

        Self {
            chars,
            options,
            parse,
            diagnostics,
            parameters,
        }
    }

    /// Decoded template text, the coordinate space of every range in the tree.
    pub fn text(&self) -> &str {
        self.chars.text()
    }

    pub fn root(&self) -> CompilationUnit {
        self.parse.root()
    }

    pub fn syntax(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn parameters(&self) -> &[RouteParameter] {
        &self.parameters
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    pub fn chars(&self) -> &VirtualChars {
        &self.chars
    }

    /// No errors; warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Maps a tree range back to the host document.
    pub fn source_range(&self, range: TextRange) -> TextRange {
        self.chars.source_range(range)
    }

    /// The parameter whose braces enclose `offset` (ends inclusive).
    pub fn parameter_at(&self, offset: TextSize) -> Option<&RouteParameter> {
        self.parameters
            .iter()
            .find(|p| p.span.contains_inclusive(offset))
    }

    /// First parameter with this name, compared case-insensitively.
    pub fn parameter_named(&self, name: &str) -> Option<&RouteParameter> {
        let name = name.to_lowercase();
        self.parameters
            .iter()
            .find(|p| p.name.to_lowercase() == name)
    }

    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }
}
