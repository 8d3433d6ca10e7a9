//! Builder-pattern printer for inspecting route trees.

use std::fmt::Write;

use rowan::NodeOrToken;

use super::RouteTree;
use crate::parser::{Parameter, Replacement, Section, Segment, SyntaxNode};

pub struct TreePrinter<'t> {
    tree: &'t RouteTree,
    raw: bool,
    spans: bool,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t RouteTree) -> Self {
        Self {
            tree,
            raw: false,
            spans: false,
        }
    }

    /// Print the concrete syntax tree instead of the condensed view.
    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            return self.format_cst(&self.tree.syntax(), 0, w);
        }
        self.format_root(w)
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    let child_prefix = "  ".repeat(indent + 1);
                    let child_span = self.span_str(t.text_range());
                    writeln!(
                        w,
                        "{}{:?}{} {:?}",
                        child_prefix,
                        t.kind(),
                        child_span,
                        t.text()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn format_root(&self, w: &mut impl Write) -> std::fmt::Result {
        let root = self.tree.root();
        let span = self.span_str(root.as_cst().text_range());
        writeln!(w, "Route{}", span)?;

        for segment in root.segments() {
            self.format_segment(&segment, w)?;
        }
        Ok(())
    }

    fn format_segment(&self, segment: &Segment, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(segment.as_cst().text_range());
        writeln!(w, "  Segment{}", span)?;

        let brackets = self.tree.options().supports_token_replacement;
        for section in segment.sections() {
            let span = self.span_str(section.as_cst().text_range());
            match &section {
                Section::Literal(literal) => {
                    writeln!(w, "    Literal{} {:?}", span, literal.value(brackets))?
                }
                Section::Parameter(parameter) => {
                    writeln!(w, "    Parameter{} {}", span, describe_parameter(parameter))?
                }
                Section::Replacement(replacement) => writeln!(
                    w,
                    "    Replacement{} {}",
                    span,
                    describe_replacement(replacement)
                )?,
            }
        }
        Ok(())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

/// `*name:policy=default?`, with `(missing)` for an absent name.
fn describe_parameter(parameter: &Parameter) -> String {
    let mut out = String::new();
    if let Some(marker) = parameter.catch_all() {
        out.push_str(if marker.encode_slashes() { "*" } else { "**" });
    }

    match parameter.name().map(|n| n.value()) {
        Some(name) if !name.is_empty() => out.push_str(&name),
        _ => out.push_str("(missing)"),
    }

    for policy in parameter.policies() {
        out.push_str(&policy.raw_text());
    }

    if let Some(default) = parameter.default_value() {
        out.push('=');
        out.push_str(&default.text());
    }

    if parameter.is_optional() {
        out.push('?');
    }

    if parameter.close_brace().is_none() {
        out.push_str(" (unclosed)");
    }
    out
}

fn describe_replacement(replacement: &Replacement) -> String {
    let mut out = replacement.value().unwrap_or_else(|| "(missing)".to_string());
    if replacement.close_bracket().is_none() {
        out.push_str(" (unclosed)");
    }
    out
}
