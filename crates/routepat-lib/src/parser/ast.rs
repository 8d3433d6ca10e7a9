//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.
//! A token the parser never found is simply absent, so its accessor returns `None`.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};
use super::lexer::unescape;

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(CompilationUnit, CompilationUnit);
ast_node!(Segment, Segment);
ast_node!(Separator, Separator);
ast_node!(Literal, Literal);
ast_node!(Parameter, Parameter);
ast_node!(ParameterName, ParameterName);
ast_node!(CatchAllMarker, CatchAllMarker);
ast_node!(OptionalMarker, OptionalMarker);
ast_node!(ParameterPolicy, ParameterPolicy);
ast_node!(PolicyFragment, PolicyFragment);
ast_node!(PolicyFragmentEscaped, PolicyFragmentEscaped);
ast_node!(DefaultValue, DefaultValue);
ast_node!(Replacement, Replacement);

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

/// One section of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    Literal(Literal),
    Parameter(Parameter),
    Replacement(Replacement),
}

impl Section {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Literal => Literal::cast(node).map(Section::Literal),
            SyntaxKind::Parameter => Parameter::cast(node).map(Section::Parameter),
            SyntaxKind::Replacement => Replacement::cast(node).map(Section::Replacement),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Section::Literal(n) => n.as_cst(),
            Section::Parameter(n) => n.as_cst(),
            Section::Replacement(n) => n.as_cst(),
        }
    }

    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Section::Parameter(p) => Some(p),
            _ => None,
        }
    }
}

/// A policy fragment: plain text or a parenthesized argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    Plain(PolicyFragment),
    Escaped(PolicyFragmentEscaped),
}

impl Fragment {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::PolicyFragment => PolicyFragment::cast(node).map(Fragment::Plain),
            SyntaxKind::PolicyFragmentEscaped => {
                PolicyFragmentEscaped::cast(node).map(Fragment::Escaped)
            }
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Fragment::Plain(n) => n.as_cst(),
            Fragment::Escaped(n) => n.as_cst(),
        }
    }
}

impl CompilationUnit {
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.0.children().filter_map(Segment::cast)
    }

    pub fn separators(&self) -> impl Iterator<Item = Separator> + '_ {
        self.0.children().filter_map(Separator::cast)
    }

    /// Every parameter, in document order.
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.0.descendants().filter_map(Parameter::cast)
    }
}

impl Segment {
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.0.children().filter_map(Section::cast)
    }

    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

impl Separator {
    pub fn slash(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Slash)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::LiteralText)
    }

    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    /// Text with escape pairs collapsed; `[[`/`]]` only count as escapes in the
    /// token-replacement dialect.
    pub fn value(&self, escaped_brackets: bool) -> String {
        unescape(&self.text(), escaped_brackets).into_owned()
    }
}

impl Parameter {
    pub fn open_brace(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::OpenBrace)
    }

    pub fn close_brace(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::CloseBrace)
    }

    pub fn catch_all(&self) -> Option<CatchAllMarker> {
        self.0.children().find_map(CatchAllMarker::cast)
    }

    pub fn name(&self) -> Option<ParameterName> {
        self.0.children().find_map(ParameterName::cast)
    }

    pub fn policies(&self) -> impl Iterator<Item = ParameterPolicy> + '_ {
        self.0.children().filter_map(ParameterPolicy::cast)
    }

    pub fn default_value(&self) -> Option<DefaultValue> {
        self.0.children().find_map(DefaultValue::cast)
    }

    pub fn optional(&self) -> Option<OptionalMarker> {
        self.0.children().find_map(OptionalMarker::cast)
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all().is_some()
    }

    pub fn is_optional(&self) -> bool {
        self.optional().is_some()
    }
}

impl ParameterName {
    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::ParameterNameText)
    }

    /// Raw name text, empty when the token is missing.
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    /// Name with `{{`/`}}` collapsed.
    pub fn value(&self) -> String {
        unescape(&self.text(), false).into_owned()
    }
}

impl CatchAllMarker {
    pub fn asterisk(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Asterisk)
    }

    /// `{**path}` leaves slashes unencoded when generating URLs.
    pub fn encode_slashes(&self) -> bool {
        self.asterisk().is_none_or(|t| t.text() != "**")
    }
}

impl OptionalMarker {
    pub fn question_mark(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::QuestionMark)
    }
}

impl ParameterPolicy {
    pub fn colon(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Colon)
    }

    pub fn fragments(&self) -> impl Iterator<Item = Fragment> + '_ {
        self.0.children().filter_map(Fragment::cast)
    }

    /// The policy as written, starting with its `:`.
    pub fn raw_text(&self) -> String {
        self.0.text().to_string()
    }

    /// Policy name: the text of the first plain fragment.
    pub fn name(&self) -> Option<String> {
        match self.fragments().next()? {
            Fragment::Plain(fragment) => Some(fragment.text()),
            Fragment::Escaped(_) => None,
        }
    }
}

impl PolicyFragment {
    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::PolicyFragmentText)
    }

    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

impl PolicyFragmentEscaped {
    pub fn open_paren(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::OpenParen)
    }

    pub fn argument(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::PolicyFragmentText)
    }

    pub fn close_paren(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::CloseParen)
    }
}

impl DefaultValue {
    pub fn equals(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Equals)
    }

    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::DefaultValueText)
    }

    /// Raw default text, empty for `{a=}`.
    pub fn text(&self) -> String {
        self.token().map(|t| t.text().to_string()).unwrap_or_default()
    }
}

impl Replacement {
    pub fn open_bracket(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::OpenBracket)
    }

    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::ReplacementText)
    }

    pub fn close_bracket(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::CloseBracket)
    }

    /// Replacement name with `[[`/`]]` collapsed.
    pub fn value(&self) -> Option<String> {
        self.token()
            .map(|t| unescape(t.text(), true).into_owned())
    }
}
