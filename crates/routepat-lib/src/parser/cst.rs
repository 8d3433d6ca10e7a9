//! Syntax kinds for route templates.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds (from the
//! parser). `RouteLang` implements Rowan's `Language` trait for tree construction.

use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    OpenBrace = 0,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    /// `*` or `**` directly after `{`
    Asterisk,
    Colon,
    Equals,
    QuestionMark,
    Slash,
    LiteralText,
    ParameterNameText,
    PolicyFragmentText,
    DefaultValueText,
    ReplacementText,
    /// Lookahead past the last token. Never stored in the tree.
    EndOfInput,

    // --- Node kinds (non-terminals) ---
    CompilationUnit,
    Segment,
    Separator,
    Literal,
    Parameter,
    ParameterName,
    CatchAllMarker,
    OptionalMarker,
    ParameterPolicy,
    PolicyFragment,
    PolicyFragmentEscaped,
    DefaultValue,
    Replacement,
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (CompilationUnit as u16)
    }

    /// Tokens that open or close a delimited construct.
    #[inline]
    pub fn is_delimiter(self) -> bool {
        matches!(
            self,
            OpenBrace | CloseBrace | OpenBracket | CloseBracket | OpenParen | CloseParen
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteLang {}

impl Language for RouteLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<RouteLang>;
pub type SyntaxToken = rowan::SyntaxToken<RouteLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// FIRST set of a segment section.
    pub const SECTION_FIRST: TokenSet = TokenSet::new(&[LiteralText, OpenBrace, OpenBracket]);

    /// Tokens that can continue a policy after its colon.
    pub const POLICY_FRAGMENT_FIRST: TokenSet = TokenSet::new(&[PolicyFragmentText, OpenParen]);

    /// Where a segment ends.
    pub const SEGMENT_END: TokenSet = TokenSet::new(&[Slash, EndOfInput]);
}
