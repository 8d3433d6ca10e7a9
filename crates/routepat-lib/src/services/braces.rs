//! Matching `{}`, `()`, and `[]` pairs.

use rowan::{TextRange, TextSize};

use crate::parser::{SyntaxKind, SyntaxToken};
use crate::tree::RouteTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterMatch {
    pub open: TextRange,
    pub close: TextRange,
}

/// Finds the pair of the delimiter the cursor touches.
///
/// A delimiter starting at `offset` wins over one ending there, so `)|}` picks the `}`.
/// Returns `None` when the construct is missing its other half.
pub fn find_matching_delimiter(tree: &RouteTree, offset: TextSize) -> Option<DelimiterMatch> {
    let delimiters: Vec<SyntaxToken> = tree
        .syntax()
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| t.kind().is_delimiter())
        .collect();

    let token = delimiters
        .iter()
        .find(|t| t.text_range().start() == offset)
        .or_else(|| delimiters.iter().find(|t| t.text_range().end() == offset))?;

    let partner_kind = partner(token.kind())?;
    let partner = token
        .parent()?
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == partner_kind)?;

    let (open, close) = if is_opening(token.kind()) {
        (token.text_range(), partner.text_range())
    } else {
        (partner.text_range(), token.text_range())
    };
    Some(DelimiterMatch { open, close })
}

fn partner(kind: SyntaxKind) -> Option<SyntaxKind> {
    let partner = match kind {
        SyntaxKind::OpenBrace => SyntaxKind::CloseBrace,
        SyntaxKind::CloseBrace => SyntaxKind::OpenBrace,
        SyntaxKind::OpenParen => SyntaxKind::CloseParen,
        SyntaxKind::CloseParen => SyntaxKind::OpenParen,
        SyntaxKind::OpenBracket => SyntaxKind::CloseBracket,
        SyntaxKind::CloseBracket => SyntaxKind::OpenBracket,
        _ => return None,
    };
    Some(partner)
}

fn is_opening(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::OpenBrace | SyntaxKind::OpenParen | SyntaxKind::OpenBracket
    )
}
