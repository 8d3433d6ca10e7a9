//! Lexer for route templates.
//!
//! Produces span-based tokens without storing text - text is sliced from the route text only
//! when needed.
//!
//! Lexing happens in two steps. Logos splits the text into pieces: escape pairs (`{{`, `}}`,
//! `[[`, `]]`), single delimiters, operators, and runs of plain text. A modal pass then groups
//! pieces into grammar tokens depending on where it is: literal text, parameter name, policy
//! fragment, default value, or replacement token. Route syntax is context-sensitive (`?` ends
//! a parameter name only right before `}`, `(` opens an argument only if a `)` follows), so
//! the grouping needs lookahead that a flat regex lexer can't express.
//!
//! Every piece ends up in exactly one token, so token texts always concatenate back to the
//! input.

use std::borrow::Cow;
use std::ops::Range;

use logos::Logos;
use rowan::TextRange;

use super::cst::SyntaxKind;
use crate::options::RouteOptions;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    #[token("{{")]
    EscapedOpenBrace,

    #[token("}}")]
    EscapedCloseBrace,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token("[[")]
    EscapedOpenBracket,

    #[token("]]")]
    EscapedCloseBracket,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("**")]
    DoubleStar,

    #[token("*")]
    Star,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("?")]
    Question,

    #[token("/")]
    Slash,

    #[regex(r"[^{}\[\]()*:=?/]+")]
    Text,
}

#[derive(Debug, Clone)]
struct PieceSpan {
    kind: Piece,
    range: Range<usize>,
}

fn split_pieces(text: &str) -> Vec<PieceSpan> {
    let mut pieces: Vec<PieceSpan> = Vec::new();
    let mut lexer = Piece::lexer(text);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        // Every character belongs to some piece; an error can only be a stray text run.
        let kind = result.unwrap_or(Piece::Text);
        match pieces.last_mut() {
            Some(last) if kind == Piece::Text && last.kind == Piece::Text => {
                last.range.end = range.end;
            }
            _ => pieces.push(PieceSpan { kind, range }),
        }
    }

    pieces
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

struct Lexer<'p> {
    pieces: &'p [PieceSpan],
    pos: usize,
    options: &'p RouteOptions,
    tokens: Vec<Token>,
}

impl Lexer<'_> {
    fn peek(&self) -> Option<Piece> {
        self.pieces.get(self.pos).map(|p| p.kind)
    }

    fn at(&self, piece: Piece) -> bool {
        self.peek() == Some(piece)
    }

    /// `?` right before a lone `}` or the end of input closes the parameter.
    fn at_closing_question(&self) -> bool {
        self.at(Piece::Question)
            && matches!(
                self.pieces.get(self.pos + 1).map(|p| p.kind),
                None | Some(Piece::CloseBrace)
            )
    }

    fn emit_run(&mut self, kind: SyntaxKind, start: usize) {
        if start == self.pos {
            return;
        }
        let range = self.pieces[start].range.start..self.pieces[self.pos - 1].range.end;
        self.tokens.push(Token::new(kind, range_to_text_range(range)));
    }

    fn single(&mut self, kind: SyntaxKind) {
        let start = self.pos;
        self.pos += 1;
        self.emit_run(kind, start);
    }

    fn lex_route(&mut self) {
        while let Some(piece) = self.peek() {
            match piece {
                Piece::Slash => self.single(SyntaxKind::Slash),
                Piece::OpenBrace => self.lex_parameter(),
                Piece::OpenBracket if self.options.supports_token_replacement => {
                    self.lex_replacement()
                }
                _ => self.lex_literal(),
            }
        }
    }

    fn lex_literal(&mut self) {
        let start = self.pos;
        while let Some(piece) = self.peek() {
            let interrupts = match piece {
                Piece::Slash | Piece::OpenBrace => true,
                Piece::OpenBracket => self.options.supports_token_replacement,
                _ => false,
            };
            if interrupts {
                break;
            }
            self.pos += 1;
        }
        self.emit_run(SyntaxKind::LiteralText, start);
    }

    fn lex_parameter(&mut self) {
        self.single(SyntaxKind::OpenBrace);

        if matches!(self.peek(), Some(Piece::Star | Piece::DoubleStar)) {
            self.single(SyntaxKind::Asterisk);
        }

        self.lex_parameter_name();

        while self.at(Piece::Colon) {
            self.single(SyntaxKind::Colon);
            self.lex_policy_fragments();
        }

        if self.at(Piece::Equals) {
            self.single(SyntaxKind::Equals);
            let start = self.pos;
            while self.peek().is_some_and(|p| p != Piece::CloseBrace) && !self.at_closing_question()
            {
                self.pos += 1;
            }
            self.emit_run(SyntaxKind::DefaultValueText, start);
        }

        if self.at_closing_question() {
            self.single(SyntaxKind::QuestionMark);
        }

        if self.at(Piece::CloseBrace) {
            self.single(SyntaxKind::CloseBrace);
        }
    }

    /// The first piece always belongs to the name, so `{:hi}` is named `:hi`.
    fn lex_parameter_name(&mut self) {
        let start = self.pos;
        if self.peek().is_some_and(|p| p != Piece::CloseBrace) && !self.at_closing_question() {
            self.pos += 1;
        }
        while let Some(piece) = self.peek() {
            if matches!(piece, Piece::Colon | Piece::Equals | Piece::CloseBrace)
                || self.at_closing_question()
            {
                break;
            }
            self.pos += 1;
        }
        self.emit_run(SyntaxKind::ParameterNameText, start);
    }

    fn lex_policy_fragments(&mut self) {
        let mut start = self.pos;
        while let Some(piece) = self.peek() {
            match piece {
                Piece::CloseBrace | Piece::Colon | Piece::Equals => break,
                Piece::Question if self.at_closing_question() => break,
                Piece::OpenParen => match self.find_close_paren() {
                    Some(close) => {
                        self.emit_run(SyntaxKind::PolicyFragmentText, start);
                        self.single(SyntaxKind::OpenParen);
                        let inner = self.pos;
                        self.pos = close;
                        self.emit_run(SyntaxKind::PolicyFragmentText, inner);
                        self.single(SyntaxKind::CloseParen);
                        start = self.pos;
                    }
                    None => {
                        // Unbalanced `(`: the rest of the parameter is plain fragment text.
                        while self.peek().is_some_and(|p| p != Piece::CloseBrace) {
                            self.pos += 1;
                        }
                        break;
                    }
                },
                _ => self.pos += 1,
            }
        }
        self.emit_run(SyntaxKind::PolicyFragmentText, start);
    }

    /// Position of the first `)` after the current `(`, unless a lone `}` comes first.
    fn find_close_paren(&self) -> Option<usize> {
        self.pieces[self.pos + 1..]
            .iter()
            .position(|p| matches!(p.kind, Piece::CloseParen | Piece::CloseBrace))
            .map(|offset| self.pos + 1 + offset)
            .filter(|&i| self.pieces[i].kind == Piece::CloseParen)
    }

    fn lex_replacement(&mut self) {
        self.single(SyntaxKind::OpenBracket);
        let start = self.pos;
        while let Some(piece) = self.peek() {
            if matches!(
                piece,
                Piece::CloseBracket
                    | Piece::OpenBracket
                    | Piece::OpenBrace
                    | Piece::CloseBrace
                    | Piece::Slash
            ) {
                break;
            }
            self.pos += 1;
        }
        self.emit_run(SyntaxKind::ReplacementText, start);
        if self.at(Piece::CloseBracket) {
            self.single(SyntaxKind::CloseBracket);
        }
    }
}

/// Tokenizes route text into a vector of span-based tokens.
pub fn lex(text: &str, options: &RouteOptions) -> Vec<Token> {
    let pieces = split_pieces(text);
    let mut lexer = Lexer {
        pieces: &pieces,
        pos: 0,
        options,
        tokens: Vec::with_capacity(pieces.len()),
    };
    lexer.lex_route();

    tracing::trace!(
        pieces = pieces.len(),
        tokens = lexer.tokens.len(),
        "lexed route template"
    );
    lexer.tokens
}

/// Retrieves the text slice for a token. O(1) slice into the route text.
#[inline]
pub fn token_text<'t>(text: &'t str, token: &Token) -> &'t str {
    &text[std::ops::Range::<usize>::from(token.span)]
}

/// Collapses `{{`/`}}` escape pairs, and `[[`/`]]` when `brackets` is set.
pub fn unescape(text: &str, brackets: bool) -> Cow<'_, str> {
    if !text.contains(['{', '}', '[', ']']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if is_escapable(c, brackets) && chars.peek() == Some(&c) {
            chars.next();
        }
    }
    Cow::Owned(out)
}

/// Whether `target` occurs in `text` outside of an escape pair.
pub fn has_lone(text: &str, target: char, brackets: bool) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_escapable(c, brackets) && chars.peek() == Some(&c) {
            chars.next();
            continue;
        }
        if c == target {
            return true;
        }
    }
    false
}

fn is_escapable(c: char, brackets: bool) -> bool {
    matches!(c, '{' | '}') || (brackets && matches!(c, '[' | ']'))
}
