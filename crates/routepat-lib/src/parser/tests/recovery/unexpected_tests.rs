use rowan::{NodeOrToken, TextRange, TextSize};

use crate::RouteOptions;
use crate::parser::lexer::Token;
use crate::parser::{Parser, SyntaxKind, SyntaxNode};

/// The lexer never produces tokens the grammar rejects, so these feed the parser directly.
fn parse_tokens(source: &str, tokens: &[(SyntaxKind, u32, u32)]) -> (String, String) {
    let tokens = tokens
        .iter()
        .map(|&(kind, start, end)| {
            Token::new(kind, TextRange::new(TextSize::from(start), TextSize::from(end)))
        })
        .collect();

    let mut parser = Parser::new(source, tokens, RouteOptions::default());
    parser.parse_root();
    let (cst, diagnostics) = parser.finish();

    let mut out = String::new();
    dump(&SyntaxNode::new_root(cst), 0, &mut out);
    (out, diagnostics.printer().render())
}

fn dump(node: &SyntaxNode, depth: usize, out: &mut String) {
    out.push_str(&format!("{}{:?}\n", "  ".repeat(depth), node.kind()));
    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Node(n) => dump(&n, depth + 1, out),
            NodeOrToken::Token(t) => out.push_str(&format!(
                "{}{:?} {:?}\n",
                "  ".repeat(depth + 1),
                t.kind(),
                t.text()
            )),
        }
    }
}

#[test]
fn stray_token_at_top_level() {
    let (cst, diagnostics) = parse_tokens(")", &[(SyntaxKind::CloseParen, 0, 1)]);

    insta::assert_snapshot!(cst, @r#"
    CompilationUnit
      Error
        CloseParen ")"
    "#);
    insta::assert_snapshot!(diagnostics, @"error at 0..1: Unexpected ')' in the route template.");
}

#[test]
fn stray_token_between_segments() {
    let (cst, diagnostics) = parse_tokens(
        "a)b",
        &[
            (SyntaxKind::LiteralText, 0, 1),
            (SyntaxKind::CloseParen, 1, 2),
            (SyntaxKind::LiteralText, 2, 3),
        ],
    );

    insta::assert_snapshot!(cst, @r#"
    CompilationUnit
      Segment
        Literal
          LiteralText "a"
      Error
        CloseParen ")"
      Segment
        Literal
          LiteralText "b"
    "#);
    insta::assert_snapshot!(diagnostics, @"error at 1..2: Unexpected ')' in the route template.");
}

#[test]
fn several_stray_tokens() {
    let (_, diagnostics) = parse_tokens(
        "=:",
        &[(SyntaxKind::Equals, 0, 1), (SyntaxKind::Colon, 1, 2)],
    );

    insta::assert_snapshot!(diagnostics, @r"
    error at 0..1: Unexpected '=' in the route template.
    error at 1..2: Unexpected ':' in the route template.
    ");
}

#[test]
#[should_panic(expected = "route grammar dispatched on OpenBrace but token 0 is Slash")]
fn grammar_dispatch_mismatch_panics() {
    let tokens = vec![Token::new(
        SyntaxKind::Slash,
        TextRange::new(TextSize::from(0), TextSize::from(1)),
    )];
    let parser = Parser::new("/", tokens, RouteOptions::default());

    parser.assert_current(SyntaxKind::OpenBrace);
}

#[test]
#[should_panic(expected = "route parser made no progress in 256 lookaheads at token 0")]
fn lookahead_without_bump_panics() {
    let parser = Parser::new("", Vec::new(), RouteOptions::default());

    for _ in 0..=256 {
        parser.current();
    }
}
