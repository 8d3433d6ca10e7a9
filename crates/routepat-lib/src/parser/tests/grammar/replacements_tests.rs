use crate::{RouteOptions, RouteTree};

fn mvc(text: &str) -> RouteTree {
    RouteTree::parse(text, RouteOptions::mvc_attribute_route())
}

#[test]
fn replacement_token() {
    let tree = mvc("api/[controller]");

    assert!(tree.is_valid());
    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          LiteralText "api"
      Separator
        Slash "/"
      Segment
        Replacement
          OpenBracket "["
          ReplacementText "controller"
          CloseBracket "]"
    "#);
    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Literal "api"
      Segment
        Replacement controller
    "#);
}

#[test]
fn replacement_next_to_parameter() {
    let tree = mvc("[action]-{id}");

    assert!(tree.is_valid());
    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Replacement action
        Literal "-"
        Parameter id
    "#);
}

#[test]
fn brackets_are_literal_without_replacement() {
    let tree = RouteTree::expect_valid("[]/a]b");

    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Literal "[]"
      Segment
        Literal "a]b"
    "#);
}

#[test]
fn empty_replacement() {
    let tree = mvc("[]");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 0..2: An empty replacement token ('[]') is not allowed.");
}

#[test]
fn unclosed_replacement() {
    let tree = mvc("[name");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 0..5: A replacement token is not closed.");
    insta::assert_snapshot!(tree.dump_ast(), @r"
    Route
      Segment
        Replacement name (unclosed)
    ");
}

#[test]
fn lone_close_bracket() {
    let tree = mvc("a]b");

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 0..3: Token delimiters ('[', ']') are imbalanced.");
}

#[test]
fn escaped_brackets() {
    let tree = mvc("[[x]]");

    assert!(tree.is_valid());
    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Literal "[x]"
    "#);
}

#[test]
fn escaped_brackets_inside_replacement() {
    let tree = mvc("[a[[b]]c]");

    assert!(tree.is_valid());
    insta::assert_snapshot!(tree.dump_ast(), @r"
    Route
      Segment
        Replacement a[b]c
    ");
}
