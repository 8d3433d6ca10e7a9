use crate::RouteTree;

#[test]
fn missing_close_brace() {
    let tree = RouteTree::parse("{id", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 3..3: There is an incomplete parameter in the route template. Check that each '{' character has a matching '}' character.");
    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          ParameterName
            ParameterNameText "id"
    "#);
}

#[test]
fn lone_open_brace() {
    let tree = RouteTree::parse("{", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @"IncompleteParameter 1..1");
    assert!(tree.parameters().is_empty());
}

#[test]
fn unclosed_parameter_parts() {
    insta::assert_snapshot!(RouteTree::parse("{id:int", Default::default()).dump_diagnostic_kinds(), @"IncompleteParameter 7..7");
    insta::assert_snapshot!(RouteTree::parse("{id=", Default::default()).dump_diagnostic_kinds(), @"IncompleteParameter 4..4");
    insta::assert_snapshot!(RouteTree::parse("{id?", Default::default()).dump_diagnostic_kinds(), @"IncompleteParameter 4..4");
    insta::assert_snapshot!(RouteTree::parse("{id:foo(hi", Default::default()).dump_diagnostic_kinds(), @"IncompleteParameter 10..10");
}

#[test]
fn unclosed_parameter_after_segments() {
    let tree = RouteTree::parse("a/{b:int", Default::default());

    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Literal "a"
      Segment
        Parameter b:int (unclosed)
    "#);
    assert_eq!(tree.parameters().len(), 1);
    assert_eq!(tree.parameters()[0].policies, [":int"]);
}

#[test]
fn unclosed_optional_parameter_is_still_optional() {
    let tree = RouteTree::parse("{id?", Default::default());

    assert!(tree.parameters()[0].is_optional);
}
