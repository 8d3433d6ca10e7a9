use crate::RouteTree;

fn dump_parameters(tree: &RouteTree) -> String {
    let mut out = String::new();
    for p in tree.parameters() {
        out.push_str(&p.name);
        if p.is_catch_all {
            out.push_str(if p.encode_slashes { " catch-all" } else { " catch-all(raw)" });
        }
        if p.is_optional {
            out.push_str(" optional");
        }
        if let Some(default) = &p.default_value {
            out.push_str(&format!(" default={default:?}"));
        }
        if !p.policies.is_empty() {
            out.push_str(&format!(" policies={:?}", p.policies));
        }
        out.push('\n');
    }
    out
}

#[test]
fn simple_parameter() {
    let tree = RouteTree::expect_valid("{id}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          ParameterName
            ParameterNameText "id"
          CloseBrace "}"
    "#);
    insta::assert_snapshot!(dump_parameters(&tree), @"id");
}

#[test]
fn full_parameter() {
    let tree = RouteTree::expect_valid("{*path:length(1,5)=x}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          CatchAllMarker
            Asterisk "*"
          ParameterName
            ParameterNameText "path"
          ParameterPolicy
            Colon ":"
            PolicyFragment
              PolicyFragmentText "length"
            PolicyFragmentEscaped
              OpenParen "("
              PolicyFragmentText "1,5"
              CloseParen ")"
          DefaultValue
            Equals "="
            DefaultValueText "x"
          CloseBrace "}"
    "#);
    insta::assert_snapshot!(dump_parameters(&tree), @r#"path catch-all default="x" policies=[":length(1,5)"]"#);
}

#[test]
fn catch_all_forms() {
    let tree = RouteTree::expect_valid("{*a}");
    insta::assert_snapshot!(dump_parameters(&tree), @"a catch-all");

    let tree = RouteTree::expect_valid("{**a}");
    insta::assert_snapshot!(dump_parameters(&tree), @"a catch-all(raw)");
}

#[test]
fn colon_can_start_a_catch_all_name() {
    let tree = RouteTree::expect_valid("{**:int}");

    insta::assert_snapshot!(dump_parameters(&tree), @":int catch-all(raw)");
}

#[test]
fn colon_can_start_a_name() {
    let tree = RouteTree::expect_valid("{:hi}");

    insta::assert_snapshot!(dump_parameters(&tree), @":hi");
}

#[test]
fn policies() {
    let tree = RouteTree::expect_valid("{a:foo(wee)}/{b:foo()}/{c:foo:bar}/{d:foo(hi)bar}");

    insta::assert_snapshot!(dump_parameters(&tree), @r#"
    a policies=[":foo(wee)"]
    b policies=[":foo()"]
    c policies=[":foo", ":bar"]
    d policies=[":foo(hi)bar"]
    "#);
}

#[test]
fn policy_with_unclosed_argument() {
    let tree = RouteTree::expect_valid("{id:foo(hi}");

    insta::assert_snapshot!(dump_parameters(&tree), @r#"id policies=[":foo(hi"]"#);
}

#[test]
fn policy_with_escaped_braces_and_no_argument_close() {
    let tree = RouteTree::expect_valid(r"{ssn:regex(^\d{{3}}-\d{{2}}-\d{{4}");

    insta::assert_snapshot!(dump_parameters(&tree), @r#"ssn policies=[":regex(^\\d{{3}}-\\d{{2}}-\\d{{4"]"#);
}

#[test]
fn policy_argument_with_unescaped_brace() {
    let tree = RouteTree::parse(r"{ssn:regex(^\d{3}})}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 11..18: In a route parameter, '{' and '}' must be escaped with '{{' and '}}'.");
}

#[test]
fn default_values() {
    let tree = RouteTree::expect_valid("{controller=Home}/{rest=Home=Controller:int()}");

    insta::assert_snapshot!(dump_parameters(&tree), @r#"
    controller default="Home"
    rest default="Home=Controller:int()"
    "#);
}

#[test]
fn empty_default_value() {
    let tree = RouteTree::expect_valid("{a=}");

    insta::assert_snapshot!(dump_parameters(&tree), @r#"a default="""#);
}

#[test]
fn escaped_braces_in_name() {
    let tree = RouteTree::parse(r"{3}}-\d{{2}}-\d{{4}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @r"error at 1..18: The route parameter name '3}-\d{2}-\d{4' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter.");
}

#[test]
fn question_mark_inside_name() {
    let tree = RouteTree::parse("{id?}}}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @"InvalidParameterName 1..6");
    assert_eq!(tree.diagnostics().as_slice()[0].args(), ["id?}"]);
}

#[test]
fn name_then_missing_brace() {
    let tree = RouteTree::parse("{2}}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @r"
    InvalidParameterName 1..4
    IncompleteParameter 4..4
    ");
}

#[test]
fn lone_open_brace_in_name() {
    insta::assert_snapshot!(RouteTree::parse("{a{b}", Default::default()).dump_diagnostic_kinds(), @"UnescapedBrace 1..4");
    insta::assert_snapshot!(RouteTree::parse("{a/{b}", Default::default()).dump_diagnostic_kinds(), @"UnescapedBrace 1..5");
    insta::assert_snapshot!(RouteTree::parse("a{foob{bar}c", Default::default()).dump_diagnostic_kinds(), @"UnescapedBrace 2..10");
}

#[test]
fn empty_names() {
    let tree = RouteTree::parse("{}", Default::default());
    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 1..2: The route parameter name '' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter.");
    assert!(tree.parameters().is_empty());

    insta::assert_snapshot!(RouteTree::parse("{?}", Default::default()).dump_diagnostic_kinds(), @"InvalidParameterName 1..2");
    insta::assert_snapshot!(RouteTree::parse("{*}", Default::default()).dump_diagnostic_kinds(), @"InvalidParameterName 2..3");
    insta::assert_snapshot!(RouteTree::parse("{**}", Default::default()).dump_diagnostic_kinds(), @"InvalidParameterName 3..4");
}

#[test]
fn empty_name_keeps_name_node() {
    let tree = RouteTree::parse("{}", Default::default());

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Parameter
          OpenBrace "{"
          ParameterName
          CloseBrace "}"
    "#);
    insta::assert_snapshot!(tree.dump_ast(), @r"
    Route
      Segment
        Parameter (missing)
    ");
}

#[test]
fn catch_all_cannot_be_optional() {
    let tree = RouteTree::parse("{*a?}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 0..5: A catch-all parameter cannot be marked optional.");
}

#[test]
fn optional_cannot_have_default() {
    let tree = RouteTree::parse("{id=Home?}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 0..10: An optional parameter cannot have default value.");
}

#[test]
fn parameter_name_case_is_kept() {
    let tree = RouteTree::expect_valid("{UserId}");

    assert_eq!(tree.parameters()[0].name, "UserId");
    assert!(tree.parameter_named("userid").is_some());
}
