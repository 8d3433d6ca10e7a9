use crate::RouteTree;

#[test]
fn empty_template() {
    let tree = RouteTree::expect_valid("");

    insta::assert_snapshot!(tree.dump_cst(), @"CompilationUnit");
}

#[test]
fn literal_segments() {
    let tree = RouteTree::expect_valid("hello/world");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          LiteralText "hello"
      Separator
        Slash "/"
      Segment
        Literal
          LiteralText "world"
    "#);
}

#[test]
fn literal_and_optional_parameter() {
    let tree = RouteTree::expect_valid("products/{id:int?}");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          LiteralText "products"
      Separator
        Slash "/"
      Segment
        Parameter
          OpenBrace "{"
          ParameterName
            ParameterNameText "id"
          ParameterPolicy
            Colon ":"
            PolicyFragment
              PolicyFragmentText "int"
          OptionalMarker
            QuestionMark "?"
          CloseBrace "}"
    "#);
    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Literal "products"
      Segment
        Parameter id:int?
    "#);
}

#[test]
fn leading_and_trailing_slashes() {
    let tree = RouteTree::expect_valid("/api/");

    insta::assert_snapshot!(tree.dump_cst_with_spans(), @r#"
    CompilationUnit [0..5]
      Separator [0..1]
        Slash [0..1] "/"
      Segment [1..4]
        Literal [1..4]
          LiteralText [1..4] "api"
      Separator [4..5]
        Slash [4..5] "/"
    "#);
}

#[test]
fn complex_segment() {
    let tree = RouteTree::expect_valid("a{foo}b{bar}c");

    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Literal "a"
        Parameter foo
        Literal "b"
        Parameter bar
        Literal "c"
    "#);
}

#[test]
fn file_name_segment() {
    let tree = RouteTree::expect_valid("{filename}.{ext?}");

    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Parameter filename
        Literal "."
        Parameter ext?
    "#);
}

#[test]
fn escaped_braces_in_literal() {
    let tree = RouteTree::expect_valid("{{2}}");

    insta::assert_snapshot!(tree.dump_ast(), @r#"
    Route
      Segment
        Literal "{2}"
    "#);
}

#[test]
fn application_root_prefix() {
    let tree = RouteTree::expect_valid("~/");

    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          LiteralText "~"
      Separator
        Slash "/"
    "#);
}

#[test]
fn tilde_without_slash() {
    let res = RouteTree::expect_invalid("~");

    insta::assert_snapshot!(res, @"error at 0..1: The route template cannot start with a '~' character unless followed by a '/'.");
}

#[test]
fn tilde_variants() {
    insta::assert_snapshot!(RouteTree::parse("~~", Default::default()).dump_diagnostic_kinds(), @"TildeNotFollowedBySlash 0..2");
    insta::assert_snapshot!(RouteTree::parse("~{id}", Default::default()).dump_diagnostic_kinds(), @"TildeNotFollowedBySlash 0..1");
    insta::assert_snapshot!(RouteTree::parse("~a/b", Default::default()).dump_diagnostic_kinds(), @"TildeNotFollowedBySlash 0..2");
}

#[test]
fn tilde_later_in_template() {
    RouteTree::expect_valid("a/~b");
}

#[test]
fn question_mark_in_literal() {
    let res = RouteTree::expect_invalid("hel?lo");

    insta::assert_snapshot!(res, @"error at 0..6: The literal section 'hel?lo' is invalid. Literal sections cannot contain the '?' character.");
}

#[test]
fn consecutive_separators() {
    let tree = RouteTree::parse("a//b", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @"ConsecutiveSeparators 2..3");
    insta::assert_snapshot!(tree.dump_cst(), @r#"
    CompilationUnit
      Segment
        Literal
          LiteralText "a"
      Separator
        Slash "/"
      Separator
        Slash "/"
      Segment
        Literal
          LiteralText "b"
    "#);
}

#[test]
fn three_slashes_report_each_extra_one() {
    let tree = RouteTree::parse("a///b", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @r"
    ConsecutiveSeparators 2..3
    ConsecutiveSeparators 3..4
    ");
}

#[test]
fn lone_close_brace_in_literal() {
    let res = RouteTree::expect_invalid(r"-\d{{2}}-\d{{4}");

    insta::assert_snapshot!(res, @"error at 0..15: There is an incomplete parameter in the route template. Check that each '{' character has a matching '}' character.");
}

#[test]
fn duplicate_parameter() {
    let tree = RouteTree::parse("{a}/{A}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 4..7: The route parameter name 'A' appears more than one time in the route template.");
    let related = tree.diagnostics().iter().next().map(|d| d.related().to_vec());
    let related = related.unwrap_or_default();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].message(), "'a' first declared here");
    assert_eq!(related[0].range(), rowan::TextRange::new(0.into(), 3.into()));
}

#[test]
fn duplicate_parameter_across_complex_segment() {
    let tree = RouteTree::parse("{id}.{ID}/{id}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @r"
    DuplicateParameter 5..9
    DuplicateParameter 10..14
    ");
}

#[test]
fn catch_all_not_last() {
    let tree = RouteTree::parse("{*a}/{b}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @"CatchAllNotLast 0..4");
}

#[test]
fn catch_all_followed_by_literal_segment() {
    let tree = RouteTree::parse("{*a}/b", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @"CatchAllNotLast 0..4");
}

#[test]
fn catch_all_with_trailing_slash() {
    RouteTree::expect_valid("files/{*path}/");
}

#[test]
fn catch_all_in_complex_segment() {
    let tree = RouteTree::parse("a{*a}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @"CatchAllInComplexSegment 1..5");
}

#[test]
fn consecutive_parameters() {
    let tree = RouteTree::parse("{a}{b}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 3..6: A path segment cannot contain two consecutive parameters. They must be separated by a '/' or by a literal string.");
}

#[test]
fn optional_after_parameter() {
    let tree = RouteTree::parse("{p1}{p2?}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 4..9: In the segment '{p1}{p2?}', the optional parameter 'p2' is preceded by an invalid segment '{p1}'. Only a period (.) can precede an optional parameter.");
}

#[test]
fn optional_after_dash() {
    let tree = RouteTree::parse("{p1}-{p2?}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @"OptionalPrecededByInvalidSegment 5..10");
}

#[test]
fn optional_after_period() {
    RouteTree::expect_valid("{p1}.{p2?}");
}

#[test]
fn optional_not_at_end_of_segment() {
    let tree = RouteTree::parse("{a?}-x", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 0..4: An optional parameter must be at the end of the segment. In the segment '{a?}-x', optional parameter 'a' is followed by '-x'.");
}

#[test]
fn three_parameters_in_a_row() {
    let tree = RouteTree::parse("{a}{b}{c?}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @r"
    ConsecutiveParameters 3..6
    OptionalPrecededByInvalidSegment 6..10
    ");
}
