use crate::analyze::{self, collect_parameters};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser;
use crate::{RouteOptions, RouteTree};

#[test]
fn collects_parameters_in_order() {
    let (parse, _) = parser::parse("{controller=Home}/{action}/{id:int?}", RouteOptions::default());
    let parameters = collect_parameters(&parse.root());

    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["controller", "action", "id"]);
    assert_eq!(parameters[2].policy_names().collect::<Vec<_>>(), ["int"]);
}

#[test]
fn skips_parameters_without_a_name() {
    let (parse, _) = parser::parse("{}/{a}/{*}", RouteOptions::default());
    let parameters = collect_parameters(&parse.root());

    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters[0].name, "a");
}

#[test]
fn parameter_spans() {
    let tree = RouteTree::expect_valid("a/{*rest:int}");
    let rest = &tree.parameters()[0];

    assert_eq!(&tree.text()[rest.span], "{*rest:int}");
    assert_eq!(&tree.text()[rest.name_span], "rest");
}

#[test]
fn policy_names_drop_arguments() {
    let tree = RouteTree::expect_valid("{a:minlength(2):regex(^x$):}");

    let names: Vec<&str> = tree.parameters()[0].policy_names().collect();
    assert_eq!(names, ["minlength", "regex"]);
}

#[test]
fn parameters_serialize_without_spans() {
    let tree = RouteTree::expect_valid("{**path:int=5}");
    let json = serde_json::to_string_pretty(tree.parameters()).unwrap();

    insta::assert_snapshot!(json, @r#"
    [
      {
        "name": "path",
        "is_catch_all": true,
        "is_optional": false,
        "encode_slashes": false,
        "default_value": "5",
        "policies": [
          ":int"
        ]
      }
    ]
    "#);
}

#[test]
fn analyze_appends_to_existing_diagnostics() {
    let (parse, mut diagnostics) = parser::parse("{a}/{a}", RouteOptions::default());
    assert!(diagnostics.is_empty());

    let parameters = analyze::analyze(&parse.root(), &RouteOptions::default(), &mut diagnostics);

    assert_eq!(parameters.len(), 2);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.as_slice()[0].kind(),
        DiagnosticKind::DuplicateParameter
    );
}

#[test]
fn duplicate_names_compare_case_insensitively() {
    let tree = RouteTree::parse("{Id}/{iD}/{ID}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @r"
    DuplicateParameter 5..9
    DuplicateParameter 10..14
    ");
    let related: Vec<String> = tree
        .diagnostics()
        .iter()
        .flat_map(|d| d.related().iter().map(|r| r.message().to_string()))
        .collect();
    assert_eq!(related, ["'Id' first declared here", "'Id' first declared here"]);
}

#[test]
fn duplicate_detection_uses_decoded_names() {
    let tree = RouteTree::parse("{a}}}/{a}}}", Default::default());

    assert!(
        tree.diagnostics()
            .iter()
            .any(|d| d.kind() == DiagnosticKind::DuplicateParameter)
    );
}

#[test]
fn catch_all_before_parameter_in_same_segment() {
    let tree = RouteTree::parse("{*a}-{b}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @r"
    CatchAllInComplexSegment 0..4
    CatchAllNotLast 0..4
    ");
}

#[test]
fn catch_all_not_last_is_reported_once() {
    let tree = RouteTree::parse("{*a}/{b}/{c}", Default::default());

    insta::assert_snapshot!(tree.dump_diagnostic_kinds(), @"CatchAllNotLast 0..4");
}

#[test]
fn optional_placement_in_single_section_segments() {
    RouteTree::expect_valid("{a?}/{b?}");
}

#[test]
fn optional_with_policy_after_period() {
    RouteTree::expect_valid("{name}.{ext:alpha?}");
}

#[test]
fn optional_not_at_end_names_following_section() {
    let tree = RouteTree::parse("{a?}{b}", Default::default());

    let diagnostic = tree
        .diagnostics()
        .iter()
        .find(|d| d.kind() == DiagnosticKind::OptionalNotAtEndOfSegment)
        .unwrap();
    assert_eq!(diagnostic.args(), ["{a?}{b}", "a", "{b}"]);
}

#[test]
fn required_after_optional_reports_segment_text() {
    let tree = RouteTree::parse("{a?}/b{c}", RouteOptions::components_route());

    let message = tree
        .diagnostics()
        .iter()
        .find(|d| d.kind() == DiagnosticKind::RequiredAfterOptional)
        .map(|d| d.message());
    insta::assert_snapshot!(message.unwrap_or_default(), @"The segment 'b{c}' cannot follow an optional parameter. Only optional or catch-all parameters can appear after an optional parameter.");
}

#[test]
fn validate_runs_on_its_own() {
    let (parse, _) = parser::parse("{a?}/{b}", RouteOptions::default());
    let root = parse.root();
    let parameters = collect_parameters(&root);

    let mut relaxed = Diagnostics::new();
    analyze::validate(&root, &parameters, &RouteOptions::default(), &mut relaxed);
    assert!(relaxed.is_empty());

    let mut strict = Diagnostics::new();
    let options = RouteOptions {
        allow_required_after_optional: false,
        ..RouteOptions::default()
    };
    analyze::validate(&root, &parameters, &options, &mut strict);
    assert_eq!(strict.len(), 1);
}
