use crate::{RouteOptions, RouteTree};

fn kinds(text: &str, options: RouteOptions) -> String {
    RouteTree::parse(text, options).dump_diagnostic_kinds()
}

#[test]
fn complex_segment_in_components_route() {
    let tree = RouteTree::parse("{a}.{b}", RouteOptions::components_route());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 0..7: The segment '{a}.{b}' is invalid. A path segment can contain only one literal or parameter in the 'components' route dialect.");
}

#[test]
fn optional_extension_in_components_route() {
    let components = RouteOptions::components_route;

    RouteTree::expect_valid_with("{name}.{ext?}", components());
    RouteTree::expect_valid_with("files/{name}.{ext?}", components());

    insta::assert_snapshot!(kinds("{name}.{ext}", components()), @"ComplexSegmentNotSupported 0..12");
    insta::assert_snapshot!(kinds("{name}-{ext?}", components()), @r"
    ComplexSegmentNotSupported 0..13
    OptionalPrecededByInvalidSegment 7..13
    ");
    assert!(kinds("a.{ext?}", components()).starts_with("ComplexSegmentNotSupported 0..8"));
}

#[test]
fn two_asterisk_catch_all_in_components_route() {
    let tree = RouteTree::parse("{**path}", RouteOptions::components_route());

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 1..3: The '**' catch-all form is not supported by the 'components' route dialect.");
}

#[test]
fn single_asterisk_catch_all_in_components_route() {
    RouteTree::expect_valid_with("files/{*path}", RouteOptions::components_route());
}

#[test]
fn default_value_in_components_route() {
    insta::assert_snapshot!(kinds("{id=5}", RouteOptions::components_route()), @"DefaultValueNotSupported 3..5");
}

#[test]
fn catch_all_disabled() {
    let tree = RouteTree::parse("{*a}", RouteOptions::default().with_catch_all(false));

    insta::assert_snapshot!(tree.dump_diagnostics(), @"error at 1..2: Catch-all parameters are not supported by the 'default' route dialect.");
}

#[test]
fn required_after_optional() {
    let components = RouteOptions::components_route;

    insta::assert_snapshot!(kinds("{a?}/{b}", components()), @"RequiredAfterOptional 5..8");
    insta::assert_snapshot!(kinds("{a?}/x", components()), @"RequiredAfterOptional 5..6");
    insta::assert_snapshot!(kinds("{a?}/{b}/{c}", components()), @"RequiredAfterOptional 5..8");
}

#[test]
fn optional_and_catch_all_may_follow_optional() {
    let components = RouteOptions::components_route;

    RouteTree::expect_valid_with("{a?}/{b?}", components());
    RouteTree::expect_valid_with("{a?}/{*rest}", components());
    RouteTree::expect_valid_with("{a?}/", components());
}

#[test]
fn required_after_optional_allowed_by_default() {
    RouteTree::expect_valid("{a?}/{b}");
}

#[test]
fn shared_productions_build_the_same_tree() {
    let text = "api/{id:int}/{*rest}";
    let default = RouteTree::expect_valid(text);
    let mvc = RouteTree::expect_valid_with(text, RouteOptions::mvc_attribute_route());
    let components = RouteTree::expect_valid_with(text, RouteOptions::components_route());

    assert_eq!(default.dump_cst(), mvc.dump_cst());
    assert_eq!(default.dump_cst(), components.dump_cst());
}
