use rowan::TextSize;

use crate::{RouteOptions, RouteTree};

const TEMPLATES: &[&str] = &[
    "",
    "/",
    "api/{controller=Home}/{action=Index}/{id?}",
    "{*path}",
    "{**path:regex(^a(b)c$)}",
    "{a}{b}{c?}",
    "{{{a}}}",
    "{",
    "}",
    "{}",
    "{?}",
    "{id:foo(hi",
    "{ssn:regex(^\\d{3}})}",
    "a{foob{bar}c",
    "~~/a//b",
    "[]/[x/[[y]]]",
    "{a=b?}",
    "{*a?}/{b}",
    "((()))",
    "{a:(}",
    "{a:)}",
    "{=}",
    "?",
    "{id}}}",
];

fn dialects() -> [RouteOptions; 3] {
    [
        RouteOptions::default(),
        RouteOptions::mvc_attribute_route(),
        RouteOptions::components_route(),
    ]
}

#[test]
fn tree_text_reproduces_input() {
    for options in dialects() {
        for &text in TEMPLATES {
            let tree = RouteTree::parse(text, options);
            assert_eq!(
                tree.syntax().text().to_string(),
                text,
                "{text:?} in {}",
                options.dialect
            );
        }
    }
}

#[test]
fn diagnostics_stay_within_input() {
    for options in dialects() {
        for &text in TEMPLATES {
            let tree = RouteTree::parse(text, options);
            let end = TextSize::of(text);
            for diagnostic in tree.diagnostics().iter() {
                assert!(
                    diagnostic.range().end() <= end,
                    "{text:?}: {diagnostic} is out of bounds"
                );
            }
        }
    }
}

#[test]
fn reparsing_is_stable() {
    for options in dialects() {
        for &text in TEMPLATES {
            let first = RouteTree::parse(text, options);
            let second = RouteTree::parse(&first.syntax().text().to_string(), options);
            assert_eq!(first.dump_cst(), second.dump_cst());
            assert_eq!(first.dump_diagnostics(), second.dump_diagnostics());
            assert_eq!(first.parameters(), second.parameters());
        }
    }
}

#[test]
fn parameters_are_in_document_order() {
    let tree = RouteTree::parse("{c}/{a}.{b}/x{d}", Default::default());
    let names: Vec<&str> = tree.parameters().iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, ["c", "a", "b", "d"]);
}
