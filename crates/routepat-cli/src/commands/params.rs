use std::fmt::Write;
use std::path::PathBuf;

use routepat_lib::binding::resolve;
use routepat_lib::{BindingCandidate, BindingResolution, RouteOptions, RouteParameter, RouteTree};
use serde::Serialize;

use super::run_common::{load_templates_or_exit, render_diagnostics};

pub struct ParamsArgs {
    pub templates: Vec<String>,
    pub template_file: Option<PathBuf>,
    pub options: RouteOptions,
    pub json: bool,
    /// Raw `--bind` values, `NAME[:TYPE][=EXPLICIT]`.
    pub bind: Vec<String>,
    pub color: bool,
}

#[derive(Serialize)]
pub struct TemplateReport<'a> {
    pub template: &'a str,
    pub valid: bool,
    pub parameters: Vec<ParameterReport<'a>>,
}

#[derive(Serialize)]
pub struct ParameterReport<'a> {
    #[serde(flatten)]
    pub parameter: &'a RouteParameter,
    pub start: u32,
    pub end: u32,
    /// Present only when candidates were given; `null` marks an unbound parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_to: Option<Option<&'a str>>,
}

pub fn run(args: ParamsArgs) {
    let templates = load_templates_or_exit(&args.templates, args.template_file.as_deref());

    let candidates = match parse_bindings(&args.bind) {
        Ok(candidates) => candidates,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let trees: Vec<RouteTree> = templates
        .iter()
        .map(|t| RouteTree::parse(&t.text, args.options))
        .collect();

    let mut failed = false;
    let mut reports = Vec::with_capacity(trees.len());
    let many = templates.len() > 1;

    for (template, tree) in templates.iter().zip(&trees) {
        let resolution =
            (!candidates.is_empty()).then(|| resolve(tree.parameters(), &candidates));

        let mut diagnostics = tree.diagnostics().clone();
        if let Some(resolution) = &resolution {
            diagnostics.extend(resolution.unused_diagnostics());
            diagnostics.extend(resolution.constraint_hints());
        }
        if !diagnostics.is_empty() {
            eprint!("{}", render_diagnostics(&diagnostics, template, args.color));
        }
        failed |= diagnostics.has_errors();

        if args.json {
            reports.push(template_report(tree, resolution.as_ref()));
        } else {
            if many {
                println!("{}", super::ast::header(template));
            }
            print!("{}", format_parameters(tree, resolution.as_ref()));
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Parse a `--bind` value: `NAME`, `NAME:TYPE`, `NAME=EXPLICIT`, or `NAME:TYPE=EXPLICIT`.
pub fn parse_binding(value: &str) -> Result<BindingCandidate, String> {
    let (declaration, explicit) = match value.split_once('=') {
        Some((declaration, explicit)) => (declaration, Some(explicit.trim())),
        None => (value, None),
    };
    let (name, type_name) = match declaration.split_once(':') {
        Some((name, type_name)) => (name.trim(), Some(type_name.trim())),
        None => (declaration.trim(), None),
    };

    if name.is_empty() {
        return Err(format!("invalid binding '{}': missing parameter name", value));
    }

    let mut candidate = BindingCandidate::new(name);
    match type_name {
        Some("") => return Err(format!("invalid binding '{}': empty type", value)),
        Some(type_name) => candidate = candidate.with_type(type_name),
        None => {}
    }
    match explicit {
        Some("") => return Err(format!("invalid binding '{}': empty route name", value)),
        Some(explicit) => candidate = candidate.with_explicit_name(explicit),
        None => {}
    }
    Ok(candidate)
}

pub fn parse_bindings(values: &[String]) -> Result<Vec<BindingCandidate>, String> {
    values.iter().map(|s| parse_binding(s)).collect()
}

/// One line per parameter, with its binding when candidates were resolved.
pub fn format_parameters(tree: &RouteTree, resolution: Option<&BindingResolution<'_>>) -> String {
    let mut out = String::new();
    for (i, p) in tree.parameters().iter().enumerate() {
        out.push_str(&p.name);
        if p.is_catch_all {
            out.push_str(if p.encode_slashes { " catch-all" } else { " catch-all(raw)" });
        }
        if p.is_optional {
            out.push_str(" optional");
        }
        if let Some(default) = &p.default_value {
            let _ = write!(out, " default={:?}", default);
        }
        for policy in &p.policies {
            out.push(' ');
            out.push_str(policy);
        }
        if let Some(resolution) = resolution {
            match resolution.candidate_for(i) {
                Some(c) => {
                    let _ = write!(out, " -> {}", c.name);
                }
                None => out.push_str(" -> (unbound)"),
            }
        }
        out.push('\n');
    }
    out
}

pub fn template_report<'a>(
    tree: &'a RouteTree,
    resolution: Option<&BindingResolution<'a>>,
) -> TemplateReport<'a> {
    let parameters = tree
        .parameters()
        .iter()
        .enumerate()
        .map(|(i, parameter)| ParameterReport {
            parameter,
            start: parameter.span.start().into(),
            end: parameter.span.end().into(),
            bound_to: resolution.map(|r| r.candidate_for(i).map(|c| c.name.as_str())),
        })
        .collect();

    TemplateReport {
        template: tree.text(),
        valid: tree.is_valid(),
        parameters,
    }
}
