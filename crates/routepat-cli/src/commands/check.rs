use std::path::PathBuf;

use routepat_lib::{RouteOptions, RouteTree};

use super::run_common::{load_templates_or_exit, render_diagnostics};
use super::template_loader::Template;

pub struct CheckArgs {
    pub templates: Vec<String>,
    pub template_file: Option<PathBuf>,
    pub options: RouteOptions,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let templates = load_templates_or_exit(&args.templates, args.template_file.as_deref());

    let mut failed = 0;
    for template in &templates {
        if let Some(report) = check_template(template, args.options, args.strict, args.color) {
            eprint!("{}", report);
            failed += 1;
        }
    }

    tracing::info!(checked = templates.len(), failed, "check finished");

    if failed > 0 {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Rendered diagnostics when the template fails the check, `None` when it passes.
pub fn check_template(
    template: &Template,
    options: RouteOptions,
    strict: bool,
    color: bool,
) -> Option<String> {
    let tree = RouteTree::parse(&template.text, options);
    let diagnostics = tree.diagnostics();

    let valid = if strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        tree.is_valid()
    };
    if valid {
        return None;
    }

    Some(render_diagnostics(diagnostics, template, color))
}
