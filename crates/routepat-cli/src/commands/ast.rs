use std::path::PathBuf;

use routepat_lib::{RouteOptions, RouteTree};

use super::run_common::{load_templates_or_exit, render_diagnostics};
use super::template_loader::Template;

pub struct AstArgs {
    pub templates: Vec<String>,
    pub template_file: Option<PathBuf>,
    pub options: RouteOptions,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let templates = load_templates_or_exit(&args.templates, args.template_file.as_deref());

    let many = templates.len() > 1;
    for (i, template) in templates.iter().enumerate() {
        let tree = RouteTree::parse(&template.text, args.options);

        // Diagnostics go to stderr; the tree is printed regardless.
        if !tree.diagnostics().is_empty() {
            eprint!("{}", render_diagnostics(tree.diagnostics(), template, args.color));
        }

        if many {
            if i > 0 {
                println!();
            }
            println!("{}", header(template));
        }
        print!("{}", tree.printer().raw(true).with_spans(args.spans).dump());
    }
}

/// Title line printed above each tree when several templates are dumped.
pub fn header(template: &Template) -> String {
    match &template.origin {
        Some(origin) => format!("# {} {}", origin, template.text),
        None => format!("# {}", template.text),
    }
}
