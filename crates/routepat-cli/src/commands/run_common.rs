//! Helpers shared by the template commands.

use std::path::Path;

use routepat_lib::Diagnostics;

use super::template_loader::{Template, load_templates};

/// Load templates from arguments or a file, exiting on failure.
pub fn load_templates_or_exit(templates: &[String], template_file: Option<&Path>) -> Vec<Template> {
    match load_templates(templates, template_file) {
        Ok(templates) => templates,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// Annotated snippet report for one template, labelled with its origin when known.
pub fn render_diagnostics(diagnostics: &Diagnostics, template: &Template, color: bool) -> String {
    let mut printer = diagnostics.printer().source(&template.text).colored(color);
    if let Some(origin) = &template.origin {
        printer = printer.path(origin);
    }
    printer.render()
}
