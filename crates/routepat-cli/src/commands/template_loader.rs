use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A route template and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// `file:line` for templates read from a file, `None` for inline ones.
    pub origin: Option<String>,
    pub text: String,
}

impl Template {
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            origin: None,
            text: text.into(),
        }
    }
}

pub fn load_templates(
    templates: &[String],
    template_file: Option<&Path>,
) -> Result<Vec<Template>, String> {
    if let Some(path) = template_file {
        let (name, content) = if path.as_os_str() == "-" {
            ("<stdin>".to_string(), read_stdin()?)
        } else {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
            (path.display().to_string(), content)
        };
        let loaded = split_lines(&name, &content);
        if loaded.is_empty() {
            return Err(format!("no templates found in '{}'", name));
        }
        return Ok(loaded);
    }

    if templates.is_empty() {
        return Err(
            "template is required: use positional arguments or -f/--template-file".to_string(),
        );
    }

    Ok(templates.iter().map(Template::inline).collect())
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

/// One template per non-empty line; surrounding whitespace is dropped.
pub fn split_lines(name: &str, content: &str) -> Vec<Template> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let text = line.trim();
            (!text.is_empty()).then(|| Template {
                origin: Some(format!("{}:{}", name, i + 1)),
                text: text.to_string(),
            })
        })
        .collect()
}
