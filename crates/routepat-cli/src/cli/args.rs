//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use routepat_lib::RouteDialect;

/// Route templates (positional, repeatable).
pub fn templates_arg() -> Arg {
    Arg::new("templates")
        .value_name("TEMPLATE")
        .num_args(1..)
        .action(ArgAction::Append)
        .help("Route templates to parse")
}

/// A single route template (positional).
pub fn template_arg() -> Arg {
    Arg::new("templates")
        .value_name("TEMPLATE")
        .help("Route template to parse")
}

/// Template file, one template per line (--template-file).
pub fn template_file_arg() -> Arg {
    Arg::new("template_file")
        .short('f')
        .long("template-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("templates")
        .help("Read templates from a file, one per line ('-' for stdin)")
}

/// Grammar dialect (-d/--dialect).
pub fn dialect_arg() -> Arg {
    Arg::new("dialect")
        .short('d')
        .long("dialect")
        .value_name("DIALECT")
        .default_value("default")
        .value_parser(parse_dialect)
        .help("Route dialect: default, mvc, or components")
}

fn parse_dialect(s: &str) -> Result<RouteDialect, routepat_lib::Error> {
    s.parse()
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print parameters as JSON")
}

/// Handler parameter candidates (--bind).
pub fn bind_arg() -> Arg {
    Arg::new("bind")
        .short('b')
        .long("bind")
        .value_name("NAME[:TYPE][=EXPLICIT]")
        .action(ArgAction::Append)
        .help("Handler parameter to bind route parameters to (repeatable)")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
}

/// Silence logging (-q/--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Disable logging")
}
