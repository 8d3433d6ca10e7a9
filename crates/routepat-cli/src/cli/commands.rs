//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("routepat")
        .about("Check and inspect URL route templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .arg(quiet_arg())
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(params_command())
}

/// Validate route templates.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate route templates")
        .override_usage(
            "\
  routepat check <TEMPLATE>...
  routepat check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  routepat check 'products/{id:int?}'         # validate one template
  routepat check 'a/{b}' 'c/{*rest}'          # several at once
  routepat check -d mvc 'api/[controller]'    # attribute-route dialect
  routepat check -f routes.txt --strict       # one template per line
  cat routes.txt | routepat check -f -        # from stdin"#,
        )
        .arg(templates_arg())
        .arg(template_file_arg())
        .arg(dialect_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Show the syntax tree of a route template.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a route template")
        .override_usage(
            "\
  routepat ast <TEMPLATE>
  routepat ast -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  routepat ast 'a/{b:int}'                    # concrete syntax tree
  routepat ast 'a/{b:int}' --spans            # with offsets"#,
        )
        .arg(template_arg())
        .arg(template_file_arg())
        .arg(dialect_arg())
        .arg(spans_arg())
        .arg(color_arg())
}

/// List route parameters.
pub fn params_command() -> Command {
    Command::new("params")
        .about("List the parameters of a route template")
        .override_usage(
            "\
  routepat params <TEMPLATE> [--bind <NAME>]...
  routepat params -f <FILE> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  routepat params '{id:int}/{slug?}'                   # one line per parameter
  routepat params '{id:int}/{slug?}' --json            # JSON array
  routepat params '{id}/{page?}' -b id:int -b page     # binding status and hints
  routepat params '{id}' -b key=id                     # explicit route name"#,
        )
        .arg(template_arg())
        .arg(template_file_arg())
        .arg(dialect_arg())
        .arg(json_arg())
        .arg(bind_arg())
        .arg(color_arg())
}
