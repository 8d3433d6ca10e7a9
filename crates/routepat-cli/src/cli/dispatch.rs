//! Extraction of typed parameters from `ArgMatches`.
//!
//! Each `*Params` struct converts into the matching `commands::*::*Args`.

use std::path::PathBuf;

use clap::ArgMatches;
use routepat_lib::RouteDialect;
use tracing::level_filters::LevelFilter;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::params::ParamsArgs;

pub struct CheckParams {
    pub templates: Vec<String>,
    pub template_file: Option<PathBuf>,
    pub dialect: RouteDialect,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            templates: parse_templates(m),
            template_file: m.get_one::<PathBuf>("template_file").cloned(),
            dialect: parse_dialect(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            templates: p.templates,
            template_file: p.template_file,
            options: p.dialect.options(),
            strict: p.strict,
            color: p.color.colors_diagnostics(),
        }
    }
}

pub struct AstParams {
    pub templates: Vec<String>,
    pub template_file: Option<PathBuf>,
    pub dialect: RouteDialect,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            templates: parse_templates(m),
            template_file: m.get_one::<PathBuf>("template_file").cloned(),
            dialect: parse_dialect(m),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            templates: p.templates,
            template_file: p.template_file,
            options: p.dialect.options(),
            spans: p.spans,
            color: p.color.colors_diagnostics(),
        }
    }
}

pub struct ParamsParams {
    pub templates: Vec<String>,
    pub template_file: Option<PathBuf>,
    pub dialect: RouteDialect,
    pub json: bool,
    pub bind: Vec<String>,
    pub color: ColorChoice,
}

impl ParamsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            templates: parse_templates(m),
            template_file: m.get_one::<PathBuf>("template_file").cloned(),
            dialect: parse_dialect(m),
            json: m.get_flag("json"),
            bind: m
                .get_many::<String>("bind")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<ParamsParams> for ParamsArgs {
    fn from(p: ParamsParams) -> Self {
        Self {
            templates: p.templates,
            template_file: p.template_file,
            options: p.dialect.options(),
            json: p.json,
            bind: p.bind,
            color: p.color.colors_diagnostics(),
        }
    }
}

/// Logging flags, available on every subcommand.
pub struct LogParams {
    pub verbose: u8,
    pub quiet: bool,
}

impl LogParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            verbose: m.get_count("verbose"),
            quiet: m.get_flag("quiet"),
        }
    }

    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn parse_templates(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("templates")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn parse_dialect(m: &ArgMatches) -> RouteDialect {
    m.get_one::<RouteDialect>("dialect").copied().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    ColorChoice::from_flag(m.get_one::<String>("color").map(String::as_str))
}
