mod cli;
mod commands;

use clap::ArgMatches;
use cli::{AstParams, CheckParams, LogParams, ParamsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            init_logging(m);
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            init_logging(m);
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("params", m)) => {
            init_logging(m);
            let params = ParamsParams::from_matches(m);
            commands::params::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Install a stderr fmt subscriber at the level selected by `-v`/`--quiet`.
fn init_logging(m: &ArgMatches) {
    let level = LogParams::from_matches(m).level();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
