mod cli;
mod commands;
mod logger;

use cli::{AstParams, BackendsParams, CheckParams, CompileParams, EventsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    if let Some((_, m)) = matches.subcommand() {
        logger::init_logger(m.get_count("verbose"));
    }

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("events", m)) => {
            let params = EventsParams::from_matches(m);
            commands::events::run(params.into());
        }
        Some(("backends", m)) => {
            let _params = BackendsParams::from_matches(m);
            commands::backends::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
