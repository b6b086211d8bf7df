//! Show the flattened event stream of a query.

use std::path::PathBuf;

use searchql_lib::Event;

use super::run_common::{self, Limits};

pub struct EventsArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub json: bool,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: EventsArgs) {
    let source = run_common::load_query(args.query_path.as_deref(), args.query_text.as_deref());
    let query = run_common::parse_query(&source, args.limits);

    if !run_common::report_diagnostics(&query, args.query_path.as_deref(), false, args.color) {
        std::process::exit(1);
    }

    if args.json {
        let events: Vec<Event> = query.events().collect();
        let json = serde_json::to_string_pretty(&events).expect("events are valid JSON");
        println!("{}", json);
        return;
    }

    print!("{}", query.printer().only_events(true).dump());
}
