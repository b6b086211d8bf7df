use std::path::PathBuf;

use super::run_common::{self, Limits};

pub struct CheckArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub strict: bool,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = run_common::load_query(args.query_path.as_deref(), args.query_text.as_deref());
    let query = run_common::parse_query(&source, args.limits);

    if !run_common::report_diagnostics(&query, args.query_path.as_deref(), args.strict, args.color)
    {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
