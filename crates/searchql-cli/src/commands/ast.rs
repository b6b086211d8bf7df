//! Show the parse tree of a query.

use std::path::PathBuf;

use super::run_common::{self, Limits};

pub struct AstArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = run_common::load_query(args.query_path.as_deref(), args.query_text.as_deref());
    let query = run_common::parse_query(&source, args.limits);

    // Diagnostics go to stderr; the tree is printed even for invalid queries.
    run_common::report_diagnostics(&query, args.query_path.as_deref(), false, args.color);

    let output = query
        .printer()
        .raw(args.raw)
        .with_trivia(args.raw)
        .with_spans(args.spans)
        .dump();
    print!("{}", output);
}
