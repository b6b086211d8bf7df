//! Compile a query into a backend's native syntax.

use std::path::PathBuf;

use log::debug;
use searchql_lib::{Backend, CompiledQuery, FieldMap, FieldMode};

use super::run_common::{self, Limits};

pub struct CompileArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub backend: String,
    /// `None` uses the backend's declared field policy.
    pub mode: Option<FieldMode>,
    pub json: bool,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: CompileArgs) {
    let backend: Backend = args.backend.parse().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        eprintln!();
        eprintln!("Run 'searchql backends' for the full list.");
        std::process::exit(1);
    });

    let source = run_common::load_query(args.query_path.as_deref(), args.query_text.as_deref());
    let mode = args.mode.unwrap_or(backend.field_mode());
    debug!("compiling for {} ({:?} fields)", backend, mode);

    let compiled = if source.is_empty() {
        CompiledQuery::default()
    } else {
        let query = run_common::parse_query(&source, args.limits);
        if !run_common::report_diagnostics(&query, args.query_path.as_deref(), false, args.color) {
            std::process::exit(1);
        }

        let result = match mode {
            FieldMode::Inline => query.compile(backend).map(|query| CompiledQuery {
                query,
                fields: FieldMap::new(),
            }),
            FieldMode::Split => query
                .compile_split(backend)
                .map(|(query, fields)| CompiledQuery { query, fields }),
        };
        result.unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        })
    };

    print!("{}", format_output(&compiled, args.json));
}

fn format_output(compiled: &CompiledQuery, json: bool) -> String {
    if json {
        let mut out = serde_json::to_string_pretty(compiled).expect("compiled query is valid JSON");
        out.push('\n');
        return out;
    }

    let mut out = format!("{}\n", compiled.query);
    for (name, value) in &compiled.fields {
        out.push_str(&format!("{}: {}\n", name, value));
    }
    out
}
