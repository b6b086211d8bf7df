//! Shared logic for commands that parse a query.

use std::path::Path;

use searchql_lib::{Query, QueryBuilder};

use super::query_loader::load_query_source;

/// Parser limits from `--fuel` and `--max-depth`.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    pub fuel: u32,
    pub max_depth: u32,
}

/// Load query text or exit with an error message.
pub fn load_query(query_path: Option<&Path>, query_text: Option<&str>) -> String {
    load_query_source(query_path, query_text).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}

/// Parse with the given limits, exiting if a limit trips.
pub fn parse_query(source: &str, limits: Limits) -> Query<'_> {
    QueryBuilder::new(source)
        .with_exec_fuel(Some(limits.fuel))
        .with_recursion_fuel(Some(limits.max_depth))
        .parse()
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        })
}

/// Print diagnostics to stderr. Returns `true` if the query may be used.
pub fn report_diagnostics(query: &Query<'_>, path: Option<&Path>, strict: bool, color: bool) -> bool {
    let diagnostics = query.diagnostics();
    let ok = if strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        query.is_valid()
    };

    if !diagnostics.is_empty() {
        let path = path
            .filter(|p| p.as_os_str() != "-")
            .map(|p| p.to_string_lossy().into_owned());
        let mut printer = diagnostics.filtered_printer(query.source()).colored(color);
        if let Some(path) = path.as_deref() {
            printer = printer.path(path);
        }
        eprint!("{}", printer.render());
    }

    ok
}
