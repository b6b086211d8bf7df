//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Logging and color flags shared by every command.
fn with_output_args(cmd: Command) -> Command {
    cmd.arg(color_arg()).arg(verbose_arg())
}

/// Query input and parser limits.
fn with_query_args(cmd: Command) -> Command {
    cmd.arg(query_path_arg())
        .arg(query_text_arg())
        .arg(fuel_arg())
        .arg(max_depth_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("searchql")
        .about("Compile one search query language to many full-text backends")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(events_command())
        .subcommand(backends_command())
}

/// Compile a query for a backend.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a query into a backend's native syntax")
        .override_usage(
            "\
  searchql compile <QUERY> -b <BACKEND>
  searchql compile -q <TEXT> -b <BACKEND> [--split|--inline] [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  searchql compile -q 'kansas sports' -b mysql       # +kansas +sports
  searchql compile -q 'django title:intro' -b pg     # fields split out (backend default)
  searchql compile -q 'django title:intro' -b solr --split --json
  echo 'video or pictures' | searchql compile - -b xapian"#,
        )
        .arg(backend_arg())
        .arg(split_arg())
        .arg(inline_arg())
        .arg(json_arg());

    with_output_args(with_query_args(cmd))
}

/// Validate a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  searchql check <QUERY>
  searchql check -q <TEXT> [--strict]",
        )
        .after_help(
            r#"EXAMPLES:
  searchql check query.txt            # errors only
  searchql check -q 'a OR b' --strict # warnings fail too"#,
        )
        .arg(strict_arg());

    with_output_args(with_query_args(cmd))
}

/// Show the parse tree of a query.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the parse tree of a query")
        .override_usage(
            "\
  searchql ast <QUERY> [--raw]
  searchql ast -q <TEXT> [--raw] [--spans]",
        )
        .arg(raw_arg())
        .arg(spans_arg());

    with_output_args(with_query_args(cmd))
}

/// Show the event stream of a query.
pub fn events_command() -> Command {
    let cmd = Command::new("events")
        .about("Show the flattened event stream of a query")
        .override_usage(
            "\
  searchql events <QUERY> [--json]
  searchql events -q <TEXT> [--json]",
        )
        .arg(json_arg());

    with_output_args(with_query_args(cmd))
}

/// List supported backends.
pub fn backends_command() -> Command {
    with_output_args(Command::new("backends").about("List supported backends with aliases"))
}
