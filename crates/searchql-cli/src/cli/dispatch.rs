//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use searchql_lib::FieldMode;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::events::EventsArgs;
use crate::commands::run_common::Limits;

pub struct CompileParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub backend: String,
    pub mode: Option<FieldMode>,
    pub json: bool,
    pub fuel: u32,
    pub max_depth: u32,
    pub color: ColorChoice,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let mode = if m.get_flag("split") {
            Some(FieldMode::Split)
        } else if m.get_flag("inline") {
            Some(FieldMode::Inline)
        } else {
            None
        };

        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            backend: m.get_one::<String>("backend").cloned().unwrap_or_default(),
            mode,
            json: m.get_flag("json"),
            fuel: parse_fuel(m),
            max_depth: parse_max_depth(m),
            color: parse_color(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            backend: p.backend,
            mode: p.mode,
            json: p.json,
            limits: Limits {
                fuel: p.fuel,
                max_depth: p.max_depth,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub strict: bool,
    pub fuel: u32,
    pub max_depth: u32,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            strict: m.get_flag("strict"),
            fuel: parse_fuel(m),
            max_depth: parse_max_depth(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            strict: p.strict,
            limits: Limits {
                fuel: p.fuel,
                max_depth: p.max_depth,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub fuel: u32,
    pub max_depth: u32,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
            fuel: parse_fuel(m),
            max_depth: parse_max_depth(m),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            raw: p.raw,
            spans: p.spans,
            limits: Limits {
                fuel: p.fuel,
                max_depth: p.max_depth,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct EventsParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub json: bool,
    pub fuel: u32,
    pub max_depth: u32,
    pub color: ColorChoice,
}

impl EventsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            json: m.get_flag("json"),
            fuel: parse_fuel(m),
            max_depth: parse_max_depth(m),
            color: parse_color(m),
        }
    }
}

impl From<EventsParams> for EventsArgs {
    fn from(p: EventsParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            json: p.json,
            limits: Limits {
                fuel: p.fuel,
                max_depth: p.max_depth,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct BackendsParams;

impl BackendsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000)
}

fn parse_max_depth(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("max_depth").copied().unwrap_or(512)
}
