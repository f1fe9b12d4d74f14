//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command uses
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dot::DotArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: String,
    pub optimize: bool,
    pub json: bool,
    pub code: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            optimize: m.get_flag("optimize"),
            json: m.get_flag("json"),
            code: m.get_flag("code"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            optimize: p.optimize,
            json: p.json,
            code: p.code,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DotParams {
    pub pattern: String,
    pub optimize: bool,
    // --color is accepted for uniformity but dot output is never colored
}

impl DotParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            optimize: m.get_flag("optimize"),
        }
    }
}

impl From<DotParams> for DotArgs {
    fn from(p: DotParams) -> Self {
        Self {
            pattern: p.pattern,
            optimize: p.optimize,
        }
    }
}

pub struct ExecParams {
    pub pattern: String,
    pub candidates: Vec<String>,
    pub optimize: bool,
    pub max_len: Option<usize>,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            candidates: m
                .get_many::<String>("candidates")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            optimize: m.get_flag("optimize"),
            max_len: m.get_one::<usize>("max_len").copied(),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            pattern: p.pattern,
            candidates: p.candidates,
            optimize: p.optimize,
            max_len: p.max_len,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: String,
    pub candidate: String,
    pub optimize: bool,
    pub max_len: Option<usize>,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            candidate: m.get_one::<String>("candidate").cloned().unwrap_or_default(),
            optimize: m.get_flag("optimize"),
            max_len: m.get_one::<usize>("max_len").copied(),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            pattern: p.pattern,
            candidate: p.candidate,
            optimize: p.optimize,
            max_len: p.max_len,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_pattern(m: &ArgMatches) -> String {
    m.get_one::<String>("pattern").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
