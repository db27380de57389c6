//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use minitable_access::Verbosity;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::inspect::{InspectArgs, SegmentSpec};

pub struct DumpParams {
    pub table_path: PathBuf,
    pub pointer_width: Option<u32>,
    pub stride: Option<usize>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: required_path(m, "table_path"),
            pointer_width: parse_pointer_width(m),
            stride: m.get_one::<usize>("stride").copied(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            table_path: p.table_path,
            pointer_width: p.pointer_width,
            stride: p.stride,
            color: p.color.should_colorize(),
        }
    }
}

pub struct InspectParams {
    pub table_path: PathBuf,
    pub message_path: PathBuf,
    pub segments: Vec<SegmentSpec>,
    pub pointer_width: Option<u32>,
    pub stride: Option<usize>,
    pub trace: bool,
    pub verbose: u8,
    pub compact: bool,
    pub check: bool,
    pub color: ColorChoice,
}

impl InspectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: required_path(m, "table_path"),
            message_path: required_path(m, "message_path"),
            segments: m
                .get_many::<SegmentSpec>("segment")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            pointer_width: parse_pointer_width(m),
            stride: m.get_one::<usize>("stride").copied(),
            trace: m.get_flag("trace"),
            verbose: m.get_count("verbose"),
            compact: m.get_flag("compact"),
            check: m.get_flag("check"),
            color: parse_color(m),
        }
    }
}

impl From<InspectParams> for InspectArgs {
    fn from(p: InspectParams) -> Self {
        Self {
            table_path: p.table_path,
            message_path: p.message_path,
            segments: p.segments,
            pointer_width: p.pointer_width,
            stride: p.stride,
            // -v implies --trace
            trace: p.trace || p.verbose > 0,
            verbosity: if p.verbose > 0 {
                Verbosity::Verbose
            } else {
                Verbosity::Default
            },
            compact: p.compact,
            check: p.check,
            color: p.color.should_colorize(),
        }
    }
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap enforces required arg {id}"))
}

fn parse_pointer_width(m: &ArgMatches) -> Option<u32> {
    match m.get_one::<String>("pointer_width").map(|s| s.as_str()) {
        Some("32") => Some(32),
        Some("64") => Some(64),
        _ => None,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
