//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use crate::commands::inspect::SegmentSpec;

/// Descriptor table file (positional).
pub fn table_path_arg() -> Arg {
    Arg::new("table_path")
        .value_name("TABLE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("File of concatenated descriptor records")
}

/// Message image file (positional).
pub fn message_path_arg() -> Arg {
    Arg::new("message_path")
        .value_name("MESSAGE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Raw bytes of one in-memory message")
}

/// Producer pointer width (--pointer-width).
pub fn pointer_width_arg() -> Arg {
    Arg::new("pointer_width")
        .long("pointer-width")
        .value_name("BITS")
        .value_parser(["32", "64"])
        .help("Pointer width of the producing target (default: this machine)")
}

/// Descriptor stride override (--stride).
pub fn stride_arg() -> Arg {
    Arg::new("stride")
        .long("stride")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .help("Distance between descriptor records (default: 12)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Simulated memory segment (--segment ADDR=FILE, repeatable).
pub fn segment_arg() -> Arg {
    Arg::new("segment")
        .long("segment")
        .value_name("ADDR=FILE")
        .action(ArgAction::Append)
        .value_parser(parse_segment)
        .help("Map FILE at address ADDR to back string and bytes fields")
}

/// Per-field trace on stderr (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Trace every field read to stderr")
}

/// Trace verbosity (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbose trace: offsets, presence checks, skipped fields")
}

/// Compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Layout verification (--check).
pub fn check_arg() -> Arg {
    Arg::new("check")
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Verify the table against the message size first (debug builds only)")
}

/// Parse `ADDR=FILE`, with `ADDR` in decimal or `0x` hex.
pub fn parse_segment(s: &str) -> Result<SegmentSpec, String> {
    let Some((addr, path)) = s.split_once('=') else {
        return Err(format!("expected ADDR=FILE, got '{s}'"));
    };
    if path.is_empty() {
        return Err(format!("missing file in '{s}'"));
    }
    let address = match addr.strip_prefix("0x").or_else(|| addr.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => addr.parse(),
    }
    .map_err(|e| format!("invalid address '{addr}': {e}"))?;
    Ok(SegmentSpec {
        address,
        path: PathBuf::from(path),
    })
}
