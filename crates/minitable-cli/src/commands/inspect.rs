//! Read a message image against a descriptor table.

use std::path::PathBuf;

use minitable_access::{
    FieldReader, MessageView, NoopTracer, PrintTracer, SegmentMemory, Verbosity,
    debug_verify_layout,
};
use minitable_layout::{Colors, MiniTable};

use super::loader::{self, LoadError};

/// Stderr note for `--check` when layout verification is compiled out.
pub const RELEASE_CHECK_NOTE: &str = "note: --check has no effect in release builds";

/// One `--segment ADDR=FILE` mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentSpec {
    pub address: u64,
    pub path: PathBuf,
}

pub struct InspectArgs {
    pub table_path: PathBuf,
    pub message_path: PathBuf,
    pub segments: Vec<SegmentSpec>,
    pub pointer_width: Option<u32>,
    pub stride: Option<usize>,
    pub trace: bool,
    pub verbosity: Verbosity,
    pub compact: bool,
    pub check: bool,
    pub color: bool,
}

pub fn run(args: InspectArgs) {
    let mut trace = Vec::new();
    let result = inspect(&args, &mut trace);
    for line in &trace {
        eprintln!("{line}");
    }
    match result {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Snapshot JSON of the message. Trace lines, if requested, land in `trace`
/// even when the snapshot fails.
pub fn inspect(args: &InspectArgs, trace: &mut Vec<String>) -> Result<String, LoadError> {
    let platform = loader::platform(args.pointer_width, args.stride)?;
    let table_bytes = loader::read_aligned(&args.table_path)?;
    let table = MiniTable::from_bytes(&table_bytes, platform)?;
    let message = loader::read_aligned(&args.message_path)?;

    let mut memory = SegmentMemory::new();
    for segment in &args.segments {
        let bytes = loader::read_aligned(&segment.path)?;
        memory.map(segment.address, &bytes)?;
    }

    if args.check {
        if cfg!(debug_assertions) {
            debug_verify_layout(&table, message.len());
        } else {
            trace.push(RELEASE_CHECK_NOTE.to_string());
        }
    }

    let reader = FieldReader::new(MessageView::new(&message, platform), &memory);
    let snapshot = if args.trace {
        let mut tracer = PrintTracer::new(&table, args.verbosity, Colors::new(args.color));
        let result = reader.snapshot_with(&table, &mut tracer);
        trace.extend(tracer.into_lines());
        result?
    } else {
        reader.snapshot_with(&table, &mut NoopTracer)?
    };

    let json = if args.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    Ok(json)
}
