use std::path::{Path, PathBuf};

use minitable_access::Verbosity;
use minitable_layout::{AlignedVec, FieldType, MiniTableField, Presence};

use super::inspect::{InspectArgs, RELEASE_CHECK_NOTE, SegmentSpec, inspect};

struct Fixture {
    dir: tempfile::TempDir,
    table: PathBuf,
    message: PathBuf,
}

fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Person-like message for a 64-bit producer:
/// id (int32, hasbit 1) @8, name (string) @16, score (double, oneof @32) @40.
fn fixture(name_address: u64, name_len: u64) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let fields = [
        MiniTableField::scalar(1, 8, Presence::Hasbit(1), FieldType::Int32),
        MiniTableField::scalar(2, 16, Presence::Implicit, FieldType::String),
        MiniTableField::scalar(3, 40, Presence::OneofCase(32), FieldType::Double),
    ];
    let table_bytes: Vec<u8> = fields.iter().flat_map(|f| f.to_bytes()).collect();

    let mut msg = AlignedVec::zeroed(48);
    msg[0] = 0b10;
    msg[8..12].copy_from_slice(&42i32.to_ne_bytes());
    msg[16..24].copy_from_slice(&name_address.to_ne_bytes());
    msg[24..32].copy_from_slice(&name_len.to_ne_bytes());
    msg[32..36].copy_from_slice(&3u32.to_ne_bytes());
    msg[40..48].copy_from_slice(&0.5f64.to_ne_bytes());

    let table = write(dir.path(), "person.table", &table_bytes);
    let message = write(dir.path(), "person.msg", &msg);
    Fixture {
        dir,
        table,
        message,
    }
}

fn args(fx: &Fixture) -> InspectArgs {
    InspectArgs {
        table_path: fx.table.clone(),
        message_path: fx.message.clone(),
        segments: Vec::new(),
        pointer_width: Some(64),
        stride: None,
        trace: false,
        verbosity: Verbosity::Default,
        compact: true,
        check: false,
        color: false,
    }
}

#[test]
fn prints_snapshot_json() {
    let fx = fixture(0x7f00_0000, 3);
    let segment = write(fx.dir.path(), "strings.bin", b"Ada");
    let mut args = args(&fx);
    args.segments.push(SegmentSpec {
        address: 0x7f00_0000,
        path: segment,
    });
    let mut trace = Vec::new();

    let json = inspect(&args, &mut trace).unwrap();

    insta::assert_snapshot!(json, @r#"[{"number":1,"type":"int32","present":true,"value":42},{"number":2,"type":"string","present":true,"value":"Ada"},{"number":3,"type":"double","present":true,"value":0.5}]"#);
    assert!(trace.is_empty());
}

#[test]
fn pretty_by_default() {
    let fx = fixture(0, 0);
    let mut args = args(&fx);
    args.compact = false;

    let json = inspect(&args, &mut Vec::new()).unwrap();

    assert!(json.starts_with("[\n  {\n    \"number\": 1,"));
}

#[test]
fn trace_lines_are_collected() {
    let fx = fixture(0, 0);
    let mut args = args(&fx);
    args.trace = true;
    let mut trace = Vec::new();

    inspect(&args, &mut trace).unwrap();

    insta::assert_snapshot!(trace.join("\n"), @r#"
    0 #1 int32 = 42
    1 #2 string = ""
    2 #3 double = 0.5
    "#);
}

#[test]
fn unmapped_string_fails_after_tracing() {
    let fx = fixture(0x9000, 4);
    let mut args = args(&fx);
    args.trace = true;
    let mut trace = Vec::new();

    let err = inspect(&args, &mut trace).unwrap_err();

    insta::assert_snapshot!(err, @"4 bytes at address 0x9000 are not mapped");
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[1], "1 #2 string error: 4 bytes at address 0x9000 are not mapped");
}

#[test]
fn overlapping_segments_are_rejected() {
    let fx = fixture(0, 0);
    let a = write(fx.dir.path(), "a.bin", b"aaaa");
    let b = write(fx.dir.path(), "b.bin", b"bb");
    let mut args = args(&fx);
    args.segments = vec![
        SegmentSpec {
            address: 0x100,
            path: a,
        },
        SegmentSpec {
            address: 0x102,
            path: b,
        },
    ];

    let err = inspect(&args, &mut Vec::new()).unwrap_err();

    insta::assert_snapshot!(err, @"segment at 0x102 (2 bytes) overlaps the segment at 0x100");
}

#[test]
fn check_accepts_a_consistent_layout() {
    let fx = fixture(0, 0);
    let mut args = args(&fx);
    args.check = true;

    assert!(inspect(&args, &mut Vec::new()).is_ok());
}

#[test]
fn check_notes_when_compiled_out() {
    let fx = fixture(0, 0);
    let mut args = args(&fx);
    args.check = true;
    let mut trace = Vec::new();

    inspect(&args, &mut trace).unwrap();

    if cfg!(debug_assertions) {
        assert!(trace.is_empty());
    } else {
        assert_eq!(trace, [RELEASE_CHECK_NOTE]);
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "BUG: descriptor table does not fit a 16-byte message")]
fn check_rejects_a_short_message() {
    let fx = fixture(0, 0);
    let short = write(fx.dir.path(), "short.msg", &[0; 16]);
    let mut args = args(&fx);
    args.message_path = short;
    args.check = true;

    let _ = inspect(&args, &mut Vec::new());
}

#[test]
fn short_message_without_check_is_an_error() {
    let fx = fixture(0, 0);
    let short = write(fx.dir.path(), "short.msg", &[0; 16]);
    let mut args = args(&fx);
    args.message_path = short;

    let err = inspect(&args, &mut Vec::new()).unwrap_err();

    insta::assert_snapshot!(err, @"field 2: 16 bytes at offset 16 run past the 16-byte message");
}
