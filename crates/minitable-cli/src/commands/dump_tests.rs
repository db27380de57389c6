use std::path::Path;

use minitable_layout::{FieldType, MiniTableField, Presence};

use super::dump::{DumpArgs, render};

fn write_table(dir: &Path, fields: &[MiniTableField], pad: usize) -> std::path::PathBuf {
    let path = dir.join("fields.table");
    let mut bytes = Vec::new();
    for field in fields {
        bytes.extend_from_slice(&field.to_bytes());
        bytes.extend(std::iter::repeat_n(0u8, pad));
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

fn args(table_path: std::path::PathBuf) -> DumpArgs {
    DumpArgs {
        table_path,
        pointer_width: Some(64),
        stride: None,
        color: false,
    }
}

#[test]
fn dumps_table_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(
        dir.path(),
        &[
            MiniTableField::scalar(1, 8, Presence::Hasbit(1), FieldType::SInt64),
            MiniTableField::scalar(2, 16, Presence::OneofCase(4), FieldType::Bytes),
        ],
        0,
    );

    let out = render(&args(path)).unwrap();

    insta::assert_snapshot!(out, @r"
    [fields] count=2 stride=12 pointer=8
    0  #1       @8      hasbit 1      sint64    scalar/8byte
    1  #2       @16     oneof @4      bytes     scalar/strview
    ");
}

#[test]
fn padded_stride() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(
        dir.path(),
        &[
            MiniTableField::scalar(1, 4, Presence::Implicit, FieldType::Bool),
            MiniTableField::scalar(2, 8, Presence::Implicit, FieldType::Float),
        ],
        4,
    );
    let mut args = args(path);
    args.stride = Some(16);
    args.pointer_width = Some(32);

    let out = render(&args).unwrap();

    assert!(out.starts_with("[fields] count=2 stride=16 pointer=4\n"));
    assert!(out.contains("1  #2       @8      implicit      float     scalar/4byte"));
}

#[test]
fn ragged_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.table");
    std::fs::write(&path, [0u8; 13]).unwrap();

    let err = render(&args(path)).unwrap_err();

    insta::assert_snapshot!(
        err,
        @"descriptor array length 13 is not a multiple of the 12-byte stride"
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.table");

    let err = render(&args(path.clone())).unwrap_err().to_string();

    assert!(err.starts_with(&format!("cannot read {}: ", path.display())));
}

#[test]
fn stride_below_record_size_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(dir.path(), &[], 0);
    let mut args = args(path);
    args.stride = Some(8);

    let err = render(&args).unwrap_err();

    insta::assert_snapshot!(err, @"descriptor stride 8 is smaller than the 12-byte record");
}
