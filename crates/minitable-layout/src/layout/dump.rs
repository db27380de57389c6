//! Human-readable descriptor table dump.
//!
//! One header line, then one line per descriptor:
//!
//! ```text
//! [fields] count=2 stride=12 pointer=8
//! 0  #1       @8      hasbit 1      int32     scalar/4byte
//! 1  #3       @48     oneof @40     string    scalar/strview
//! ```

use std::fmt::Write as _;

use crate::Colors;

use super::field::FieldView;
use super::table::MiniTable;

/// Render `table`, one line per descriptor in table order.
pub fn dump(table: &MiniTable<'_>, colors: Colors) -> String {
    let mut out = String::new();
    let platform = table.platform();

    out.push_str(&colors.number("[fields]"));
    let summary = format!(
        "count={} stride={} pointer={}",
        table.field_count(),
        platform.descriptor_stride(),
        platform.pointer_size()
    );
    writeln!(out, " {}", colors.meta(summary)).unwrap();

    let width = width_for_count(table.field_count() as usize);
    for (index, field) in table.iter().enumerate() {
        dump_field(&mut out, index, width, field, &colors);
    }
    out
}

fn dump_field(out: &mut String, index: usize, width: usize, field: FieldView<'_>, c: &Colors) {
    let number = format!("#{:<6}", field.number());
    let offset = format!("@{:<5}", field.offset());
    let presence = format!("{:<12}", field.classify_presence().to_string());
    let field_type = match field.field_type() {
        Some(t) => t.name().to_string(),
        None => format!("type({})", field.descriptor_type()),
    };
    writeln!(
        out,
        "{index:0width$}  {}  {}  {presence}  {field_type:<8}  {}",
        c.number(number),
        c.meta(offset),
        c.meta(field.field_mode()),
    )
    .unwrap();
}

fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).ilog10() as usize + 1
    }
}
