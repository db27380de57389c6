//! Debug-only layout verification.
//!
//! Checks a descriptor table against the size of the messages it describes.
//! Zero-cost in release builds.

use minitable_layout::MiniTable;
#[cfg(debug_assertions)]
use minitable_layout::{FieldKind, FieldView, Platform, Presence, hasbit_location};

#[cfg(debug_assertions)]
use super::message::natural_align;

/// Debug-only layout verification.
///
/// Panics with every problem found if some descriptor of `table` does not fit
/// a `message_size`-byte message: unknown mode kind or descriptor type,
/// storage out of bounds or misaligned, hasbit or oneof discriminant out of
/// bounds, or a field number used twice. This is a no-op in release builds.
#[cfg(debug_assertions)]
pub fn debug_verify_layout(table: &MiniTable<'_>, message_size: usize) {
    let platform = table.platform();
    let mut problems = Vec::new();
    let mut seen = std::collections::BTreeMap::new();

    for (index, field) in table.iter().enumerate() {
        if let Some(first) = seen.insert(field.number(), index) {
            problems.push(format!(
                "[{index}] #{}: number already used by [{first}]",
                field.number()
            ));
            // Keep reporting against the first occurrence.
            seen.insert(field.number(), first);
        }
        verify_field(index, &field, message_size, &platform, &mut problems);
    }

    if !problems.is_empty() {
        panic_with_problems(table, message_size, &problems);
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
#[inline(always)]
pub fn debug_verify_layout(_table: &MiniTable<'_>, _message_size: usize) {}

#[cfg(debug_assertions)]
fn verify_field(
    index: usize,
    field: &FieldView<'_>,
    message_size: usize,
    platform: &Platform,
    problems: &mut Vec<String>,
) {
    let mut report = |msg: String| problems.push(format!("[{index}] #{}: {msg}", field.number()));

    let mode = field.field_mode();
    let Some(kind) = mode.kind() else {
        report(format!("invalid mode byte {:#04x}", mode.to_byte()));
        return;
    };
    let Some(field_type) = field.field_type() else {
        report(format!("unknown descriptor type {}", field.descriptor_type()));
        return;
    };

    let (size, align) = match kind {
        FieldKind::Scalar if field_type.is_scalar_leaf() => {
            let expected = field_type.rep(platform);
            if mode.rep() != expected {
                report(format!(
                    "mode rep {} does not match {} ({})",
                    mode.rep().name(),
                    field_type.name(),
                    expected.name()
                ));
            }
            let size = field_type.ctype().size(platform);
            (size, natural_align(size.min(platform.pointer_size()), platform))
        }
        // Sub-messages, arrays and maps all live behind one pointer.
        _ => (platform.pointer_size(), platform.pointer_size()),
    };

    let offset = field.offset() as usize;
    if offset + size > message_size {
        report(format!("storage @{offset}+{size} runs past the end"));
    } else if !offset.is_multiple_of(align) {
        report(format!("storage @{offset} is not {align}-byte aligned"));
    }

    match field.classify_presence() {
        Presence::Implicit => {}
        Presence::Hasbit(bit) => {
            let (byte, _) = hasbit_location(bit);
            if byte >= message_size {
                report(format!("hasbit {bit} lives in byte {byte}, past the end"));
            }
        }
        Presence::OneofCase(case) => {
            let case = case as usize;
            if case + 4 > message_size {
                report(format!("oneof case @{case}+4 runs past the end"));
            } else if !case.is_multiple_of(4) {
                report(format!("oneof case @{case} is not 4-byte aligned"));
            }
        }
    }
}

#[cfg(debug_assertions)]
fn panic_with_problems(table: &MiniTable<'_>, message_size: usize, problems: &[String]) -> ! {
    const WIDTH: usize = 80;
    let separator = "=".repeat(WIDTH);
    let dump = minitable_layout::dump(table, minitable_layout::Colors::OFF);
    let details = problems.join("\n");

    panic!(
        "\n{separator}\n\
         BUG: descriptor table does not fit a {message_size}-byte message\n\
         {separator}\n\n\
         {dump}\n\
         {details}\n\n\
         {separator}\n"
    );
}
