//! Pointer-level accessors for tables living in native memory.
//!
//! These mirror the [`MiniTable`](crate::MiniTable) and
//! [`FieldView`](crate::FieldView) projections for callers that hold bare
//! pointers handed over by the table producer. Nothing is checked in release
//! builds.

use crate::layout::{MiniTableField, RawMiniTable};
use crate::platform::FIELD_RECORD_SIZE;

/// Start of the table's descriptor array.
///
/// # Safety
/// `table` must point to a valid `RawMiniTable`.
#[inline]
pub unsafe fn field_array(table: *const RawMiniTable) -> *const MiniTableField {
    // SAFETY: guaranteed by the caller.
    unsafe { (*table).fields }
}

/// Number of descriptors in the table.
///
/// # Safety
/// `table` must point to a valid `RawMiniTable`.
#[inline]
pub unsafe fn field_count(table: *const RawMiniTable) -> u16 {
    // SAFETY: guaranteed by the caller.
    unsafe { (*table).field_count }
}

/// Descriptor `index` of a native array: `fields + index * FIELD_RECORD_SIZE`.
///
/// # Safety
/// `index` must be below the array's descriptor count. No check is made.
#[inline]
pub unsafe fn field_at_index(fields: *const MiniTableField, index: usize) -> *const MiniTableField {
    // SAFETY: the caller keeps the result inside the array.
    unsafe { fields.cast::<u8>().add(index * FIELD_RECORD_SIZE).cast() }
}

/// # Safety
/// `field` must point to a valid descriptor record.
#[inline]
pub unsafe fn field_number(field: *const MiniTableField) -> u32 {
    // SAFETY: guaranteed by the caller.
    unsafe { (*field).number() }
}

/// # Safety
/// `field` must point to a valid descriptor record.
#[inline]
pub unsafe fn field_offset(field: *const MiniTableField) -> u16 {
    // SAFETY: guaranteed by the caller.
    unsafe { (*field).offset() }
}

/// # Safety
/// `field` must point to a valid descriptor record.
#[inline]
pub unsafe fn field_presence(field: *const MiniTableField) -> i16 {
    // SAFETY: guaranteed by the caller.
    unsafe { (*field).presence() }
}

/// # Safety
/// `field` must point to a valid descriptor record.
#[inline]
pub unsafe fn field_mode(field: *const MiniTableField) -> u8 {
    // SAFETY: guaranteed by the caller.
    unsafe { (*field).mode() }
}
