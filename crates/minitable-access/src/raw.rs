//! Presence tests and typed reads on native pointers.
//!
//! The zero-validation contract: no presence check, no descriptor type check,
//! no bounds check. Each reader reinterprets the bytes at `message + offset`
//! as its type in native byte order. Debug builds assert natural alignment.

use minitable_layout::{MiniTableField, POINTER_SIZE, Presence, hasbit_location, raw};

/// Whether `field` counts as explicitly set in `message`.
///
/// # Safety
/// `message` must point to a live message of the type `field` belongs to,
/// and `field` to a valid descriptor record.
pub unsafe fn has_field(message: *const u8, field: *const MiniTableField) -> bool {
    // SAFETY: guaranteed by the caller.
    let presence = unsafe { raw::field_presence(field) };
    match Presence::from_raw(presence) {
        Presence::Implicit => true,
        Presence::Hasbit(index) => {
            let (byte, mask) = hasbit_location(index);
            // SAFETY: the hasbit bytes lie inside the message.
            unsafe { *message.add(byte) & mask != 0 }
        }
        Presence::OneofCase(offset) => {
            // SAFETY: the discriminant lies inside the message; the number
            // read is a valid descriptor read.
            unsafe { get_uint32_field(message, offset as usize) == raw::field_number(field) }
        }
    }
}

/// # Safety
/// `message + offset` must be readable for the value's size and aligned.
#[inline]
unsafe fn read<T: Copy>(message: *const u8, offset: usize) -> T {
    // SAFETY: guaranteed by the caller.
    let ptr = unsafe { message.add(offset) }.cast::<T>();
    debug_assert!(
        ptr.is_aligned(),
        "{}-byte read at {ptr:p} is misaligned",
        size_of::<T>()
    );
    // SAFETY: guaranteed by the caller.
    unsafe { ptr.read() }
}

/// Any nonzero byte reads as `true`.
///
/// # Safety
/// `message + offset` must be readable.
pub unsafe fn get_bool_field(message: *const u8, offset: usize) -> bool {
    // SAFETY: guaranteed by the caller.
    unsafe { read::<u8>(message, offset) != 0 }
}

/// # Safety
/// `message + offset` must be readable for 4 bytes and 4-byte aligned.
pub unsafe fn get_int32_field(message: *const u8, offset: usize) -> i32 {
    // SAFETY: guaranteed by the caller.
    unsafe { read(message, offset) }
}

/// # Safety
/// `message + offset` must be readable for 4 bytes and 4-byte aligned.
pub unsafe fn get_uint32_field(message: *const u8, offset: usize) -> u32 {
    // SAFETY: guaranteed by the caller.
    unsafe { read(message, offset) }
}

/// # Safety
/// `message + offset` must be readable for 8 bytes and aligned for `i64`.
pub unsafe fn get_int64_field(message: *const u8, offset: usize) -> i64 {
    // SAFETY: guaranteed by the caller.
    unsafe { read(message, offset) }
}

/// # Safety
/// `message + offset` must be readable for 8 bytes and aligned for `u64`.
pub unsafe fn get_uint64_field(message: *const u8, offset: usize) -> u64 {
    // SAFETY: guaranteed by the caller.
    unsafe { read(message, offset) }
}

/// # Safety
/// `message + offset` must be readable for 4 bytes and 4-byte aligned.
pub unsafe fn get_float_field(message: *const u8, offset: usize) -> f32 {
    // SAFETY: guaranteed by the caller.
    unsafe { read(message, offset) }
}

/// # Safety
/// `message + offset` must be readable for 8 bytes and aligned for `f64`.
pub unsafe fn get_double_field(message: *const u8, offset: usize) -> f64 {
    // SAFETY: guaranteed by the caller.
    unsafe { read(message, offset) }
}

/// Data pointer at `offset`, length at `offset + POINTER_SIZE`.
///
/// # Safety
/// `message + offset` must hold a pointer-aligned string view.
pub unsafe fn string_view(message: *const u8, offset: usize) -> (*const u8, usize) {
    // SAFETY: guaranteed by the caller.
    unsafe {
        (
            read::<*const u8>(message, offset),
            read::<usize>(message, offset + POINTER_SIZE),
        )
    }
}

/// Copy of the payload of the string view at `offset`.
///
/// A zero length returns an empty buffer without touching the data pointer.
///
/// # Safety
/// As [`string_view`]; additionally a non-empty view must designate `len`
/// readable bytes.
pub unsafe fn get_string_field(message: *const u8, offset: usize) -> Vec<u8> {
    // SAFETY: guaranteed by the caller.
    let (data, len) = unsafe { string_view(message, offset) };
    if len == 0 {
        return Vec::new();
    }
    // SAFETY: guaranteed by the caller.
    unsafe { std::slice::from_raw_parts(data, len) }.to_vec()
}
