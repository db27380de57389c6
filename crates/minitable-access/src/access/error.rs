//! Errors raised by checked reads and address space setup.

use minitable_layout::FieldMode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("field {number} is not a scalar field (mode {mode})")]
    NotScalar { number: u32, mode: FieldMode },

    #[error("field {number} has unsupported descriptor type {descriptor_type}")]
    UnsupportedType { number: u32, descriptor_type: u8 },

    #[error(
        "field {number}: {size} bytes at offset {offset} run past the {message_len}-byte message"
    )]
    OutOfBounds {
        number: u32,
        offset: usize,
        size: usize,
        message_len: usize,
    },

    #[error("field {number}: offset {offset} is not {align}-byte aligned")]
    Misaligned {
        number: u32,
        offset: usize,
        align: usize,
    },

    #[error("{len} bytes at address {address:#x} are not mapped")]
    UnmappedAddress { address: u64, len: u64 },

    #[error("field {number} holds invalid UTF-8")]
    InvalidUtf8 {
        number: u32,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("segment at {base:#x} ({len} bytes) overlaps the segment at {existing:#x}")]
    OverlappingSegment { base: u64, len: usize, existing: u64 },

    #[error("segment at {base:#x} ({len} bytes) wraps past the end of the address space")]
    AddressOverflow { base: u64, len: usize },
}
