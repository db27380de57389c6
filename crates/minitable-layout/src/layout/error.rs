//! Errors raised while building views over descriptor tables.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unsupported pointer size: {0} bytes (expected 4 or 8)")]
    UnsupportedPointerSize(usize),

    #[error("unsupported pointer width: {0} bits (expected 32 or 64)")]
    UnsupportedPointerWidth(u32),

    #[error("descriptor stride {stride} is smaller than the {record}-byte record")]
    StrideTooSmall { stride: usize, record: usize },

    #[error(
        "descriptor array too short: {count} records of {stride} bytes need {needed} bytes, got {actual}"
    )]
    TableTooShort {
        count: u16,
        stride: usize,
        needed: usize,
        actual: usize,
    },

    #[error(
        "descriptor array of {count} records with a {stride}-byte stride overflows the address space"
    )]
    TableSizeOverflow { count: u16, stride: usize },

    #[error("descriptor array length {len} is not a multiple of the {stride}-byte stride")]
    RaggedTable { len: usize, stride: usize },

    #[error("too many descriptors: {0} (at most 65535)")]
    TooManyFields(usize),
}
