#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Descriptor table format and platform layout for minitable.
//!
//! This crate contains:
//! - Platform constants (native pointer width, descriptor stride) and the
//!   injectable `Platform` configuration
//! - Descriptor record definitions (MiniTableField, Presence, FieldMode, FieldType)
//! - Table views over descriptor arrays, plus raw-pointer accessors for native tables
//! - Debugging helpers (Colors, dump)

pub mod colors;
pub mod layout;
pub mod platform;
pub mod raw;

#[cfg(test)]
mod platform_tests;

// Re-export commonly used items at crate root
pub use colors::Colors;
pub use layout::{
    AlignedVec, CType, FieldIter, FieldKind, FieldMode, FieldRep, FieldType, FieldView,
    LayoutError, MiniTable, MiniTableField, NO_SUB, Presence, RawMiniTable, WORD_ALIGN, dump,
    field_at_index, hasbit_location,
};
pub use platform::{FIELD_RECORD_SIZE, POINTER_SIZE, Platform};
