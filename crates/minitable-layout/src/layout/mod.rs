//! Descriptor table format definitions.
//!
//! A descriptor table is a contiguous array of fixed-size `MiniTableField`
//! records. The views in this module read those records out of borrowed
//! bytes using the strides and widths of an explicit `Platform`.

mod aligned_vec;
mod dump;
mod error;
mod field;
mod field_type;
mod mode;
mod presence;
mod table;

#[cfg(test)]
mod field_tests;
#[cfg(test)]
mod presence_tests;

pub use aligned_vec::{AlignedVec, WORD_ALIGN};
pub use dump::dump;
pub use error::LayoutError;
pub use field::{FieldView, MiniTableField, NO_SUB};
pub use field_type::{CType, FieldType};
pub use mode::{FieldKind, FieldMode, FieldRep};
pub use presence::{Presence, hasbit_location};
pub use table::{FieldIter, MiniTable, RawMiniTable, field_at_index};
