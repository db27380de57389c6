//! Descriptor table views.

use std::ffi::c_void;

use super::error::LayoutError;
use super::field::{FieldView, MiniTableField};
use crate::platform::{FIELD_RECORD_SIZE, Platform};

/// Native descriptor table header, as laid out by the table producer.
///
/// Only `fields` and `field_count` are consumed here; the remaining members
/// exist so the struct matches the producer's size and alignment.
#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct RawMiniTable {
    pub subs: *const c_void,
    pub fields: *const MiniTableField,
    /// Message size in bytes.
    pub size: u16,
    pub field_count: u16,
    pub ext: u8,
    pub dense_below: u8,
    pub table_mask: u8,
    pub required_count: u8,
}

/// Borrowed view of a descriptor array.
///
/// `fields` holds `field_count` records spaced `platform.descriptor_stride()`
/// bytes apart.
#[derive(Clone, Copy, Debug)]
pub struct MiniTable<'a> {
    fields: &'a [u8],
    field_count: u16,
    platform: Platform,
}

impl<'a> MiniTable<'a> {
    /// View `field_count` records in `fields`.
    pub fn new(fields: &'a [u8], field_count: u16, platform: Platform) -> Result<Self, LayoutError> {
        let stride = platform.descriptor_stride();
        let needed = needed_len(field_count, stride).ok_or(LayoutError::TableSizeOverflow {
            count: field_count,
            stride,
        })?;
        if fields.len() < needed {
            return Err(LayoutError::TableTooShort {
                count: field_count,
                stride,
                needed,
                actual: fields.len(),
            });
        }
        Ok(Self {
            fields,
            field_count,
            platform,
        })
    }

    /// View a buffer made only of records, deriving the count from its length.
    pub fn from_bytes(fields: &'a [u8], platform: Platform) -> Result<Self, LayoutError> {
        let stride = platform.descriptor_stride();
        if fields.len() % stride != 0 {
            return Err(LayoutError::RaggedTable {
                len: fields.len(),
                stride,
            });
        }
        let count = fields.len() / stride;
        let count = u16::try_from(count).map_err(|_| LayoutError::TooManyFields(count))?;
        Self::new(fields, count, platform)
    }

    /// View a slice of native records.
    pub fn from_fields(fields: &'a [MiniTableField]) -> Result<Self, LayoutError> {
        let count =
            u16::try_from(fields.len()).map_err(|_| LayoutError::TooManyFields(fields.len()))?;
        // SAFETY: MiniTableField is repr(C) with no padding (size and every
        // member offset are asserted in field.rs), so its bytes are initialized.
        let bytes = unsafe {
            std::slice::from_raw_parts(fields.as_ptr().cast::<u8>(), std::mem::size_of_val(fields))
        };
        Self::new(bytes, count, Platform::NATIVE)
    }

    /// View the descriptor array of a native table.
    ///
    /// # Safety
    /// `table` must point to a valid `RawMiniTable` whose `fields` array holds
    /// `field_count` records and outlives `'a`.
    pub unsafe fn from_raw(table: *const RawMiniTable) -> Self {
        // SAFETY: guaranteed by the caller.
        let table = unsafe { &*table };
        let count = table.field_count;
        let fields = if count == 0 || table.fields.is_null() {
            &[][..]
        } else {
            // SAFETY: guaranteed by the caller.
            unsafe {
                std::slice::from_raw_parts(
                    table.fields.cast::<u8>(),
                    count as usize * FIELD_RECORD_SIZE,
                )
            }
        };
        Self {
            fields,
            field_count: count,
            platform: Platform::NATIVE,
        }
    }

    /// The descriptor array.
    pub fn field_array(&self) -> &'a [u8] {
        self.fields
    }

    pub fn field_count(&self) -> u16 {
        self.field_count
    }

    pub fn is_empty(&self) -> bool {
        self.field_count == 0
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Record at `index`. The caller keeps `index < field_count()`.
    pub fn field_at(&self, index: u16) -> FieldView<'a> {
        debug_assert!(
            index < self.field_count,
            "field index {index} out of bounds for table of {} fields",
            self.field_count
        );
        field_at_index(self.fields, index as usize, &self.platform)
    }

    /// Checked variant of [`field_at`](Self::field_at).
    pub fn get(&self, index: u16) -> Option<FieldView<'a>> {
        (index < self.field_count).then(|| field_at_index(self.fields, index as usize, &self.platform))
    }

    pub fn iter(&self) -> FieldIter<'a> {
        FieldIter {
            table: *self,
            next: 0,
        }
    }

    /// First record with the given number, scanning in table order.
    pub fn find_by_number(&self, number: u32) -> Option<FieldView<'a>> {
        self.iter().find(|field| field.number() == number)
    }
}

impl<'a> IntoIterator for MiniTable<'a> {
    type Item = FieldView<'a>;
    type IntoIter = FieldIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`MiniTable`], in table order.
#[derive(Clone, Debug)]
pub struct FieldIter<'a> {
    table: MiniTable<'a>,
    next: u16,
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = FieldView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.table.get(self.next)?;
        self.next += 1;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.table.field_count - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}

/// Record `index` of a descriptor array: `fields + index * stride`.
///
/// No bounds check against the table's count; reading past the array end is
/// a caller bug, caught by a debug assertion.
pub fn field_at_index<'a>(fields: &'a [u8], index: usize, platform: &Platform) -> FieldView<'a> {
    let start = index * platform.descriptor_stride();
    debug_assert!(
        start + FIELD_RECORD_SIZE <= fields.len(),
        "descriptor {index} at byte {start} runs past the {}-byte array",
        fields.len()
    );
    FieldView::new(&fields[start..])
}

/// `None` when the array size does not fit a `usize`.
fn needed_len(count: u16, stride: usize) -> Option<usize> {
    if count == 0 {
        return Some(0);
    }
    // The last record only needs its own bytes, not a full padded stride.
    (count as usize - 1)
        .checked_mul(stride)?
        .checked_add(FIELD_RECORD_SIZE)
}
