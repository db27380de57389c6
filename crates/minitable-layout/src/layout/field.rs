//! Field descriptor record (12 bytes).
//!
//! Layout (native byte order):
//! - 0-3: number (u32)
//! - 4-5: offset (u16), byte offset of the field's storage in the message
//! - 6-7: presence (i16), see [`Presence`]
//! - 8-9: submsg_index (u16), [`NO_SUB`] when the field has no sub-table
//! - 10: descriptor_type (u8), see [`FieldType`]
//! - 11: mode (u8), see [`FieldMode`]

use std::fmt;
use std::mem::offset_of;

use super::field_type::FieldType;
use super::mode::FieldMode;
use super::presence::Presence;
use crate::platform::{FIELD_RECORD_SIZE, Platform};

const NUMBER_AT: usize = 0;
const OFFSET_AT: usize = 4;
const PRESENCE_AT: usize = 6;
const SUBMSG_AT: usize = 8;
const TYPE_AT: usize = 10;
const MODE_AT: usize = 11;

/// Sub-table index of fields that reference no sub-message or sub-enum.
pub const NO_SUB: u16 = u16::MAX;

/// One descriptor record, laid out exactly as the table producer lays it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct MiniTableField {
    number: u32,
    offset: u16,
    presence: i16,
    submsg_index: u16,
    descriptor_type: u8,
    mode: u8,
}

const _: () = assert!(std::mem::size_of::<MiniTableField>() == 12);
const _: () = assert!(offset_of!(MiniTableField, number) == NUMBER_AT);
const _: () = assert!(offset_of!(MiniTableField, offset) == OFFSET_AT);
const _: () = assert!(offset_of!(MiniTableField, presence) == PRESENCE_AT);
const _: () = assert!(offset_of!(MiniTableField, submsg_index) == SUBMSG_AT);
const _: () = assert!(offset_of!(MiniTableField, descriptor_type) == TYPE_AT);
const _: () = assert!(offset_of!(MiniTableField, mode) == MODE_AT);

impl MiniTableField {
    pub const fn new(
        number: u32,
        offset: u16,
        presence: i16,
        submsg_index: u16,
        descriptor_type: u8,
        mode: u8,
    ) -> Self {
        Self {
            number,
            offset,
            presence,
            submsg_index,
            descriptor_type,
            mode,
        }
    }

    /// Describe a singular scalar leaf field.
    ///
    /// # Panics
    /// Panics if `field_type` is a message or group.
    pub fn scalar(number: u32, offset: u16, presence: Presence, field_type: FieldType) -> Self {
        assert!(
            field_type.is_scalar_leaf(),
            "{} field {number} is not a scalar leaf",
            field_type.name()
        );
        // Scalar leaf reps do not depend on pointer width.
        let rep = field_type.rep(&Platform::NATIVE);
        Self::new(
            number,
            offset,
            presence.to_raw(),
            NO_SUB,
            field_type as u8,
            FieldMode::scalar(rep).to_byte(),
        )
    }

    /// Decode from the first 12 bytes of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        FieldView::new(bytes).to_record()
    }

    /// Encode to 12 bytes.
    pub fn to_bytes(&self) -> [u8; FIELD_RECORD_SIZE] {
        let mut bytes = [0u8; FIELD_RECORD_SIZE];
        bytes[NUMBER_AT..OFFSET_AT].copy_from_slice(&self.number.to_ne_bytes());
        bytes[OFFSET_AT..PRESENCE_AT].copy_from_slice(&self.offset.to_ne_bytes());
        bytes[PRESENCE_AT..SUBMSG_AT].copy_from_slice(&self.presence.to_ne_bytes());
        bytes[SUBMSG_AT..TYPE_AT].copy_from_slice(&self.submsg_index.to_ne_bytes());
        bytes[TYPE_AT] = self.descriptor_type;
        bytes[MODE_AT] = self.mode;
        bytes
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn presence(&self) -> i16 {
        self.presence
    }

    pub fn submsg_index(&self) -> u16 {
        self.submsg_index
    }

    pub fn descriptor_type(&self) -> u8 {
        self.descriptor_type
    }

    pub fn mode(&self) -> u8 {
        self.mode
    }

    pub fn classify_presence(&self) -> Presence {
        Presence::from_raw(self.presence)
    }

    pub fn field_mode(&self) -> FieldMode {
        FieldMode::from_byte(self.mode)
    }

    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_u8(self.descriptor_type)
    }
}

/// Borrowed view of one record inside a descriptor array.
///
/// Reads go straight to the underlying bytes, so a view over a native table
/// observes exactly what the producer wrote.
#[derive(Clone, Copy)]
pub struct FieldView<'a> {
    bytes: &'a [u8],
}

impl<'a> FieldView<'a> {
    /// View the record starting at `bytes[0]`.
    ///
    /// # Panics
    /// Panics if fewer than 12 bytes are available.
    pub fn new(bytes: &'a [u8]) -> Self {
        assert!(
            bytes.len() >= FIELD_RECORD_SIZE,
            "descriptor record needs {FIELD_RECORD_SIZE} bytes, got {}",
            bytes.len()
        );
        Self {
            bytes: &bytes[..FIELD_RECORD_SIZE],
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn number(&self) -> u32 {
        let b = self.bytes;
        u32::from_ne_bytes([b[0], b[1], b[2], b[3]])
    }

    pub fn offset(&self) -> u16 {
        self.u16_at(OFFSET_AT)
    }

    pub fn presence(&self) -> i16 {
        self.u16_at(PRESENCE_AT) as i16
    }

    pub fn submsg_index(&self) -> u16 {
        self.u16_at(SUBMSG_AT)
    }

    pub fn descriptor_type(&self) -> u8 {
        self.bytes[TYPE_AT]
    }

    pub fn mode(&self) -> u8 {
        self.bytes[MODE_AT]
    }

    pub fn classify_presence(&self) -> Presence {
        Presence::from_raw(self.presence())
    }

    pub fn field_mode(&self) -> FieldMode {
        FieldMode::from_byte(self.mode())
    }

    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_u8(self.descriptor_type())
    }

    /// Copy the record out.
    pub fn to_record(&self) -> MiniTableField {
        MiniTableField::new(
            self.number(),
            self.offset(),
            self.presence(),
            self.submsg_index(),
            self.descriptor_type(),
            self.mode(),
        )
    }

    fn u16_at(&self, at: usize) -> u16 {
        u16::from_ne_bytes([self.bytes[at], self.bytes[at + 1]])
    }
}

impl fmt::Debug for FieldView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldView")
            .field("number", &self.number())
            .field("offset", &self.offset())
            .field("presence", &self.classify_presence())
            .field("descriptor_type", &self.descriptor_type())
            .field("mode", &self.field_mode())
            .finish()
    }
}

impl PartialEq for FieldView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for FieldView<'_> {}
