//! Checked typed reads.

use minitable_layout::{CType, FieldType, FieldView, MiniTable, Presence, hasbit_location};
use serde::Serialize;

use super::error::AccessError;
use super::memory::AddressSpace;
use super::message::{MessageView, natural_align};
use super::trace::{NoopTracer, Tracer};
use super::value::FieldValue;

/// One scalar field of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldEntry {
    pub number: u32,
    #[serde(rename = "type")]
    pub field_type: &'static str,
    pub present: bool,
    /// The stored value, or the type's default when absent.
    pub value: FieldValue,
}

/// Validating reader over one message.
///
/// Every read checks the descriptor against the message (scalar mode, known
/// type, storage in bounds and aligned) and reports violations as
/// [`AccessError`] instead of reading garbage.
pub struct FieldReader<'m, M: ?Sized> {
    message: MessageView<'m>,
    memory: &'m M,
}

impl<'m, M> FieldReader<'m, M>
where
    M: AddressSpace + ?Sized,
{
    /// `memory` resolves the payloads of string and bytes fields.
    pub fn new(message: MessageView<'m>, memory: &'m M) -> Self {
        Self { message, memory }
    }

    pub fn message(&self) -> MessageView<'m> {
        self.message
    }

    /// Decode the stored value, ignoring presence.
    pub fn read(&self, field: &FieldView<'_>) -> Result<FieldValue, AccessError> {
        let (field_type, offset) = self.check_storage(field)?;
        let m = &self.message;
        let value = match field_type.ctype() {
            CType::Bool => FieldValue::Bool(m.get_bool_field(offset)),
            CType::Int32 | CType::Enum => FieldValue::Int32(m.get_int32_field(offset)),
            CType::UInt32 => FieldValue::UInt32(m.get_uint32_field(offset)),
            CType::Int64 => FieldValue::Int64(m.get_int64_field(offset)),
            CType::UInt64 => FieldValue::UInt64(m.get_uint64_field(offset)),
            CType::Float => FieldValue::Float(m.get_float_field(offset)),
            CType::Double => FieldValue::Double(m.get_double_field(offset)),
            CType::String => {
                let bytes = self.payload(offset)?;
                let s = std::str::from_utf8(bytes).map_err(|source| AccessError::InvalidUtf8 {
                    number: field.number(),
                    source,
                })?;
                FieldValue::String(s.to_owned())
            }
            CType::Bytes => FieldValue::Bytes(self.payload(offset)?.to_vec()),
            CType::Message => return Err(unsupported(field)),
        };
        Ok(value)
    }

    /// The stored value, or `None` when the field is not present.
    pub fn get(&self, field: &FieldView<'_>) -> Result<Option<FieldValue>, AccessError> {
        if !self.has_field(field)? {
            return Ok(None);
        }
        self.read(field).map(Some)
    }

    /// The stored value, or the type's default when the field is not present.
    pub fn get_or_default(&self, field: &FieldView<'_>) -> Result<FieldValue, AccessError> {
        Ok(self.entry(field)?.value)
    }

    /// Presence test with the presence storage bounds-checked first.
    pub fn has_field(&self, field: &FieldView<'_>) -> Result<bool, AccessError> {
        let message_len = self.message.len();
        let out_of_bounds = |offset, size| AccessError::OutOfBounds {
            number: field.number(),
            offset,
            size,
            message_len,
        };
        match field.classify_presence() {
            Presence::Implicit => {}
            Presence::Hasbit(index) => {
                let (byte, _) = hasbit_location(index);
                if byte >= message_len {
                    return Err(out_of_bounds(byte, 1));
                }
            }
            Presence::OneofCase(offset) => {
                let offset = offset as usize;
                if offset + 4 > message_len {
                    return Err(out_of_bounds(offset, 4));
                }
                if !offset.is_multiple_of(4) {
                    return Err(AccessError::Misaligned {
                        number: field.number(),
                        offset,
                        align: 4,
                    });
                }
            }
        }
        Ok(self.message.has_field(field))
    }

    /// Every scalar field of `table`, in table order.
    pub fn snapshot(&self, table: &MiniTable<'_>) -> Result<Vec<FieldEntry>, AccessError> {
        self.snapshot_with(table, &mut NoopTracer)
    }

    /// [`snapshot`](Self::snapshot), reporting each step to `tracer`.
    pub fn snapshot_with<T: Tracer>(
        &self,
        table: &MiniTable<'_>,
        tracer: &mut T,
    ) -> Result<Vec<FieldEntry>, AccessError> {
        let mut entries = Vec::with_capacity(table.field_count() as usize);
        for (index, field) in table.iter().enumerate() {
            tracer.trace_field(index as u16, &field);
            if !is_scalar_leaf(&field) {
                tracer.trace_skip(&field);
                continue;
            }
            match self.traced_entry(&field, tracer) {
                Ok(entry) => {
                    tracer.trace_value(&field, &entry.value, entry.present);
                    entries.push(entry);
                }
                Err(err) => {
                    tracer.trace_error(&field, &err);
                    return Err(err);
                }
            }
        }
        Ok(entries)
    }

    fn entry(&self, field: &FieldView<'_>) -> Result<FieldEntry, AccessError> {
        self.traced_entry(field, &mut NoopTracer)
    }

    fn traced_entry<T: Tracer>(
        &self,
        field: &FieldView<'_>,
        tracer: &mut T,
    ) -> Result<FieldEntry, AccessError> {
        let (field_type, _) = self.check_storage(field)?;
        let present = self.has_field(field)?;
        tracer.trace_presence(field, present);
        let value = if present {
            self.read(field)?
        } else {
            FieldValue::default_for(field_type).ok_or_else(|| unsupported(field))?
        };
        Ok(FieldEntry {
            number: field.number(),
            field_type: field_type.name(),
            present,
            value,
        })
    }

    /// Validate the descriptor's value storage; yields its type and offset.
    fn check_storage(&self, field: &FieldView<'_>) -> Result<(FieldType, usize), AccessError> {
        let mode = field.field_mode();
        if !mode.is_scalar() {
            return Err(AccessError::NotScalar {
                number: field.number(),
                mode,
            });
        }
        let field_type = field
            .field_type()
            .filter(|t| t.is_scalar_leaf())
            .ok_or_else(|| unsupported(field))?;

        let platform = self.message.platform();
        let offset = field.offset() as usize;
        let size = field_type.ctype().size(&platform);
        // String views align to their pointer words.
        let align = natural_align(size.min(platform.pointer_size()), &platform);
        if offset + size > self.message.len() {
            return Err(AccessError::OutOfBounds {
                number: field.number(),
                offset,
                size,
                message_len: self.message.len(),
            });
        }
        if !offset.is_multiple_of(align) {
            return Err(AccessError::Misaligned {
                number: field.number(),
                offset,
                align,
            });
        }
        Ok((field_type, offset))
    }

    fn payload(&self, offset: usize) -> Result<&'m [u8], AccessError> {
        let (address, len) = self.message.string_view(offset);
        if len == 0 {
            return Ok(&[]);
        }
        let unmapped = AccessError::UnmappedAddress { address, len };
        let n = usize::try_from(len).map_err(|_| unmapped.clone())?;
        let memory: &'m M = self.memory;
        memory.try_resolve(address, n).ok_or(unmapped)
    }
}

fn is_scalar_leaf(field: &FieldView<'_>) -> bool {
    field.field_mode().is_scalar() && field.field_type().is_some_and(|t| t.is_scalar_leaf())
}

fn unsupported(field: &FieldView<'_>) -> AccessError {
    AccessError::UnsupportedType {
        number: field.number(),
        descriptor_type: field.descriptor_type(),
    }
}
