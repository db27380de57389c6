//! Byte view over one packed message.

use minitable_layout::{FieldView, Platform, Presence, hasbit_location};

use super::memory::AddressSpace;

/// Borrowed bytes of one in-memory message, interpreted for `platform`.
///
/// The getters are the unchecked layer: they ignore presence and the
/// descriptor type, and trust the caller's offset. Debug builds assert the
/// read is in bounds and naturally aligned (relative to the message start);
/// release builds keep only the slice bounds checks.
#[derive(Clone, Copy, Debug)]
pub struct MessageView<'m> {
    bytes: &'m [u8],
    platform: Platform,
}

impl<'m> MessageView<'m> {
    pub fn new(bytes: &'m [u8], platform: Platform) -> Self {
        Self { bytes, platform }
    }

    /// View `size` bytes of a native message.
    ///
    /// # Safety
    /// `message` must be valid for reads of `size` bytes for `'m`, and nothing
    /// may mutate the message while the view exists.
    pub unsafe fn from_raw(message: *const u8, size: usize) -> Self {
        let bytes = if size == 0 {
            &[][..]
        } else {
            // SAFETY: guaranteed by the caller.
            unsafe { std::slice::from_raw_parts(message, size) }
        };
        Self::new(bytes, Platform::NATIVE)
    }

    pub fn as_bytes(&self) -> &'m [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether `field` counts as explicitly set.
    ///
    /// Implicit-presence fields are always present, whatever they hold.
    pub fn has_field(&self, field: &FieldView<'_>) -> bool {
        match field.classify_presence() {
            Presence::Implicit => true,
            Presence::Hasbit(index) => self.has_hasbit(index),
            Presence::OneofCase(offset) => self.oneof_case(offset) == field.number(),
        }
    }

    /// Bit `index % 8` of byte `index / 8`.
    pub fn has_hasbit(&self, index: u16) -> bool {
        let (byte, mask) = hasbit_location(index);
        debug_assert!(
            byte < self.bytes.len(),
            "hasbit {index} lives in byte {byte} of a {}-byte message",
            self.bytes.len()
        );
        self.bytes[byte] & mask != 0
    }

    /// Field number held by the oneof discriminant at `offset`.
    pub fn oneof_case(&self, offset: u16) -> u32 {
        self.get_uint32_field(offset as usize)
    }

    pub fn get_bool_field(&self, offset: usize) -> bool {
        let [b] = self.read::<1>(offset);
        b != 0
    }

    pub fn get_int32_field(&self, offset: usize) -> i32 {
        i32::from_ne_bytes(self.read(offset))
    }

    pub fn get_uint32_field(&self, offset: usize) -> u32 {
        u32::from_ne_bytes(self.read(offset))
    }

    pub fn get_int64_field(&self, offset: usize) -> i64 {
        i64::from_ne_bytes(self.read(offset))
    }

    pub fn get_uint64_field(&self, offset: usize) -> u64 {
        u64::from_ne_bytes(self.read(offset))
    }

    /// Bit pattern preserved, NaNs included.
    pub fn get_float_field(&self, offset: usize) -> f32 {
        f32::from_ne_bytes(self.read(offset))
    }

    pub fn get_double_field(&self, offset: usize) -> f64 {
        f64::from_ne_bytes(self.read(offset))
    }

    /// The two words of the string view at `offset`: data pointer, then the
    /// length at `offset + pointer_size`.
    pub fn string_view(&self, offset: usize) -> (u64, u64) {
        let ptr = self.platform.pointer_size();
        self.check_read(offset, 2 * ptr, ptr);
        let data = self.platform.read_word(&self.bytes[offset..offset + ptr]);
        let len = self.platform.read_word(&self.bytes[offset + ptr..offset + 2 * ptr]);
        (data, len)
    }

    /// Copy of the payload of the string view at `offset`.
    ///
    /// A zero length yields an empty buffer without resolving the pointer.
    ///
    /// # Panics
    /// Panics if the payload is not mapped in `memory`.
    pub fn get_string_field<M>(&self, offset: usize, memory: &M) -> Vec<u8>
    where
        M: AddressSpace + ?Sized,
    {
        let (data, len) = self.string_view(offset);
        if len == 0 {
            return Vec::new();
        }
        // A length that does not fit the host cannot be mapped either.
        let len = usize::try_from(len).unwrap_or(usize::MAX);
        memory.resolve(data, len).to_vec()
    }

    fn read<const N: usize>(&self, offset: usize) -> [u8; N] {
        self.check_read(offset, N, natural_align(N, &self.platform));
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[offset..offset + N]);
        out
    }

    #[inline]
    fn check_read(&self, offset: usize, size: usize, align: usize) {
        debug_assert!(
            offset.checked_add(size).is_some_and(|end| end <= self.bytes.len()),
            "{size}-byte read at offset {offset} runs past the {}-byte message",
            self.bytes.len()
        );
        debug_assert!(
            offset.is_multiple_of(align),
            "{size}-byte read at offset {offset} is not {align}-byte aligned"
        );
    }
}

/// Alignment of a `size`-byte scalar on `platform`.
///
/// 8-byte scalars are only pointer-aligned on 32-bit producers.
pub(crate) fn natural_align(size: usize, platform: &Platform) -> usize {
    size.min(platform.pointer_size()).max(1)
}
