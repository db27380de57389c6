//! Machine-dependent sizes used by all offset arithmetic.
//!
//! `POINTER_SIZE` and `FIELD_RECORD_SIZE` describe the build target. Views
//! never read them directly: they take a [`Platform`] so that tables and
//! messages produced for another pointer width can be interpreted too.

use crate::layout::{LayoutError, MiniTableField};

/// Size in bytes of a pointer on the build target.
pub const POINTER_SIZE: usize = std::mem::size_of::<*const u8>();

/// Size in bytes of one descriptor record (the descriptor array stride).
pub const FIELD_RECORD_SIZE: usize = std::mem::size_of::<MiniTableField>();

/// Layout parameters for one producer target.
///
/// `pointer_size` locates the second word of a string view (its length) and
/// sizes pointer-width words. `descriptor_stride` is the distance between two
/// consecutive descriptor records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Platform {
    pointer_size: usize,
    descriptor_stride: usize,
}

impl Default for Platform {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl Platform {
    /// The build target.
    pub const NATIVE: Self = Self {
        pointer_size: POINTER_SIZE,
        descriptor_stride: FIELD_RECORD_SIZE,
    };

    /// A 32-bit producer (4-byte pointers).
    pub const BITS_32: Self = Self {
        pointer_size: 4,
        descriptor_stride: FIELD_RECORD_SIZE,
    };

    /// A 64-bit producer (8-byte pointers).
    pub const BITS_64: Self = Self {
        pointer_size: 8,
        descriptor_stride: FIELD_RECORD_SIZE,
    };

    /// Create a platform, validating both sizes.
    pub fn new(pointer_size: usize, descriptor_stride: usize) -> Result<Self, LayoutError> {
        if pointer_size != 4 && pointer_size != 8 {
            return Err(LayoutError::UnsupportedPointerSize(pointer_size));
        }
        if descriptor_stride < FIELD_RECORD_SIZE {
            return Err(LayoutError::StrideTooSmall {
                stride: descriptor_stride,
                record: FIELD_RECORD_SIZE,
            });
        }
        Ok(Self {
            pointer_size,
            descriptor_stride,
        })
    }

    /// Platform for a pointer width given in bits (32 or 64).
    pub fn for_pointer_bits(bits: u32) -> Result<Self, LayoutError> {
        match bits {
            32 => Ok(Self::BITS_32),
            64 => Ok(Self::BITS_64),
            _ => Err(LayoutError::UnsupportedPointerWidth(bits)),
        }
    }

    /// Same platform with a different descriptor stride.
    pub fn with_descriptor_stride(self, stride: usize) -> Result<Self, LayoutError> {
        Self::new(self.pointer_size, stride)
    }

    pub fn pointer_size(&self) -> usize {
        self.pointer_size
    }

    pub fn descriptor_stride(&self) -> usize {
        self.descriptor_stride
    }

    /// Size of a string view: data pointer followed by a pointer-width length.
    pub fn string_view_size(&self) -> usize {
        2 * self.pointer_size
    }

    /// Whether this platform matches the build target.
    pub fn is_native(&self) -> bool {
        *self == Self::NATIVE
    }

    /// Decode one pointer-width word in native byte order.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than `pointer_size`.
    pub fn read_word(&self, bytes: &[u8]) -> u64 {
        match self.pointer_size {
            4 => u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as u64,
            _ => u64::from_ne_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]),
        }
    }

    /// Encode one pointer-width word in native byte order.
    ///
    /// Only the low `pointer_size` bytes of `word` are kept.
    pub fn write_word(&self, word: u64) -> Vec<u8> {
        match self.pointer_size {
            4 => (word as u32).to_ne_bytes().to_vec(),
            _ => word.to_ne_bytes().to_vec(),
        }
    }
}
