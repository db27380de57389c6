//! Word-aligned byte storage for descriptor arrays and message images.
//!
//! Descriptor records need 4-byte alignment and message fields up to 8.
//! Bytes read from a file land in a `Vec<u8>` with no such guarantee, so
//! images are copied into `u64` words before being viewed.

use std::ops::{Deref, DerefMut};

/// Alignment of every `AlignedVec` buffer.
pub const WORD_ALIGN: usize = std::mem::align_of::<u64>();

/// Owned byte buffer whose first byte sits on an 8-byte boundary.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AlignedVec {
    words: Vec<u64>,
    len: usize,
}

impl AlignedVec {
    /// `len` zero bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_ALIGN)],
            len,
        }
    }

    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        let mut vec = Self::zeroed(bytes.len());
        vec.as_mut_slice().copy_from_slice(bytes);
        vec
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::copy_from_slice(&bytes))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Address of the first byte, as seen by the process.
    pub fn base_address(&self) -> u64 {
        self.words.as_ptr() as usize as u64
    }

    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: u64 has no padding or invalid bit patterns, every word is
        // initialized, and `len` never exceeds the word storage.
        unsafe { std::slice::from_raw_parts(self.words.as_ptr().cast::<u8>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as in `as_slice`; any byte pattern is a valid u64.
        unsafe { std::slice::from_raw_parts_mut(self.words.as_mut_ptr().cast::<u8>(), self.len) }
    }
}

impl Deref for AlignedVec {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl DerefMut for AlignedVec {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl std::fmt::Debug for AlignedVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedVec")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
