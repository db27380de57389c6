//! Address spaces that resolve the data pointer of a string view.
//!
//! A message stores string and bytes fields as a pointer word plus a length
//! word. The pointer designates memory outside the message, so reading the
//! payload needs something that knows what that address means.

use std::collections::BTreeMap;

use minitable_layout::AlignedVec;

use super::error::AccessError;

/// Resolver from a pointer word stored in a message to the bytes it designates.
pub trait AddressSpace {
    /// `len` bytes starting at `address`, or `None` if they are not mapped.
    ///
    /// A zero `len` resolves to an empty slice without inspecting `address`.
    fn try_resolve(&self, address: u64, len: usize) -> Option<&[u8]>;

    /// Like [`try_resolve`](Self::try_resolve), for callers that trust the
    /// message.
    ///
    /// # Panics
    /// Panics if the range is not mapped.
    fn resolve(&self, address: u64, len: usize) -> &[u8] {
        match self.try_resolve(address, len) {
            Some(bytes) => bytes,
            None => panic!("{len} bytes at address {address:#x} are not mapped"),
        }
    }
}

/// The current process's own memory: addresses are real pointers.
#[derive(Debug)]
pub struct NativeMemory {
    _private: (),
}

impl NativeMemory {
    /// # Safety
    /// Every non-empty range resolved through the returned value must be
    /// readable, and must stay alive and unmodified while the resolved slice
    /// is in use. In practice: only resolve string views of a live message
    /// built by the native producer.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressSpace for NativeMemory {
    fn try_resolve(&self, address: u64, len: usize) -> Option<&[u8]> {
        if len == 0 {
            return Some(&[]);
        }
        if address == 0 {
            return None;
        }
        let address = usize::try_from(address).ok()?;
        address.checked_add(len)?;
        // SAFETY: upheld by the contract of `NativeMemory::new`.
        Some(unsafe { std::slice::from_raw_parts(address as *const u8, len) })
    }
}

/// Simulated address space made of non-overlapping byte segments.
///
/// Used to back string views of messages captured from another process (or
/// another pointer width), where pointer words are meaningless locally.
#[derive(Clone, Debug, Default)]
pub struct SegmentMemory {
    segments: BTreeMap<u64, AlignedVec>,
}

impl SegmentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `bytes` at `base`. Empty segments map nothing.
    pub fn map(&mut self, base: u64, bytes: &[u8]) -> Result<(), AccessError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let len = bytes.len();
        let end = base
            .checked_add(len as u64)
            .ok_or(AccessError::AddressOverflow { base, len })?;

        // Segments never overlap, so only the last one starting below `end`
        // can reach into the new range.
        if let Some((&existing, segment)) = self.segments.range(..end).next_back()
            && existing + segment.len() as u64 > base
        {
            return Err(AccessError::OverlappingSegment {
                base,
                len,
                existing,
            });
        }
        self.segments.insert(base, AlignedVec::copy_from_slice(bytes));
        Ok(())
    }

    /// Builder form of [`map`](Self::map).
    pub fn with_segment(mut self, base: u64, bytes: &[u8]) -> Result<Self, AccessError> {
        self.map(base, bytes)?;
        Ok(self)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl AddressSpace for SegmentMemory {
    fn try_resolve(&self, address: u64, len: usize) -> Option<&[u8]> {
        if len == 0 {
            return Some(&[]);
        }
        let (&base, segment) = self.segments.range(..=address).next_back()?;
        let start = usize::try_from(address - base).ok()?;
        segment.get(start..start.checked_add(len)?)
    }
}
