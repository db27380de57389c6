//! Presence encoding of a descriptor.
//!
//! One signed 16-bit value carries three disjoint meanings:
//!
//! | raw value | meaning                                                   |
//! | --------- | --------------------------------------------------------- |
//! | `0`       | no presence tracking, the field always counts as present  |
//! | `> 0`     | hasbit index into the bitset at the start of the message  |
//! | `< 0`     | `!raw` is the byte offset of the 32-bit oneof case field  |

use std::fmt;

/// Classified presence of a field, derived once from the raw `i16`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Presence {
    /// No hasbit and no oneof (e.g. a proto3 singular scalar).
    Implicit,
    /// Zero-based bit index into the message's hasbit bytes. Never 0.
    Hasbit(u16),
    /// Byte offset of the oneof discriminant within the message.
    OneofCase(u16),
}

impl Presence {
    /// Classify a raw presence value.
    ///
    /// The complement (not the negation) recovers the case offset, so `-1`
    /// maps to offset 0 and `i16::MIN` to offset 32767.
    pub fn from_raw(raw: i16) -> Self {
        if raw > 0 {
            Self::Hasbit(raw as u16)
        } else if raw < 0 {
            Self::OneofCase(!raw as u16)
        } else {
            Self::Implicit
        }
    }

    /// Encode back to the raw `i16`.
    ///
    /// # Panics
    /// Panics if the index or offset has no raw encoding: hasbit 0 (it would
    /// read back as implicit) or any value above `i16::MAX`.
    pub fn to_raw(self) -> i16 {
        match self {
            Self::Implicit => 0,
            Self::Hasbit(index) => {
                assert!(
                    (1..=i16::MAX as u16).contains(&index),
                    "hasbit index {index} has no presence encoding"
                );
                index as i16
            }
            Self::OneofCase(offset) => {
                assert!(
                    offset <= i16::MAX as u16,
                    "oneof case offset {offset} has no presence encoding"
                );
                !(offset as i16)
            }
        }
    }

    pub fn hasbit_index(self) -> Option<u16> {
        match self {
            Self::Hasbit(index) => Some(index),
            _ => None,
        }
    }

    pub fn oneof_case_offset(self) -> Option<u16> {
        match self {
            Self::OneofCase(offset) => Some(offset),
            _ => None,
        }
    }

    /// Whether presence is recorded in the message at all.
    pub fn is_tracked(self) -> bool {
        !matches!(self, Self::Implicit)
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implicit => f.write_str("implicit"),
            Self::Hasbit(index) => write!(f, "hasbit {index}"),
            Self::OneofCase(offset) => write!(f, "oneof @{offset}"),
        }
    }
}

/// Byte index and bit mask of a hasbit.
pub fn hasbit_location(index: u16) -> (usize, u8) {
    (index as usize / 8, 1u8 << (index % 8))
}
