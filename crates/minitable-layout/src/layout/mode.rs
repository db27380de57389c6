//! Storage mode byte of a descriptor.
//!
//! Byte layout:
//! - Bits 1-0: kind (00=Map, 01=Array, 10=Scalar, 11=invalid)
//! - Bit 2: packed
//! - Bit 3: extension
//! - Bit 4: alternate (proto3 enum stored as int32, unvalidated string stored as bytes)
//! - Bits 7-6: storage rep (00=1 byte, 01=4 bytes, 10=string view, 11=8 bytes)

use std::fmt;

use crate::platform::Platform;

const KIND_MASK: u8 = 0b11;
const PACKED: u8 = 1 << 2;
const EXTENSION: u8 = 1 << 3;
const ALTERNATE: u8 = 1 << 4;
const REP_SHIFT: u8 = 6;

/// Container kind of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldKind {
    Map = 0,
    Array = 1,
    Scalar = 2,
}

impl FieldKind {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Map),
            1 => Some(Self::Array),
            2 => Some(Self::Scalar),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Array => "array",
            Self::Scalar => "scalar",
        }
    }
}

/// In-message storage representation of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldRep {
    OneByte = 0,
    FourByte = 1,
    StringView = 2,
    EightByte = 3,
}

impl FieldRep {
    pub fn from_u8(v: u8) -> Self {
        match v & 0b11 {
            0 => Self::OneByte,
            1 => Self::FourByte,
            2 => Self::StringView,
            _ => Self::EightByte,
        }
    }

    /// Rep of a pointer-sized slot (sub-message, array or map handle).
    pub fn pointer(platform: &Platform) -> Self {
        if platform.pointer_size() == 4 {
            Self::FourByte
        } else {
            Self::EightByte
        }
    }

    pub fn size(self, platform: &Platform) -> usize {
        match self {
            Self::OneByte => 1,
            Self::FourByte => 4,
            Self::StringView => platform.string_view_size(),
            Self::EightByte => 8,
        }
    }

    /// Natural alignment. A string view aligns like its pointer words.
    pub fn align(self, platform: &Platform) -> usize {
        match self {
            Self::OneByte => 1,
            Self::FourByte => 4,
            Self::StringView => platform.pointer_size(),
            Self::EightByte => 8,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::OneByte => "1byte",
            Self::FourByte => "4byte",
            Self::StringView => "strview",
            Self::EightByte => "8byte",
        }
    }
}

/// Decoded mode byte.
///
/// Keeps the raw byte; accessors decode lazily. An invalid kind (`0b11`)
/// stays representable so corrupted tables can still be dumped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldMode(u8);

impl FieldMode {
    pub fn from_byte(b: u8) -> Self {
        Self(b)
    }

    pub fn to_byte(self) -> u8 {
        self.0
    }

    /// Mode byte of a singular field with the given rep.
    pub fn scalar(rep: FieldRep) -> Self {
        Self(FieldKind::Scalar as u8 | ((rep as u8) << REP_SHIFT))
    }

    /// Mode byte of a repeated field (pointer-sized slot).
    pub fn array(platform: &Platform) -> Self {
        Self(FieldKind::Array as u8 | ((FieldRep::pointer(platform) as u8) << REP_SHIFT))
    }

    /// Mode byte of a map field (pointer-sized slot).
    pub fn map(platform: &Platform) -> Self {
        Self(FieldKind::Map as u8 | ((FieldRep::pointer(platform) as u8) << REP_SHIFT))
    }

    pub fn packed(self) -> Self {
        Self(self.0 | PACKED)
    }

    pub fn extension(self) -> Self {
        Self(self.0 | EXTENSION)
    }

    pub fn alternate(self) -> Self {
        Self(self.0 | ALTERNATE)
    }

    /// `None` for the reserved kind bits `0b11`.
    pub fn kind(self) -> Option<FieldKind> {
        FieldKind::from_u8(self.0 & KIND_MASK)
    }

    pub fn rep(self) -> FieldRep {
        FieldRep::from_u8(self.0 >> REP_SHIFT)
    }

    pub fn is_scalar(self) -> bool {
        self.kind() == Some(FieldKind::Scalar)
    }

    pub fn is_packed(self) -> bool {
        self.0 & PACKED != 0
    }

    pub fn is_extension(self) -> bool {
        self.0 & EXTENSION != 0
    }

    pub fn is_alternate(self) -> bool {
        self.0 & ALTERNATE != 0
    }
}

impl fmt::Display for FieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{}/{}", kind.name(), self.rep().name())?,
            None => write!(f, "invalid({:#04x})", self.0)?,
        }
        if self.is_packed() {
            f.write_str("+packed")?;
        }
        if self.is_extension() {
            f.write_str("+ext")?;
        }
        if self.is_alternate() {
            f.write_str("+alt")?;
        }
        Ok(())
    }
}

impl fmt::Debug for FieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldMode({self})")
    }
}
