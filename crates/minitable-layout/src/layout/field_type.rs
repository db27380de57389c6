//! Descriptor types and their in-memory value types.

use super::mode::FieldRep;
use crate::platform::Platform;

/// Protobuf descriptor type, as stored in the record's `descriptor_type` byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum FieldType {
    Double = 1,
    Float = 2,
    Int64 = 3,
    UInt64 = 4,
    Int32 = 5,
    Fixed64 = 6,
    Fixed32 = 7,
    Bool = 8,
    String = 9,
    Group = 10,
    Message = 11,
    Bytes = 12,
    UInt32 = 13,
    Enum = 14,
    SFixed32 = 15,
    SFixed64 = 16,
    SInt32 = 17,
    SInt64 = 18,
}

impl FieldType {
    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::Double),
            2 => Some(Self::Float),
            3 => Some(Self::Int64),
            4 => Some(Self::UInt64),
            5 => Some(Self::Int32),
            6 => Some(Self::Fixed64),
            7 => Some(Self::Fixed32),
            8 => Some(Self::Bool),
            9 => Some(Self::String),
            10 => Some(Self::Group),
            11 => Some(Self::Message),
            12 => Some(Self::Bytes),
            13 => Some(Self::UInt32),
            14 => Some(Self::Enum),
            15 => Some(Self::SFixed32),
            16 => Some(Self::SFixed64),
            17 => Some(Self::SInt32),
            18 => Some(Self::SInt64),
            _ => None,
        }
    }

    /// Value type the field is stored as. Wire encodings (zigzag, fixed)
    /// collapse onto the same in-memory type.
    pub fn ctype(self) -> CType {
        match self {
            Self::Double => CType::Double,
            Self::Float => CType::Float,
            Self::Int64 | Self::SInt64 | Self::SFixed64 => CType::Int64,
            Self::Int32 | Self::SInt32 | Self::SFixed32 => CType::Int32,
            Self::UInt64 | Self::Fixed64 => CType::UInt64,
            Self::UInt32 | Self::Fixed32 => CType::UInt32,
            Self::Enum => CType::Enum,
            Self::Bool => CType::Bool,
            Self::String => CType::String,
            Self::Bytes => CType::Bytes,
            Self::Group | Self::Message => CType::Message,
        }
    }

    /// Whether values of this type live inline in the message.
    pub fn is_scalar_leaf(self) -> bool {
        !matches!(self, Self::Group | Self::Message)
    }

    /// Storage rep of a singular field of this type.
    ///
    /// Sub-messages get a pointer-sized slot, hence the platform.
    pub fn rep(self, platform: &Platform) -> FieldRep {
        match self.ctype() {
            CType::Bool => FieldRep::OneByte,
            CType::Float | CType::Int32 | CType::UInt32 | CType::Enum => FieldRep::FourByte,
            CType::Double | CType::Int64 | CType::UInt64 => FieldRep::EightByte,
            CType::String | CType::Bytes => FieldRep::StringView,
            CType::Message => FieldRep::pointer(platform),
        }
    }

    /// Lowercase name as written in a `.proto` file.
    pub fn name(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Int32 => "int32",
            Self::Fixed64 => "fixed64",
            Self::Fixed32 => "fixed32",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Group => "group",
            Self::Message => "message",
            Self::Bytes => "bytes",
            Self::UInt32 => "uint32",
            Self::Enum => "enum",
            Self::SFixed32 => "sfixed32",
            Self::SFixed64 => "sfixed64",
            Self::SInt32 => "sint32",
            Self::SInt64 => "sint64",
        }
    }
}

/// In-memory value type of a field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum CType {
    Bool = 1,
    Float = 2,
    Int32 = 3,
    UInt32 = 4,
    /// Enums are stored as `int32`.
    Enum = 5,
    Message = 6,
    Double = 7,
    Int64 = 8,
    UInt64 = 9,
    String = 10,
    Bytes = 11,
}

impl CType {
    /// Size of one stored value for the given platform.
    pub fn size(self, platform: &Platform) -> usize {
        match self {
            Self::Bool => 1,
            Self::Float | Self::Int32 | Self::UInt32 | Self::Enum => 4,
            Self::Double | Self::Int64 | Self::UInt64 => 8,
            Self::Message => platform.pointer_size(),
            Self::String | Self::Bytes => platform.string_view_size(),
        }
    }
}
