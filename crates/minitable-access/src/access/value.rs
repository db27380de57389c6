//! Decoded scalar values.

use std::fmt;

use minitable_layout::{CType, FieldType};
use serde::Serialize;

/// One scalar value read out of a message.
///
/// Serializes untagged: numbers and booleans as themselves, strings as JSON
/// strings, bytes as arrays of numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    /// Also enums, which are stored as `int32`.
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Value an absent field of `field_type` reads as. `None` for messages
    /// and groups.
    pub fn default_for(field_type: FieldType) -> Option<Self> {
        let value = match field_type.ctype() {
            CType::Bool => Self::Bool(false),
            CType::Int32 | CType::Enum => Self::Int32(0),
            CType::UInt32 => Self::UInt32(0),
            CType::Int64 => Self::Int64(0),
            CType::UInt64 => Self::UInt64(0),
            CType::Float => Self::Float(0.0),
            CType::Double => Self::Double(0.0),
            CType::String => Self::String(String::new()),
            CType::Bytes => Self::Bytes(Vec::new()),
            CType::Message => return None,
        };
        Some(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::UInt32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::UInt64(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Double(v) => write!(f, "{v:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
        }
    }
}
