//! Message field access.
//!
//! `MessageView` is the unchecked layer: it trusts the descriptor and reads
//! whatever bytes sit at the given offset. `FieldReader` sits on top of it and
//! validates each descriptor against the message before decoding.

mod error;
mod memory;
mod message;
mod reader;
mod trace;
mod value;
mod verify;

#[cfg(test)]
mod verify_tests;

pub use error::AccessError;
pub use memory::{AddressSpace, NativeMemory, SegmentMemory};
pub use message::MessageView;
pub use reader::{FieldEntry, FieldReader};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use value::FieldValue;
pub use verify::debug_verify_layout;
