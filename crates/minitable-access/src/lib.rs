#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Presence tests and typed field reads over packed minitable messages.
//!
//! Given a descriptor table from `minitable-layout` and the bytes of one
//! in-memory message, this crate answers "is field N present?" and "what
//! scalar value does field N hold?" without generated per-type code.

pub mod access;
pub mod raw;


pub use access::{
    AccessError, AddressSpace, FieldEntry, FieldReader, FieldValue, MessageView, NativeMemory,
    NoopTracer, PrintTracer, SegmentMemory, Tracer, Verbosity, debug_verify_layout,
};
