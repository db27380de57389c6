//! Tests for debug layout verification.

use minitable_layout::{
    FieldMode, FieldRep, FieldType, MiniTable, MiniTableField, NO_SUB, Platform, Presence,
};

use super::debug_verify_layout;

fn check(fields: &[MiniTableField], message_size: usize) {
    let table = MiniTable::from_fields(fields).unwrap();
    debug_verify_layout(&table, message_size);
}

#[test]
fn consistent_table_passes() {
    check(
        &[
            MiniTableField::scalar(1, 8, Presence::Hasbit(1), FieldType::Int32),
            MiniTableField::scalar(2, 16, Presence::Implicit, FieldType::Double),
            MiniTableField::scalar(3, 28, Presence::OneofCase(24), FieldType::Bool),
        ],
        32,
    );
}

#[test]
fn empty_table_passes() {
    check(&[], 0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "BUG: descriptor table does not fit a 16-byte message")]
fn storage_past_the_end() {
    check(
        &[MiniTableField::scalar(1, 12, Presence::Implicit, FieldType::Int64)],
        16,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "[0] #1: storage @12+8 runs past the end")]
fn reports_the_storage_range() {
    check(
        &[MiniTableField::scalar(1, 12, Presence::Implicit, FieldType::Int64)],
        16,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "hasbit 200 lives in byte 25, past the end")]
fn hasbit_past_the_end() {
    check(
        &[MiniTableField::scalar(1, 8, Presence::Hasbit(200), FieldType::Int32)],
        16,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "oneof case @14 is not 4-byte aligned")]
fn misaligned_oneof_case() {
    check(
        &[MiniTableField::scalar(1, 8, Presence::OneofCase(14), FieldType::Int32)],
        32,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "[1] #5: number already used by [0]")]
fn duplicate_numbers() {
    check(
        &[
            MiniTableField::scalar(5, 4, Presence::Implicit, FieldType::Int32),
            MiniTableField::scalar(5, 8, Presence::Implicit, FieldType::Int32),
        ],
        16,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "mode rep 4byte does not match int64 (8byte)")]
fn rep_mismatch() {
    let mode = FieldMode::scalar(FieldRep::FourByte).to_byte();
    check(
        &[MiniTableField::new(1, 8, 0, NO_SUB, FieldType::Int64 as u8, mode)],
        16,
    );
}

#[test]
fn map_slot_is_pointer_sized() {
    let mode = FieldMode::map(&Platform::NATIVE).to_byte();
    check(
        &[MiniTableField::new(4, 8, 0, 0, FieldType::Message as u8, mode)],
        16,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "[0] #4: storage @14+")]
fn map_slot_past_the_end() {
    let mode = FieldMode::map(&Platform::NATIVE).to_byte();
    check(
        &[MiniTableField::new(4, 14, 0, 0, FieldType::Message as u8, mode)],
        16,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "invalid mode byte 0x03")]
fn invalid_mode() {
    check(&[MiniTableField::new(1, 8, 0, NO_SUB, FieldType::Int32 as u8, 0x03)], 16);
}

#[test]
#[cfg(debug_assertions)]
fn every_problem_is_listed() {
    let fields = [
        MiniTableField::scalar(1, 30, Presence::Implicit, FieldType::Int32),
        MiniTableField::new(2, 8, 0, NO_SUB, 77, FieldMode::scalar(FieldRep::FourByte).to_byte()),
    ];
    let table = MiniTable::from_fields(&fields).unwrap();

    let panic = std::panic::catch_unwind(|| debug_verify_layout(&table, 32)).unwrap_err();
    let message = panic.downcast_ref::<String>().unwrap();

    assert!(message.contains("[0] #1: storage @30+4 runs past the end"));
    assert!(message.contains("[1] #2: unknown descriptor type 77"));
}
