use super::*;
use crate::FIELD_RECORD_SIZE;

#[test]
fn record_size() {
    assert_eq!(std::mem::size_of::<MiniTableField>(), 12);
    assert_eq!(FIELD_RECORD_SIZE, 12);
}

#[test]
fn byte_positions() {
    let field = MiniTableField::new(0x0102_0304, 0x0506, 0x0708, 0x090a, 0x0b, 0x0c);
    let bytes = field.to_bytes();

    assert_eq!(bytes[0..4], 0x0102_0304u32.to_ne_bytes());
    assert_eq!(bytes[4..6], 0x0506u16.to_ne_bytes());
    assert_eq!(bytes[6..8], 0x0708i16.to_ne_bytes());
    assert_eq!(bytes[8..10], 0x090au16.to_ne_bytes());
    assert_eq!(bytes[10], 0x0b);
    assert_eq!(bytes[11], 0x0c);
}

#[test]
fn encoding_matches_native_struct_memory() {
    let field = MiniTableField::new(77, 24, -41, NO_SUB, FieldType::Int64 as u8, 0xc2);
    // SAFETY: MiniTableField is repr(C) with no padding; all 12 bytes are initialized.
    let native: &[u8] = unsafe {
        std::slice::from_raw_parts(
            (&field as *const MiniTableField).cast::<u8>(),
            FIELD_RECORD_SIZE,
        )
    };
    assert_eq!(native, &field.to_bytes()[..]);
}

#[test]
fn view_reads_every_attribute() {
    let field = MiniTableField::new(3, 40, -33, 2, FieldType::Message as u8, 0xc2);
    let bytes = field.to_bytes();
    let view = FieldView::new(&bytes);

    assert_eq!(view.number(), 3);
    assert_eq!(view.offset(), 40);
    assert_eq!(view.presence(), -33);
    assert_eq!(view.submsg_index(), 2);
    assert_eq!(view.descriptor_type(), 11);
    assert_eq!(view.mode(), 0xc2);
    assert_eq!(view.classify_presence(), Presence::OneofCase(32));
    assert_eq!(view.field_type(), Some(FieldType::Message));
    assert_eq!(view.to_record(), field);
}

#[test]
fn view_ignores_trailing_bytes() {
    let mut bytes = MiniTableField::new(9, 16, 0, NO_SUB, 5, 0x42).to_bytes().to_vec();
    bytes.extend_from_slice(&[0xff; 4]);
    let view = FieldView::new(&bytes);
    assert_eq!(view.as_bytes().len(), 12);
    assert_eq!(view.number(), 9);
    assert_eq!(MiniTableField::from_bytes(&bytes).number(), 9);
}

#[test]
#[should_panic(expected = "descriptor record needs 12 bytes")]
fn view_rejects_short_record() {
    FieldView::new(&[0u8; 11]);
}

#[test]
fn scalar_builder() {
    let field = MiniTableField::scalar(1, 8, Presence::Hasbit(1), FieldType::SInt32);
    assert_eq!(field.number(), 1);
    assert_eq!(field.offset(), 8);
    assert_eq!(field.presence(), 1);
    assert_eq!(field.submsg_index(), NO_SUB);
    assert_eq!(field.field_type(), Some(FieldType::SInt32));
    assert_eq!(field.field_mode(), FieldMode::scalar(FieldRep::FourByte));

    let field = MiniTableField::scalar(3, 48, Presence::OneofCase(40), FieldType::String);
    assert_eq!(field.presence(), !40);
    assert_eq!(field.field_mode().rep(), FieldRep::StringView);
}

#[test]
#[should_panic(expected = "message field 4 is not a scalar leaf")]
fn scalar_builder_rejects_messages() {
    MiniTableField::scalar(4, 16, Presence::Implicit, FieldType::Message);
}

#[test]
fn unknown_descriptor_type() {
    let field = MiniTableField::new(1, 0, 0, NO_SUB, 0, 0x02);
    assert_eq!(field.field_type(), None);
}
