use super::presence::{Presence, hasbit_location};

#[test]
fn zero_is_implicit() {
    assert_eq!(Presence::from_raw(0), Presence::Implicit);
    assert!(!Presence::Implicit.is_tracked());
}

#[test]
fn positive_is_hasbit() {
    assert_eq!(Presence::from_raw(1), Presence::Hasbit(1));
    assert_eq!(Presence::from_raw(9), Presence::Hasbit(9));
    assert_eq!(Presence::from_raw(i16::MAX), Presence::Hasbit(32767));
    assert_eq!(Presence::from_raw(9).hasbit_index(), Some(9));
    assert_eq!(Presence::from_raw(9).oneof_case_offset(), None);
}

#[test]
fn negative_is_complemented_case_offset() {
    // Complement, not negation: -1 is offset 0, -41 is offset 40.
    assert_eq!(Presence::from_raw(-1), Presence::OneofCase(0));
    assert_eq!(Presence::from_raw(-41), Presence::OneofCase(40));
    assert_eq!(Presence::from_raw(!40), Presence::OneofCase(40));
    assert_eq!(Presence::from_raw(i16::MIN), Presence::OneofCase(32767));
    assert_eq!(Presence::from_raw(-41).oneof_case_offset(), Some(40));
    assert_eq!(Presence::from_raw(-41).hasbit_index(), None);
}

#[test]
fn raw_roundtrip_covers_every_value() {
    for raw in i16::MIN..=i16::MAX {
        assert_eq!(Presence::from_raw(raw).to_raw(), raw);
    }
}

#[test]
#[should_panic(expected = "hasbit index 0")]
fn hasbit_zero_has_no_encoding() {
    Presence::Hasbit(0).to_raw();
}

#[test]
#[should_panic(expected = "oneof case offset 40000")]
fn oversized_case_offset_has_no_encoding() {
    Presence::OneofCase(40000).to_raw();
}

#[test]
fn hasbit_byte_and_mask() {
    assert_eq!(hasbit_location(1), (0, 0b0000_0010));
    assert_eq!(hasbit_location(7), (0, 0b1000_0000));
    assert_eq!(hasbit_location(8), (1, 0b0000_0001));
    assert_eq!(hasbit_location(21), (2, 0b0010_0000));
}

#[test]
fn display() {
    assert_eq!(Presence::Implicit.to_string(), "implicit");
    assert_eq!(Presence::Hasbit(3).to_string(), "hasbit 3");
    assert_eq!(Presence::OneofCase(40).to_string(), "oneof @40");
}
