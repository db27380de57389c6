use super::*;

#[test]
fn native_matches_build_target() {
    assert_eq!(Platform::NATIVE.pointer_size(), std::mem::size_of::<usize>());
    assert_eq!(Platform::NATIVE.descriptor_stride(), 12);
    assert!(Platform::NATIVE.is_native());
    assert_eq!(Platform::default(), Platform::NATIVE);
}

#[test]
fn simulated_widths() {
    assert_eq!(Platform::BITS_32.pointer_size(), 4);
    assert_eq!(Platform::BITS_32.string_view_size(), 8);
    assert_eq!(Platform::BITS_64.pointer_size(), 8);
    assert_eq!(Platform::BITS_64.string_view_size(), 16);
    assert_eq!(Platform::for_pointer_bits(32).unwrap(), Platform::BITS_32);
    assert_eq!(Platform::for_pointer_bits(64).unwrap(), Platform::BITS_64);
}

#[test]
fn rejects_unsupported_pointer_size() {
    let err = Platform::new(2, FIELD_RECORD_SIZE).unwrap_err();
    assert_eq!(err, LayoutError::UnsupportedPointerSize(2));
    assert!(Platform::for_pointer_bits(16).is_err());
}

#[test]
fn pointer_bits_must_be_exact() {
    for bits in [0, 31, 33, 39, 63, 65, 128] {
        assert_eq!(
            Platform::for_pointer_bits(bits).unwrap_err(),
            LayoutError::UnsupportedPointerWidth(bits)
        );
    }
    insta::assert_snapshot!(
        Platform::for_pointer_bits(39).unwrap_err(),
        @"unsupported pointer width: 39 bits (expected 32 or 64)"
    );
}

#[test]
fn rejects_short_stride() {
    let err = Platform::BITS_64.with_descriptor_stride(8).unwrap_err();
    assert_eq!(
        err,
        LayoutError::StrideTooSmall {
            stride: 8,
            record: 12
        }
    );
    let padded = Platform::BITS_64.with_descriptor_stride(16).unwrap();
    assert_eq!(padded.descriptor_stride(), 16);
    assert_eq!(padded.pointer_size(), 8);
}

#[test]
fn word_roundtrip_per_width() {
    let w32 = Platform::BITS_32.write_word(0xdead_beef);
    assert_eq!(w32.len(), 4);
    assert_eq!(Platform::BITS_32.read_word(&w32), 0xdead_beef);

    let w64 = Platform::BITS_64.write_word(0x0123_4567_89ab_cdef);
    assert_eq!(w64.len(), 8);
    assert_eq!(Platform::BITS_64.read_word(&w64), 0x0123_4567_89ab_cdef);
}

#[test]
fn narrow_word_truncates() {
    let w = Platform::BITS_32.write_word(0x1_0000_0002);
    assert_eq!(Platform::BITS_32.read_word(&w), 2);
}
