//! Bit-level validation of the f32 → bf16 truncating store.
//!
//! This is the single most failure-prone behavior in the crate: hardware
//! truncate-to-bf16 drops the low 16 bits of the f32 layout verbatim,
//! while a naive narrowing cast rounds to nearest. These tests pin the
//! truncation down bit for bit.

use half::{bf16, f16};
use lanevec::{store_fp32, write_fp32};

#[test]
fn test_one_truncates_to_one() {
    // 0x3F800000 (1.0) → high half 0x3F80, still exactly 1.0.
    let mut out = bf16::ZERO;
    write_fp32(f32::from_bits(0x3F80_0000), &mut out);
    assert_eq!(out.to_bits(), 0x3F80);
    assert_eq!(out.to_f32(), 1.0);
}

#[test]
fn test_just_below_one_is_not_rounded_up() {
    // 0x3F7FFFFF is the largest f32 below 1.0. Round-to-nearest would
    // produce 0x3F80 (1.0); truncation must produce 0x3F7F.
    let v = f32::from_bits(0x3F7F_FFFF);
    let mut out = bf16::ZERO;
    write_fp32(v, &mut out);
    assert_eq!(out.to_bits(), 0x3F7F);

    // And the rounding cast really does disagree, so this test would
    // catch a from_f32-based implementation.
    assert_eq!(bf16::from_f32(v).to_bits(), 0x3F80);
}

#[test]
fn test_truncation_is_high_half_for_arbitrary_patterns() {
    for bits in [0x0000_0001u32, 0x3F80_0001, 0x4049_0FDB, 0xC2F6_E979, 0x7F7F_FFFF] {
        let v = f32::from_bits(bits);
        let mut out = bf16::ZERO;
        write_fp32(v, &mut out);
        assert_eq!(out.to_bits(), (bits >> 16) as u16, "pattern {bits:#010X}");
    }
}

#[test]
fn test_truncation_preserves_sign_exponent_and_specials() {
    let cases = [
        (f32::INFINITY, 0x7F80u16),
        (f32::NEG_INFINITY, 0xFF80u16),
        (0.0f32, 0x0000u16),
        (-0.0f32, 0x8000u16),
    ];
    for (v, expected) in cases {
        let mut out = bf16::ZERO;
        write_fp32(v, &mut out);
        assert_eq!(out.to_bits(), expected);
    }

    // NaN stays NaN: the high half keeps the exponent and the top of the
    // payload. (A NaN with an all-zero payload top would need hardware's
    // quieting behavior, which truncation does not model.)
    let mut out = bf16::ZERO;
    write_fp32(f32::from_bits(0x7FC0_0001), &mut out);
    assert!(out.is_nan());
}

#[test]
fn test_raw_store_into_buffer() {
    let mut buf = vec![bf16::ZERO; 4];
    let values = [1.0f32, f32::from_bits(0x3F7F_FFFF), -2.5, 0.333_333_34];
    for (i, &v) in values.iter().enumerate() {
        unsafe { store_fp32(v, buf.as_mut_ptr().add(i)) };
    }
    for (slot, v) in buf.iter().zip(values.iter()) {
        assert_eq!(slot.to_bits(), (v.to_bits() >> 16) as u16);
    }
}

#[test]
fn test_f16_store_rounds_unlike_bf16() {
    // The f16 path is an ordinary rounding conversion; only bf16 truncates.
    let v = f32::from_bits(0x3F7F_FFFF); // just below 1.0
    let mut out = f16::ZERO;
    write_fp32(v, &mut out);
    assert_eq!(out, f16::from_f32(v));
    assert_eq!(out.to_f32(), 1.0);
}

#[test]
fn test_f32_store_is_bit_identity() {
    for bits in [0x0000_0000u32, 0x3F80_0000, 0x7FC0_0000, 0xFF80_0000] {
        let mut out = 0.0f32;
        write_fp32(f32::from_bits(bits), &mut out);
        assert_eq!(out.to_bits(), bits);
    }
}
