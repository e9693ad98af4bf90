//! Scalar element types and precision conversion rules.
//!
//! # Supported element types
//!
//! The set is closed: `f32`, IEEE `half::f16`, and `half::bf16`. Extending
//! it means adding a `Scalar` impl here and a natural-width entry in the
//! vector layer's dispatch table; nothing falls back silently.
//!
//! # Store narrowing
//!
//! Kernels accumulate in f32 and narrow on store. The narrowing rule is
//! per-type and must match the hardware conversion each type's accelerated
//! path performs:
//!
//! - `f32`: identity.
//! - `f16`: round-to-nearest-even (`f16::from_f32`).
//! - `bf16`: **bit-pattern truncation**: the high-order 16 bits of the
//!   f32's IEEE-754 layout, verbatim. This is not round-to-nearest and is
//!   slightly biased toward zero; hardware truncate-to-bf16 behaves the
//!   same way, and parity with it is bit-for-bit required. Expressed as
//!   `to_bits() >> 16`, which extracts the arithmetic high half regardless
//!   of byte order.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use half::{bf16, f16};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for half::f16 {}
    impl Sealed for half::bf16 {}
}

/// A floating-point lane element.
///
/// Sealed: exactly `f32`, `f16`, and `bf16` implement this. Arithmetic on
/// 16-bit lanes uses `half`'s operator impls, which round per operation
/// the way scalar hardware arithmetic on those types does.
pub trait Scalar:
    sealed::Sealed
    + Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity, used for zero-fill and reduction accumulators.
    const ZERO: Self;

    /// Widen to f32. Exact for every supported type.
    fn to_f32(self) -> f32;

    /// Narrow from f32 with round-to-nearest. This is the conversion used
    /// by regrouping construction and lane-wise transcendentals, matching
    /// an ordinary scalar cast.
    fn from_f32(v: f32) -> Self;

    /// Narrow an f32 for a widen-store. Identical to [`Scalar::from_f32`]
    /// for f32 and f16; bf16 overrides this with bit-pattern truncation.
    fn narrow_for_store(v: f32) -> Self {
        Self::from_f32(v)
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;

    #[inline(always)]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline(always)]
    fn from_f32(v: f32) -> Self {
        v
    }
}

impl Scalar for f16 {
    const ZERO: Self = f16::ZERO;

    #[inline(always)]
    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }

    #[inline(always)]
    fn from_f32(v: f32) -> Self {
        f16::from_f32(v)
    }
}

impl Scalar for bf16 {
    const ZERO: Self = bf16::ZERO;

    #[inline(always)]
    fn to_f32(self) -> f32 {
        bf16::to_f32(self)
    }

    #[inline(always)]
    fn from_f32(v: f32) -> Self {
        bf16::from_f32(v)
    }

    // Truncate, do not round: keep the high half-word of the f32 layout.
    #[inline(always)]
    fn narrow_for_store(v: f32) -> Self {
        bf16::from_bits((v.to_bits() >> 16) as u16)
    }
}

/// Narrow an f32 result to `T` and write it through a raw pointer.
///
/// # Safety
///
/// `ptr` must be valid for a write of one `T`. This is the trusted-caller
/// hot-path primitive; use [`write_fp32`] where a reference is available.
#[inline(always)]
pub unsafe fn store_fp32<T: Scalar>(v: f32, ptr: *mut T) {
    unsafe { ptr.write(T::narrow_for_store(v)) }
}

/// Safe counterpart of [`store_fp32`].
#[inline(always)]
pub fn write_fp32<T: Scalar>(v: f32, dst: &mut T) {
    *dst = T::narrow_for_store(v);
}
