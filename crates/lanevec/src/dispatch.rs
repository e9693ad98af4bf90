//! Compile-time mapping from element type to natural vector width.
//!
//! Each supported element type has exactly one vector shape considered
//! natural for it, reflecting the register sizing of the reference
//! hardware target: f32 → 8 lanes, f16 → 16 lanes, bf16 → 8 lanes. The
//! mapping is closed and resolved entirely at compile time; instantiating
//! `NaturalVec<T>` for any other `T` is a build failure, never a silent
//! fallback to some default width.

use half::{bf16, f16};
use lanevec_common::Scalar;

use crate::vec::{BF16Vec8, FP16Vec16, FP32Vec8};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for half::f16 {}
    impl Sealed for half::bf16 {}
}

/// Element types with a natural vector shape.
pub trait VecType: Scalar + sealed::Sealed {
    /// The vector variant used when a caller does not pick a width.
    type Natural;

    /// Lane count of [`VecType::Natural`].
    const NATURAL_LANES: usize;
}

impl VecType for f32 {
    type Natural = FP32Vec8;
    const NATURAL_LANES: usize = 8;
}

impl VecType for f16 {
    type Natural = FP16Vec16;
    const NATURAL_LANES: usize = 16;
}

impl VecType for bf16 {
    type Natural = BF16Vec8;
    const NATURAL_LANES: usize = 8;
}

/// The natural vector type for element type `T`.
pub type NaturalVec<T> = <T as VecType>::Natural;
