//! Width-generic vector arithmetic for CPU inference kernels
//!
//! lanevec is the numerical foundation the CPU compute kernels stand on
//! when no platform SIMD specialization applies: a fixed-width,
//! array-backed vector type generic over element type and lane count, with
//! elementwise arithmetic, reductions, precision-changing construction,
//! and the store primitives that narrow f32 results back to the calling
//! precision (including hardware-parity bit-truncation to bf16).
//!
//! Everything is a pure function of by-value inputs: no allocation, no
//! shared state, no runtime dispatch. Shape mismatches are type errors and
//! the regrouping width rule is checked at compile time, so the hot-path
//! surface has no runtime failure mode at all. Raw-pointer load/store
//! keeps the trusted-caller contract of the kernels above it; checked
//! slice variants exist for tests.

pub mod backend;
pub mod dispatch;
pub mod ops;
pub mod vec;

pub use backend::BackendInfo;
pub use dispatch::{NaturalVec, VecType};
pub use ops::{fma, prefetch, prefetch_is_native};
pub use vec::{
    BF16Vec8, BF16Vec16, FP16Vec8, FP16Vec16, FP32Vec4, FP32Vec8, FP32Vec16, FpVec,
};

pub use lanevec_common::{LaneVecError, Result, Scalar, erf, store_fp32, write_fp32};

// The element types, so callers need only this crate in scope.
pub use half::{bf16, f16};
