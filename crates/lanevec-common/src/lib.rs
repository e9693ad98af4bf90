//! Common element types and conversion rules for lanevec
//!
//! This crate provides the foundational pieces shared by the vector layer:
//! the closed set of supported scalar element types (`f32`, IEEE `f16`,
//! `bf16`), the precision-narrowing rules used when storing f32 results
//! back to memory, and the error types returned by checked constructors.

pub mod error;
pub mod math;
pub mod scalar;

pub use error::{LaneVecError, Result};
pub use math::erf;
pub use scalar::{Scalar, store_fp32, write_fp32};

// Re-export the 16-bit element types so downstream crates name one `half`.
pub use half::{bf16, f16};
