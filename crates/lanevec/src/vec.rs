//! Width-generic fixed-size vector container.
//!
//! # Design
//!
//! `FpVec<T, N>` is the scalar-loop rendition of a hardware vector
//! register: N lanes of `T` in a plain array, `Copy` value semantics, no
//! heap, no runtime shape state. Combining vectors of different lane
//! counts is a type error, and regrouping construction checks its
//! divisibility precondition at compile time, so the operation surface has
//! no runtime error path at all; the two slice-based constructors are the
//! deliberate checked exception for tests and callers that want bounds
//! enforcement.
//!
//! Intrinsics-backed specializations implement the same surface per
//! platform; this generic form is the correctness reference they are
//! validated against, and the fallback on architectures without one.

use std::ops::{Add, Div, Mul, Sub};
use std::ptr;

use half::{bf16, f16};
use lanevec_common::{LaneVecError, Result, Scalar};

/// N lanes of scalar `T`, stored contiguously.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpVec<T: Scalar, const N: usize> {
    lanes: [T; N],
}

impl<T: Scalar, const N: usize> FpVec<T, N> {
    /// Lane count of this vector type.
    pub const LANES: usize = N;

    /// Broadcast `v` into every lane.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self { lanes: [v; N] }
    }

    /// All-zero vector.
    #[inline]
    pub fn zeroed() -> Self {
        Self { lanes: [T::ZERO; N] }
    }

    /// Copy N elements from `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of N elements of `T`. Trusted-caller
    /// hot-path constructor; see [`FpVec::from_slice`] for the checked
    /// variant.
    #[inline]
    pub unsafe fn load(ptr: *const T) -> Self {
        let mut lanes = [T::ZERO; N];
        unsafe { ptr::copy_nonoverlapping(ptr, lanes.as_mut_ptr(), N) };
        Self { lanes }
    }

    /// Checked load: copies the first N elements of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`LaneVecError::SourceTooShort`] if `src` holds fewer than
    /// N elements.
    #[inline]
    pub fn from_slice(src: &[T]) -> Result<Self> {
        if src.len() < N {
            return Err(LaneVecError::SourceTooShort { needed: N, got: src.len() });
        }
        let mut lanes = [T::ZERO; N];
        lanes.copy_from_slice(&src[..N]);
        Ok(Self { lanes })
    }

    /// Regrouping construction: tile N/BN contiguous copies of `base`'s BN
    /// lanes, converting each element from `B` to `T` with an ordinary
    /// rounding cast. Per-group lane order is preserved.
    ///
    /// The target width must be an exact multiple of the source width;
    /// violating that fails the build, it never truncates silently.
    #[inline]
    pub fn from_tiled<B: Scalar, const BN: usize>(base: &FpVec<B, BN>) -> Self {
        const {
            assert!(BN != 0 && N % BN == 0, "target width must be a multiple of the source width");
        }
        let mut lanes = [T::ZERO; N];
        for group in lanes.chunks_exact_mut(BN) {
            for (dst, src) in group.iter_mut().zip(base.lanes.iter()) {
                *dst = T::from_f32(src.to_f32());
            }
        }
        Self { lanes }
    }

    /// Write all N lanes to `ptr` in lane order.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of N elements of `T`. See
    /// [`FpVec::write_to_slice`] for the checked variant.
    #[inline]
    pub unsafe fn store(&self, ptr: *mut T) {
        unsafe { ptr::copy_nonoverlapping(self.lanes.as_ptr(), ptr, N) };
    }

    /// Checked store into the first N elements of `dst`.
    ///
    /// # Errors
    ///
    /// Returns [`LaneVecError::DestinationTooShort`] if `dst` holds fewer
    /// than N elements.
    #[inline]
    pub fn write_to_slice(&self, dst: &mut [T]) -> Result<()> {
        if dst.len() < N {
            return Err(LaneVecError::DestinationTooShort { needed: N, got: dst.len() });
        }
        dst[..N].copy_from_slice(&self.lanes);
        Ok(())
    }

    /// Borrow the lanes as a fixed-size array.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.lanes
    }

    /// Apply `op` to every lane independently.
    #[inline]
    pub fn apply<F: Fn(T) -> T>(&self, op: F) -> Self {
        let mut lanes = self.lanes;
        for lane in &mut lanes {
            *lane = op(*lane);
        }
        Self { lanes }
    }

    #[inline]
    fn binop<F: Fn(T, T) -> T>(&self, rhs: &Self, op: F) -> Self {
        let mut lanes = self.lanes;
        for (lane, r) in lanes.iter_mut().zip(rhs.lanes.iter()) {
            *lane = op(*lane, *r);
        }
        Self { lanes }
    }

    /// Sum of all N lanes, accumulated strictly left to right in `T`.
    ///
    /// The order is part of the contract: floating-point sums are not
    /// associative, and dependent kernels and their tests rely on this
    /// exact accumulation order.
    #[inline]
    pub fn reduce_sum(&self) -> T {
        self.lanes.iter().fold(T::ZERO, |acc, &x| acc + x)
    }

    /// Partial reduction: sum the window of `16 - G` lanes starting at
    /// lane `idx * G`, left to right. `G` must evenly divide N.
    ///
    /// The window length hardcodes the 16-lane register assumption of the
    /// windowed-softmax kernels this serves; it is intentionally not
    /// derived from N.
    ///
    /// # Panics
    ///
    /// Panics if the window extends past lane N, the case where this is
    /// used with N ≠ 16, which callers must not do.
    #[inline]
    pub fn reduce_sub_sum<const G: usize>(&self, idx: usize) -> T {
        const {
            assert!(G != 0 && N % G == 0, "group size must evenly divide the lane count");
            assert!(G <= 16, "group size exceeds the 16-lane window base");
        }
        let count = 16 - G;
        let start = idx * G;
        self.lanes[start..start + count].iter().fold(T::ZERO, |acc, &x| acc + x)
    }

    /// Lane-wise exponential, via the scalar library function in f32.
    #[inline]
    pub fn exp(&self) -> Self {
        self.apply(|x| T::from_f32(x.to_f32().exp()))
    }

    /// Lane-wise hyperbolic tangent.
    #[inline]
    pub fn tanh(&self) -> Self {
        self.apply(|x| T::from_f32(x.to_f32().tanh()))
    }

    /// Lane-wise error function.
    #[inline]
    pub fn erf(&self) -> Self {
        self.apply(|x| T::from_f32(lanevec_common::erf(x.to_f32())))
    }
}

impl<T: Scalar, const N: usize> Default for FpVec<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Scalar, const N: usize> Add for FpVec<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.binop(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for FpVec<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.binop(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const N: usize> Mul for FpVec<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.binop(&rhs, |a, b| a * b)
    }
}

impl<T: Scalar, const N: usize> Div for FpVec<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.binop(&rhs, |a, b| a / b)
    }
}

// Named variants matching the reference hardware register shapes.

pub type FP32Vec4 = FpVec<f32, 4>;
pub type FP32Vec8 = FpVec<f32, 8>;
pub type FP32Vec16 = FpVec<f32, 16>;

pub type FP16Vec8 = FpVec<f16, 8>;
pub type FP16Vec16 = FpVec<f16, 16>;

pub type BF16Vec8 = FpVec<bf16, 8>;
pub type BF16Vec16 = FpVec<bf16, 16>;
