//! Fused multiply-add and prefetch helpers.

use lanevec_common::Scalar;

use crate::vec::FpVec;

/// `acc = acc + a * b`, lane-wise.
///
/// Deliberately evaluated as the two already-specified vector operations,
/// multiply then add, so each lane is rounded twice. A hardware-fused
/// single-rounding FMA would be more precise but would not be bit-identical
/// to the reference behavior, which specialized implementations are
/// validated against.
#[inline]
pub fn fma<T: Scalar, const N: usize>(acc: &mut FpVec<T, N>, a: FpVec<T, N>, b: FpVec<T, N>) {
    *acc = *acc + a * b;
}

/// Hint that `ptr` will be read soon.
///
/// Lowers to a real prefetch instruction where the target has one and is a
/// guaranteed no-op everywhere else. Never read for correctness: arithmetic
/// results are identical whether or not the hint executes.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn prefetch<T>(ptr: *const T) {
    use std::arch::x86_64::{_MM_HINT_T1, _mm_prefetch};
    // Safety: prefetch has no memory effects, any address is allowed.
    unsafe { _mm_prefetch::<_MM_HINT_T1>(ptr as *const i8) };
}

/// Hint that `ptr` will be read soon.
///
/// Lowers to a real prefetch instruction where the target has one and is a
/// guaranteed no-op everywhere else. Never read for correctness: arithmetic
/// results are identical whether or not the hint executes.
#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn prefetch<T>(ptr: *const T) {
    // Safety: PRFM does not fault and does not access memory architecturally.
    unsafe {
        std::arch::asm!(
            "prfm pldl2keep, [{0}]",
            in(reg) ptr,
            options(nostack, preserves_flags),
        );
    }
}

/// Hint that `ptr` will be read soon.
///
/// No-op fallback for targets without a prefetch instruction.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub fn prefetch<T>(_ptr: *const T) {}

/// Whether [`prefetch`] lowers to a real instruction on this build target.
pub const fn prefetch_is_native() -> bool {
    cfg!(any(target_arch = "x86_64", target_arch = "aarch64"))
}
