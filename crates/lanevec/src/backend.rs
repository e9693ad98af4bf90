//! Backend capability reporting.
//!
//! The generic backend has no runtime selection to do, since everything is
//! resolved at compile time, but consuming kernels still want one line in
//! the log saying what they are running on, the same way a kernel manager
//! reports its selected provider. `BackendInfo::current().log_selection()`
//! does that, once per process.

use std::sync::Once;

use half::{bf16, f16};

use crate::dispatch::VecType;
use crate::ops::prefetch_is_native;

static LOG_ONCE: Once = Once::new();

/// Build-time characteristics of the generic vector backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendInfo {
    /// Natural lane count for f32 vectors.
    pub f32_lanes: usize,
    /// Natural lane count for f16 vectors.
    pub f16_lanes: usize,
    /// Natural lane count for bf16 vectors.
    pub bf16_lanes: usize,
    /// Whether the prefetch hint lowers to a real instruction.
    pub native_prefetch: bool,
}

impl BackendInfo {
    /// Capabilities of this build.
    pub fn current() -> Self {
        Self {
            f32_lanes: <f32 as VecType>::NATURAL_LANES,
            f16_lanes: <f16 as VecType>::NATURAL_LANES,
            bf16_lanes: <bf16 as VecType>::NATURAL_LANES,
            native_prefetch: prefetch_is_native(),
        }
    }

    /// Log the backend description once per process.
    ///
    /// Intended to be called by consuming kernels at startup; repeated
    /// calls are free.
    pub fn log_selection(&self) {
        LOG_ONCE.call_once(|| {
            log::info!(
                "lanevec generic backend: f32x{}, f16x{}, bf16x{}, prefetch={}",
                self.f32_lanes,
                self.f16_lanes,
                self.bf16_lanes,
                if self.native_prefetch { "native" } else { "no-op" },
            );
        });
    }
}
