//! Scalar math helpers not covered by `std`.

/// Error function, evaluated per scalar.
///
/// `std` has no `erf`, so this goes through libm's f64 implementation and
/// narrows the result. That is exact at zero, odd-symmetric, and correct
/// to well below f32's epsilon, which is what the activation kernels
/// consuming this actually need.
pub fn erf(x: f32) -> f32 {
    libm::erf(f64::from(x)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erf_zero_is_exactly_zero() {
        assert_eq!(erf(0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(erf(-0.0), 0.0);
    }

    #[test]
    fn test_erf_known_values() {
        // Reference values from tabulated erf.
        assert!((erf(1.0) - 0.842_700_8).abs() < 1e-6);
        assert!((erf(2.0) - 0.995_322_3).abs() < 1e-6);
        assert!((erf(0.5) - 0.520_499_9).abs() < 1e-6);
    }

    #[test]
    fn test_erf_odd_symmetry() {
        for &v in &[0.0f32, 0.1, 0.7, 1.3, 2.5] {
            assert_eq!(erf(-v), -erf(v));
        }
    }

    #[test]
    fn test_erf_saturates_toward_one() {
        assert!((erf(4.0) - 1.0).abs() < 1e-6);
        assert!((erf(-4.0) + 1.0).abs() < 1e-6);
        assert_eq!(erf(f32::INFINITY), 1.0);
        assert_eq!(erf(f32::NEG_INFINITY), -1.0);
    }
}
