use crate::{RhError, RhResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> RhResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RhError::NonFinite { what, value: v })
    }
}

/// Accepts only finite values strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> RhResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(RhError::NonPositive { what, value: v })
    }
}

/// Bounds check that reports the offending index and length.
pub fn check_index(index: usize, len: usize, what: &'static str) -> RhResult<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(RhError::IndexOob { what, index, len })
    }
}

/// Round to `digits` decimal places, ties to even, on the exact value of `v`.
///
/// `v * 10^digits` is evaluated together with its rounding error, so a
/// product that only lands on `.5` through rounding is resolved by the sign
/// of that error. Valid for `0 <= digits <= 22`, where `10^digits` is exact.
pub fn round_to_digits(v: Real, digits: i32) -> Real {
    let scale = 10f64.powi(digits);
    let scaled = v * scale;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return v;
    }
    // Exact residual: v * scale == scaled + err
    let err = v.mul_add(scale, -scaled);

    let floor = scaled.floor();
    let frac = scaled - floor;
    let n = if frac > 0.5 {
        floor + 1.0
    } else if frac < 0.5 {
        floor
    } else if err > 0.0 {
        floor + 1.0
    } else if err < 0.0 {
        floor
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    n / scale
}

/// Number of samples `floor(extent / step) + 1` on a closed interval.
///
/// Fails when the count does not fit in `usize`.
pub fn sample_count(extent: Real, step: Real, what: &'static str) -> RhResult<usize> {
    let ratio = (extent / step).floor();
    if !(ratio >= 0.0 && ratio < usize::MAX as Real) {
        return Err(RhError::TooManySamples { what, value: ratio });
    }
    (ratio as usize)
        .checked_add(1)
        .ok_or(RhError::TooManySamples { what, value: ratio })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert_eq!(ensure_positive(0.5, "dx"), Ok(0.5));
        assert!(matches!(
            ensure_positive(0.0, "dx"),
            Err(RhError::NonPositive { what: "dx", .. })
        ));
        assert!(matches!(
            ensure_positive(-1.0, "dt"),
            Err(RhError::NonPositive { what: "dt", .. })
        ));
        assert!(matches!(
            ensure_positive(Real::NAN, "L"),
            Err(RhError::NonFinite { what: "L", .. })
        ));
        assert!(matches!(
            ensure_positive(Real::INFINITY, "T"),
            Err(RhError::NonFinite { what: "T", .. })
        ));
    }

    #[test]
    fn check_index_bounds() {
        assert_eq!(check_index(0, 3, "column"), Ok(0));
        assert_eq!(check_index(2, 3, "column"), Ok(2));
        assert_eq!(
            check_index(3, 3, "column"),
            Err(RhError::IndexOob {
                what: "column",
                index: 3,
                len: 3
            })
        );
    }

    #[test]
    fn round_to_five_digits() {
        assert_eq!(round_to_digits(0.025, 5), 0.025);
        assert_eq!(round_to_digits(0.123456789, 5), 0.12346);
        assert_eq!(round_to_digits(0.5000000001, 5), 0.5);
        assert_eq!(round_to_digits(-0.123454, 5), -0.12345);
    }

    #[test]
    fn rounding_sees_through_scaling_ties() {
        // Both sit just below the decimal tie; the scaled product rounds onto .5
        assert_eq!(round_to_digits(0.123455, 5), 0.12345);
        assert_eq!(round_to_digits(0.002675, 5), 0.00267);
        assert_eq!(round_to_digits(-0.002675, 5), -0.00267);
    }

    #[test]
    fn exact_ties_go_to_even() {
        // 0.015625 and 0.046875 are exact binary fractions sitting on the tie
        assert_eq!(round_to_digits(0.015625, 5), 0.01562);
        assert_eq!(round_to_digits(0.046875, 5), 0.04688);
        assert_eq!(round_to_digits(2.5, 0), 2.0);
        assert_eq!(round_to_digits(3.5, 0), 4.0);
    }

    #[test]
    fn sample_count_floor_plus_one() {
        assert_eq!(sample_count(1.0, 0.5, "x"), Ok(3));
        assert_eq!(sample_count(1.0, 0.3, "x"), Ok(4));
        assert_eq!(sample_count(1.0, 2.0, "x"), Ok(1));
    }

    #[test]
    fn sample_count_rejects_unrepresentable_ratio() {
        assert!(matches!(
            sample_count(1.0, 1e-20, "x"),
            Err(RhError::TooManySamples { what: "x", .. })
        ));
        assert!(matches!(
            sample_count(1.0, 1e-320, "t"),
            Err(RhError::TooManySamples { what: "t", .. })
        ));
    }
}
