//! Interpolation utilities for exposure adaptation.
//!
//! - Linear interpolation ([`lerp`])
//! - Clamping ([`clamp`], [`saturate`])
//!
//! Unlike [`f32::clamp`], the clamps here never panic: reversed bounds and
//! NaN bounds are tolerated, and a NaN input passes through unchanged so a
//! corrupted exposure stays visible instead of being silently pinned to a
//! bound.
//!
//! # Usage
//!
//! ```rust
//! use eyeadapt_math::{clamp, lerp};
//!
//! assert_eq!(lerp(1.0, 0.5, 0.5), 0.75);
//! assert_eq!(clamp(f32::INFINITY, 0.1, 10.0), 10.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns exactly `a` when `t = 0.0`, and exactly `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a * (1 - t) + b * t`, algebraically `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use eyeadapt_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Clamps a value to the range [min, max].
///
/// Comparisons run against `min` first, then `max`. With `min > max` a value
/// below `min` yields `min`, anything else above `max` yields `max`.
/// A NaN `value` is returned as is.
///
/// # Example
///
/// ```rust
/// use eyeadapt_math::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert!(clamp(f32::NAN, 0.0, 1.0).is_nan());
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a value to [0, 1].
///
/// Shorthand for `clamp(value, 0.0, 1.0)`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn test_lerp_exact_at_one() {
        // a + (b - a) * t would give 0.10000002 here.
        assert_eq!(lerp(1.0, 0.1, 1.0), 0.1);
        assert_eq!(lerp(0.1, 10.0, 0.0), 0.1);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_abs_diff_eq!(lerp(1.0, 0.5, 2.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lerp(1.0, 0.5, -1.0), 1.5, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_infinities() {
        assert_eq!(clamp(f32::INFINITY, 0.1, 10.0), 10.0);
        assert_eq!(clamp(f32::NEG_INFINITY, 0.1, 10.0), 0.1);
    }

    #[test]
    fn test_clamp_inclusive_bounds() {
        assert_eq!(clamp(0.1, 0.1, 10.0), 0.1);
        assert_eq!(clamp(10.0, 0.1, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_reversed_bounds_does_not_panic() {
        assert_eq!(clamp(0.0, 5.0, 1.0), 5.0);
        assert_eq!(clamp(3.0, 5.0, 1.0), 5.0);
        assert_eq!(clamp(9.0, 5.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_nan_passes_through() {
        assert!(clamp(f32::NAN, 0.1, 10.0).is_nan());
        assert!(saturate(f32::NAN).is_nan());
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(-2.0), 0.0);
        assert_eq!(saturate(0.3), 0.3);
        assert_eq!(saturate(4.0), 1.0);
    }
}
