//! Error types for eyeadapt-core.
//!
//! The adaptation law itself never fails: it is a pure numeric transform and
//! degenerate inputs propagate as non-finite or boundary-clamped values.
//! These errors are raised only by the opt-in validation helpers
//! ([`AdaptationParams::validate`](crate::AdaptationParams::validate),
//! [`FrameSample::validate`](crate::FrameSample::validate)) and by decoding
//! persisted state.
//!
//! # Usage
//!
//! ```rust
//! use eyeadapt_core::{AdaptationParams, Error};
//!
//! let params = AdaptationParams::default().with_exposure_range(4.0, 2.0);
//! let err = params.validate().unwrap_err();
//! assert!(err.is_range_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `eyeadapt-exposure` - state decoding
//! - `eyeadapt-cli` - input validation before running the adapter

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the eyeadapt validation helpers.
///
/// # Categories
///
/// - **Parameter errors**: [`InvalidExposureRange`](Error::InvalidExposureRange),
///   [`InvalidParameter`](Error::InvalidParameter)
/// - **Input errors**: [`InvalidSample`](Error::InvalidSample)
/// - **Layout errors**: [`InvalidStateBytes`](Error::InvalidStateBytes)
#[derive(Debug, Error)]
pub enum Error {
    /// Exposure bounds are reversed or not finite.
    ///
    /// The clamp used by the adaptation law tolerates `min > max` without
    /// panicking, but the result is meaningless.
    #[error("invalid exposure range [{min}, {max}]")]
    InvalidExposureRange {
        /// Lower exposure bound
        min: f32,
        /// Upper exposure bound
        max: f32,
    },

    /// A scalar adaptation parameter is out of its domain.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f32,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Frame sample has a negative or non-finite component.
    #[error("invalid frame sample ({r}, {g}, {b}): components must be finite and non-negative")]
    InvalidSample {
        /// Red component
        r: f32,
        /// Green component
        g: f32,
        /// Blue component
        b: f32,
    },

    /// Persisted exposure state has the wrong byte length.
    #[error("exposure state must be {expected} bytes, got {len}")]
    InvalidStateBytes {
        /// Provided length
        len: usize,
        /// Required length
        expected: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidExposureRange`] error.
    #[inline]
    pub fn invalid_range(min: f32, max: f32) -> Self {
        Self::InvalidExposureRange { min, max }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }

    /// Creates an [`Error::InvalidSample`] error.
    #[inline]
    pub fn invalid_sample(rgb: [f32; 3]) -> Self {
        Self::InvalidSample {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }

    /// Returns `true` if the exposure bounds were rejected.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::InvalidExposureRange { .. })
    }

    /// Returns `true` if this error concerns caller-supplied parameters or samples.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidExposureRange { .. } | Self::InvalidParameter { .. } | Self::InvalidSample { .. }
        )
    }
}
