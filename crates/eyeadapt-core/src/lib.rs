//! # eyeadapt-core
//!
//! Core types for automatic exposure ("eye adaptation") in HDR renderers.
//!
//! - [`FrameSample`] - representative HDR color of a frame
//! - [`LumaWeights`] - RGB to luminance weighting
//! - [`ExposureState`] - double-buffered `(current, next)` exposure pair
//! - [`AdaptationParams`] - per-frame target, speed, and exposure bounds
//! - [`Error`] - validation errors
//!
//! ## Crate Structure
//!
//! ```text
//! eyeadapt-core (this crate)
//!    ^
//!    |
//!    +-- eyeadapt-exposure (adaptation law, ExposureAdapter)
//!    +-- eyeadapt-cli (eyeadapt binary)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for samples, state and parameters (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod params;
pub mod sample;
pub mod state;

pub use error::{Error, Result};
pub use params::{
    AdaptationParams, BlendMode, ZeroLuminancePolicy, DEFAULT_ADJUSTMENT_SPEED,
    DEFAULT_MAX_EXPOSURE, DEFAULT_MIN_EXPOSURE, DEFAULT_TARGET_LUMINANCE,
};
pub use sample::{FrameSample, LumaWeights, REC601_LUMA, REC709_LUMA};
pub use state::{ExposureState, DEFAULT_EXPOSURE};

/// Prelude module for convenient imports.
///
/// ```
/// use eyeadapt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::params::{AdaptationParams, BlendMode, ZeroLuminancePolicy};
    pub use crate::sample::{FrameSample, LumaWeights};
    pub use crate::state::ExposureState;
}
