//! # eyeadapt-math
//!
//! Scalar math used by the exposure adaptation law.
//!
//! - Linear interpolation (lerp)
//! - Non-panicking clamps (clamp, saturate)
//!
//! # Used By
//!
//! - `eyeadapt-exposure` - target clamping and temporal smoothing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;

pub use interp::*;
