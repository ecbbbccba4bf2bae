//! # eyeadapt-exposure
//!
//! Automatic exposure adaptation ("eye adaptation") for HDR renderers.
//!
//! Given a representative color of the frame (usually the coarsest mip of
//! the HDR buffer) and the elapsed time, the adapter produces an exposure
//! multiplier that drifts toward `target_luminance / luminance`, clamped to
//! `[min_exposure, max_exposure]`.
//!
//! - [`update`] - pure step over an [`ExposureState`]
//! - [`step`] - same step, also reporting luminance, target and factor
//! - [`ExposureAdapter`] - owns the state of one rendering context
//! - [`clamp_frame_time`] - conditions measured frame times
//!
//! # Example
//!
//! ```rust
//! use eyeadapt_core::{AdaptationParams, FrameSample};
//! use eyeadapt_exposure::{clamp_frame_time, ExposureAdapter};
//!
//! let mut adapter = ExposureAdapter::new();
//! let params = AdaptationParams::default()
//!     .with_adjustment_speed(2.0)
//!     .with_exposure_range(0.05, 20.0);
//!
//! // once per frame, after the HDR mip chain is built
//! let dt = clamp_frame_time(0.016);
//! let exposure = adapter.update(FrameSample::new(0.8, 0.9, 1.1), &params.with_dt(dt));
//! assert_eq!(exposure, 1.0);
//! ```
//!
//! Tone-mapping, GPU buffer management and mip generation stay with the
//! renderer.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapter;
mod frame_time;
mod law;

pub use adapter::ExposureAdapter;
pub use frame_time::{clamp_frame_time, MAX_FRAME_TIME, MIN_FRAME_TIME};
pub use law::{blend_factor, metered_exposure, step, target_exposure, update, AdaptationStep};

pub use eyeadapt_core::{AdaptationParams, ExposureState, FrameSample};
