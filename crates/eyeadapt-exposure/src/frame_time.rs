//! Frame time conditioning for the dispatching render loop.
//!
//! A hitch (window drag, shader compile, breakpoint) produces a huge `dt`
//! that would snap exposure straight to its target. Clamp measured frame
//! times before handing them to the adapter. [`update`](crate::update) itself
//! uses `dt` as given, so `dt = 0` still means no adaptation.

use eyeadapt_math::clamp;

/// Shortest frame time passed to the adapter, in seconds.
pub const MIN_FRAME_TIME: f32 = 0.001;

/// Longest frame time passed to the adapter, in seconds.
pub const MAX_FRAME_TIME: f32 = 1.0;

/// Clamps a measured frame time to `[MIN_FRAME_TIME, MAX_FRAME_TIME]`.
///
/// ```rust
/// use eyeadapt_exposure::clamp_frame_time;
///
/// assert_eq!(clamp_frame_time(5.0), 1.0);
/// assert_eq!(clamp_frame_time(0.0), 0.001);
/// ```
#[inline]
pub fn clamp_frame_time(dt: f32) -> f32 {
    clamp(dt, MIN_FRAME_TIME, MAX_FRAME_TIME)
}
