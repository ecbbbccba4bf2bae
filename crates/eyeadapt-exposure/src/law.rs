//! The exposure adaptation law.
//!
//! One step, in this order:
//!
//! 1. rotate: `current = next`
//! 2. meter: `Y = dot(rgb, weights)`
//! 3. target: `clamp(target_luminance / Y, min_exposure, max_exposure)`
//! 4. smooth: `next = lerp(current, target, dt * adjustment_speed)`
//!
//! Rotating first means the value written on frame N is the value read on
//! frame N+1 without a separate frame-delay copy.
//!
//! Frames whose division is degenerate (luminance at or below zero, or a
//! quotient that overflows to infinity) take their target from
//! [`ZeroLuminancePolicy`]. Any other positive luminance, however dim, goes
//! through the division. NaN luminance is not guarded and propagates into
//! `next`, and from there into every later frame.

use eyeadapt_core::{
    AdaptationParams, BlendMode, ExposureState, FrameSample, ZeroLuminancePolicy,
};
use eyeadapt_math::{clamp, lerp, saturate};

/// Everything computed during one [`step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptationStep {
    /// State after the step. `state.current` is this frame's exposure.
    pub state: ExposureState,
    /// Metered frame luminance.
    pub luminance: f32,
    /// Clamped target exposure.
    pub target: f32,
    /// Interpolation factor applied.
    pub factor: f32,
    /// The target came from [`ZeroLuminancePolicy`] instead of the division.
    pub black_frame: bool,
}

impl AdaptationStep {
    /// `true` if the frame was metered as black.
    #[inline]
    pub fn is_black_frame(&self) -> bool {
        self.black_frame
    }
}

/// Unclamped exposure `target_luminance / luminance`, or `None` when the
/// division is degenerate.
#[inline]
pub fn metered_exposure(luminance: f32, target_luminance: f32) -> Option<f32> {
    if luminance <= 0.0 {
        return None;
    }
    let exposure = target_luminance / luminance;
    // NaN falls through on purpose.
    (!exposure.is_infinite()).then_some(exposure)
}

/// Exposure the adapter converges toward for a frame of the given luminance.
///
/// `current` is only consulted by [`ZeroLuminancePolicy::Hold`].
#[inline]
pub fn target_exposure(luminance: f32, current: f32, params: &AdaptationParams) -> f32 {
    match metered_exposure(luminance, params.target_luminance) {
        Some(exposure) => clamp(exposure, params.min_exposure, params.max_exposure),
        None => match params.zero_luminance {
            ZeroLuminancePolicy::MaxExposure => params.max_exposure,
            ZeroLuminancePolicy::Hold => clamp(current, params.min_exposure, params.max_exposure),
        },
    }
}

/// Interpolation factor `dt * adjustment_speed` under the configured blend mode.
#[inline]
pub fn blend_factor(params: &AdaptationParams) -> f32 {
    let t = params.dt * params.adjustment_speed;
    match params.blend {
        BlendMode::Saturate => saturate(t),
        BlendMode::Extrapolate => t,
    }
}

/// Runs one adaptation step and reports the intermediate values.
pub fn step(mut state: ExposureState, sample: FrameSample, params: &AdaptationParams) -> AdaptationStep {
    state.rotate();

    let luminance = sample.luminance(params.luma_weights);
    let target = target_exposure(luminance, state.current, params);
    let factor = blend_factor(params);
    let next = lerp(state.current, target, factor);
    state.next = match params.blend {
        // Rounding must not carry `next` past either endpoint.
        BlendMode::Saturate => clamp(next, state.current.min(target), state.current.max(target)),
        BlendMode::Extrapolate => next,
    };

    AdaptationStep {
        state,
        luminance,
        target,
        factor,
        black_frame: metered_exposure(luminance, params.target_luminance).is_none(),
    }
}

/// Advances `state` by one frame.
///
/// The returned `current` is the exposure to tone-map this frame with;
/// `next` becomes `current` on the following call.
///
/// # Example
///
/// ```rust
/// use eyeadapt_core::{AdaptationParams, ExposureState, FrameSample};
/// use eyeadapt_exposure::update;
///
/// let params = AdaptationParams::default().with_dt(0.5).with_adjustment_speed(1.0);
/// let state = update(ExposureState::default(), FrameSample::gray(1.0), &params);
/// assert_eq!(state.current, 1.0);
/// assert!((state.next - 0.75).abs() < 1e-5);
/// ```
#[inline]
pub fn update(state: ExposureState, sample: FrameSample, params: &AdaptationParams) -> ExposureState {
    step(state, sample, params).state
}
