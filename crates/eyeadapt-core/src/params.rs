//! Per-frame adaptation parameters.
//!
//! Parameters are supplied by the caller on every update and never stored by
//! the adapter. All fields have defaults so a partial YAML file is enough:
//!
//! ```yaml
//! target_luminance: 0.5
//! adjustment_speed: 1.5
//! min_exposure: 0.05
//! max_exposure: 20.0
//! luma_weights: rec601
//! zero_luminance: max_exposure
//! blend: saturate
//! ```

use crate::error::{Error, Result};
use crate::sample::LumaWeights;

/// Default perceptual brightness the adapter aims for.
pub const DEFAULT_TARGET_LUMINANCE: f32 = 0.5;
/// Default adjustment speed.
pub const DEFAULT_ADJUSTMENT_SPEED: f32 = 1.0;
/// Default lower exposure bound.
pub const DEFAULT_MIN_EXPOSURE: f32 = 0.1;
/// Default upper exposure bound.
pub const DEFAULT_MAX_EXPOSURE: f32 = 10.0;

/// Target exposure for a frame whose luminance cannot be divided into the
/// target luminance: zero, negative, or so small the quotient overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZeroLuminancePolicy {
    /// Adapt toward `max_exposure`.
    #[default]
    MaxExposure,
    /// Keep the current exposure until the frame brightens again.
    Hold,
}

/// How `dt * adjustment_speed` is used as the interpolation factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlendMode {
    /// Factor clamped to `[0, 1]`; exposure never overshoots the target.
    ///
    /// A compute shader that mixes with the raw factor overshoots on long
    /// frames instead; [`BlendMode::Extrapolate`] reproduces that.
    #[default]
    Saturate,
    /// Raw factor; values above 1 extrapolate past the target.
    Extrapolate,
}

/// Inputs of one adaptation step besides the frame sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdaptationParams {
    /// Desired luminance after exposure is applied.
    pub target_luminance: f32,
    /// Seconds since the previous update. Zero means no adaptation.
    pub dt: f32,
    /// Convergence rate; 0 freezes exposure.
    pub adjustment_speed: f32,
    /// Lower exposure bound.
    pub min_exposure: f32,
    /// Upper exposure bound.
    pub max_exposure: f32,
    /// RGB to luminance weighting.
    pub luma_weights: LumaWeights,
    /// Black frame handling.
    pub zero_luminance: ZeroLuminancePolicy,
    /// Interpolation factor handling.
    pub blend: BlendMode,
}

impl Default for AdaptationParams {
    fn default() -> Self {
        Self {
            target_luminance: DEFAULT_TARGET_LUMINANCE,
            dt: 0.0,
            adjustment_speed: DEFAULT_ADJUSTMENT_SPEED,
            min_exposure: DEFAULT_MIN_EXPOSURE,
            max_exposure: DEFAULT_MAX_EXPOSURE,
            luma_weights: LumaWeights::default(),
            zero_luminance: ZeroLuminancePolicy::default(),
            blend: BlendMode::default(),
        }
    }
}

impl AdaptationParams {
    /// Sets the elapsed frame time.
    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// Sets the target luminance.
    pub fn with_target_luminance(mut self, target: f32) -> Self {
        self.target_luminance = target;
        self
    }

    /// Sets the adjustment speed.
    pub fn with_adjustment_speed(mut self, speed: f32) -> Self {
        self.adjustment_speed = speed;
        self
    }

    /// Sets both exposure bounds.
    pub fn with_exposure_range(mut self, min: f32, max: f32) -> Self {
        self.min_exposure = min;
        self.max_exposure = max;
        self
    }

    /// Sets the luminance weighting.
    pub fn with_luma_weights(mut self, weights: LumaWeights) -> Self {
        self.luma_weights = weights;
        self
    }

    /// Sets the black frame policy.
    pub fn with_zero_luminance(mut self, policy: ZeroLuminancePolicy) -> Self {
        self.zero_luminance = policy;
        self
    }

    /// Sets the blend mode.
    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Checks caller preconditions.
    ///
    /// The adapter runs without this; call it once when parameters come from
    /// an untrusted source.
    pub fn validate(&self) -> Result<()> {
        if !self.min_exposure.is_finite()
            || !self.max_exposure.is_finite()
            || self.min_exposure > self.max_exposure
        {
            return Err(Error::invalid_range(self.min_exposure, self.max_exposure));
        }
        if !(self.target_luminance.is_finite() && self.target_luminance > 0.0) {
            return Err(Error::invalid_parameter(
                "target_luminance",
                self.target_luminance,
                "must be finite and positive",
            ));
        }
        if !(self.dt.is_finite() && self.dt >= 0.0) {
            return Err(Error::invalid_parameter("dt", self.dt, "must be finite and non-negative"));
        }
        if !(self.adjustment_speed.is_finite() && self.adjustment_speed >= 0.0) {
            return Err(Error::invalid_parameter(
                "adjustment_speed",
                self.adjustment_speed,
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }
}
