//! Frame brightness samples and luminance weighting.
//!
//! The adapter meters a whole frame through a single representative color,
//! conventionally the 1x1 level of the HDR buffer's mip chain. Producing
//! that sample is the renderer's job; this module only reduces it to a
//! scalar luminance.
//!
//! # Luminance
//!
//! ```text
//! Y = wr * R + wg * G + wb * B
//! ```
//!
//! The default weights are `0.3 / 0.59 / 0.11`. Green dominates because
//! human vision is most sensitive to it, blue contributes least.
//!
//! # Example
//!
//! ```rust
//! use eyeadapt_core::{FrameSample, LumaWeights};
//!
//! let sample = FrameSample::new(1.0, 1.0, 1.0);
//! let y = sample.luminance(LumaWeights::Rec601);
//! assert!((y - 1.0).abs() < 1e-6);
//! ```

use glam::Vec3;

use crate::error::{Error, Result};

/// Rec.601-style luma coefficient for red.
pub const REC601_LUMA_R: f32 = 0.3;
/// Rec.601-style luma coefficient for green.
pub const REC601_LUMA_G: f32 = 0.59;
/// Rec.601-style luma coefficient for blue.
pub const REC601_LUMA_B: f32 = 0.11;

/// Rec.601-style luma coefficients as `[R, G, B]`.
pub const REC601_LUMA: [f32; 3] = [REC601_LUMA_R, REC601_LUMA_G, REC601_LUMA_B];

/// Rec.709 luma coefficients as `[R, G, B]`.
///
/// `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Perceptual weighting used to reduce RGB to luminance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LumaWeights {
    /// `0.3 / 0.59 / 0.11`.
    #[default]
    Rec601,
    /// `0.2126 / 0.7152 / 0.0722`, for Rec.709 / sRGB primaries.
    Rec709,
    /// Caller-provided `[R, G, B]` weights.
    Custom([f32; 3]),
}

impl LumaWeights {
    /// Weights as an `[R, G, B]` array.
    #[inline]
    pub fn coefficients(self) -> [f32; 3] {
        match self {
            Self::Rec601 => REC601_LUMA,
            Self::Rec709 => REC709_LUMA,
            Self::Custom(w) => w,
        }
    }

    /// Weights as a [`Vec3`].
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::from_array(self.coefficients())
    }
}

/// Representative HDR color of one frame.
///
/// Components are linear and may exceed 1.0. The adapter expects finite,
/// non-negative values but does not check them; see [`FrameSample::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 3]", into = "[f32; 3]"))]
pub struct FrameSample {
    rgb: Vec3,
}

impl FrameSample {
    /// Creates a sample from its RGB components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { rgb: Vec3::new(r, g, b) }
    }

    /// Creates an achromatic sample with all components equal to `value`.
    #[inline]
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// A fully black frame.
    pub const BLACK: Self = Self::gray(0.0);

    /// RGB as a [`Vec3`].
    #[inline]
    pub fn rgb(&self) -> Vec3 {
        self.rgb
    }

    /// RGB as an array.
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        self.rgb.to_array()
    }

    /// Weighted luminance of this sample.
    ///
    /// Non-finite components propagate into the result.
    #[inline]
    pub fn luminance(&self, weights: LumaWeights) -> f32 {
        self.rgb.dot(weights.to_vec3())
    }

    /// Checks the input contract: every component finite and `>= 0`.
    pub fn validate(&self) -> Result<()> {
        let ok = self.rgb.is_finite() && self.rgb.cmpge(Vec3::ZERO).all();
        if ok {
            Ok(())
        } else {
            Err(Error::invalid_sample(self.to_array()))
        }
    }
}

impl From<[f32; 3]> for FrameSample {
    fn from(rgb: [f32; 3]) -> Self {
        Self { rgb: Vec3::from_array(rgb) }
    }
}

impl From<FrameSample> for [f32; 3] {
    fn from(sample: FrameSample) -> Self {
        sample.to_array()
    }
}

impl From<Vec3> for FrameSample {
    fn from(rgb: Vec3) -> Self {
        Self { rgb }
    }
}
