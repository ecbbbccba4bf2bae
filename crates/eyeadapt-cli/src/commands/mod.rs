//! CLI command implementations

pub mod once;
pub mod simulate;
pub mod step;

use anyhow::{Context, Result};
use eyeadapt_core::{AdaptationParams, BlendMode, FrameSample, LumaWeights, ZeroLuminancePolicy};
use eyeadapt_exposure::AdaptationStep;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::{BlackFrameArg, LumaArg, ParamArgs};

/// One entry of a recorded frame log.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FrameRecord {
    /// Representative HDR color of the frame
    pub rgb: FrameSample,
    /// Seconds since the previous frame
    pub dt: f32,
}

/// Per-frame output row.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub luminance: f32,
    pub target: f32,
    pub exposure: f32,
    pub next: f32,
}

impl FrameReport {
    pub fn new(frame: u64, step: &AdaptationStep) -> Self {
        Self {
            frame,
            luminance: step.luminance,
            target: step.target,
            exposure: step.state.current,
            next: step.state.next,
        }
    }
}

/// Builds adaptation parameters from an optional YAML file plus CLI overrides.
pub fn load_params(config: Option<&Path>, args: &ParamArgs) -> Result<AdaptationParams> {
    let mut params = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_yaml::from_str::<AdaptationParams>(&text)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?
        }
        None => AdaptationParams::default(),
    };

    if let Some(target) = args.target {
        params.target_luminance = target;
    }
    if let Some(speed) = args.speed {
        params.adjustment_speed = speed;
    }
    if let Some(min) = args.min {
        params.min_exposure = min;
    }
    if let Some(max) = args.max {
        params.max_exposure = max;
    }
    if let Some(luma) = args.luma {
        params.luma_weights = match luma {
            LumaArg::Rec601 => LumaWeights::Rec601,
            LumaArg::Rec709 => LumaWeights::Rec709,
        };
    }
    if let Some(policy) = args.black_frame {
        params.zero_luminance = match policy {
            BlackFrameArg::MaxExposure => ZeroLuminancePolicy::MaxExposure,
            BlackFrameArg::Hold => ZeroLuminancePolicy::Hold,
        };
    }
    if args.extrapolate {
        params.blend = BlendMode::Extrapolate;
    }

    params.validate().context("Invalid adaptation parameters")?;
    debug!(?params, "adaptation parameters");
    Ok(params)
}

/// Loads and validates a YAML frame log.
pub fn load_frames(path: &Path) -> Result<Vec<FrameRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read frame log: {}", path.display()))?;
    let frames: Vec<FrameRecord> = serde_yaml::from_str(&text)
        .with_context(|| format!("Failed to parse frame log: {}", path.display()))?;

    for (i, record) in frames.iter().enumerate() {
        record
            .rgb
            .validate()
            .with_context(|| format!("Frame {i} in {}", path.display()))?;
        if !(record.dt.is_finite() && record.dt >= 0.0) {
            anyhow::bail!("Frame {i} in {}: dt must be finite and non-negative, got {}", path.display(), record.dt);
        }
    }
    Ok(frames)
}

/// Prints reports as a table or as JSON.
pub fn print_reports(reports: &[FrameReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    println!("{:>6}  {:>10}  {:>10}  {:>10}  {:>10}", "frame", "luminance", "target", "exposure", "next");
    for r in reports {
        println!(
            "{:>6}  {:>10.5}  {:>10.5}  {:>10.5}  {:>10.5}",
            r.frame, r.luminance, r.target, r.exposure, r.next
        );
    }
    Ok(())
}
