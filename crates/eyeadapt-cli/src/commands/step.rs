//! Step response: constant scene luminance that jumps once.

use crate::StepArgs;
use anyhow::{Result, bail};
use eyeadapt_core::{AdaptationParams, FrameSample};
use eyeadapt_exposure::ExposureAdapter;
use tracing::info;

use super::FrameReport;

/// Runs the synthetic step and prints every Nth frame plus the last one.
pub fn run(args: StepArgs, params: &AdaptationParams) -> Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be positive, got {}", args.fps);
    }
    for (name, value) in [("--from", args.from), ("--to", args.to)] {
        if !(value.is_finite() && value >= 0.0) {
            bail!("{name} must be finite and non-negative, got {value}");
        }
    }

    let params = params.with_dt(1.0 / args.fps);
    let every = args.every.max(1);
    info!(from = args.from, to = args.to, at = args.at, frames = args.frames, "step response");

    let reports = simulate_step(&args, &params)
        .into_iter()
        .filter(|r| r.frame % every == 0 || r.frame + 1 == args.frames)
        .collect::<Vec<_>>();

    super::print_reports(&reports, args.json)
}

fn simulate_step(args: &StepArgs, params: &AdaptationParams) -> Vec<FrameReport> {
    let mut adapter = ExposureAdapter::new();
    (0..args.frames)
        .map(|frame| {
            let luminance = if frame < args.at { args.from } else { args.to };
            let step = adapter.step(FrameSample::gray(luminance), params);
            FrameReport::new(frame, &step)
        })
        .collect()
}
