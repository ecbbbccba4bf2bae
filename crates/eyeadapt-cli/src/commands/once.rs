//! Single adaptation step.

use crate::OnceArgs;
use anyhow::{Context, Result, bail};
use eyeadapt_core::{AdaptationParams, ExposureState, FrameSample};
use eyeadapt_exposure::step;
use tracing::info;

/// Runs one step from the given state and prints the result.
pub fn run(args: OnceArgs, params: &AdaptationParams) -> Result<()> {
    let [r, g, b] = <[f32; 3]>::try_from(args.rgb.as_slice())
        .ok()
        .with_context(|| format!("--rgb expects 3 components, got {}", args.rgb.len()))?;
    let sample = FrameSample::new(r, g, b);
    sample.validate()?;
    if !(args.dt.is_finite() && args.dt >= 0.0) {
        bail!("--dt must be finite and non-negative, got {}", args.dt);
    }

    let state = ExposureState::new(args.current, args.next);
    let out = step(state, sample, &params.with_dt(args.dt));
    info!(luminance = out.luminance, target = out.target, "single step");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&super::FrameReport::new(0, &out))?);
    } else {
        println!("luminance: {:.6}", out.luminance);
        println!("target:    {:.6}", out.target);
        println!("factor:    {:.6}", out.factor);
        println!("current:   {:.6}", out.state.current);
        println!("next:      {:.6}", out.state.next);
    }
    Ok(())
}
