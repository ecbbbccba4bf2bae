//! Frame log replay.
//!
//! Feeds a recorded sequence of frame samples through one adapter, the way
//! a renderer would call it once per frame.

use crate::SimulateArgs;
use anyhow::Result;
use eyeadapt_core::{AdaptationParams, ExposureState};
use eyeadapt_exposure::{clamp_frame_time, ExposureAdapter};
use tracing::{info, warn};

use super::{FrameRecord, FrameReport};

/// Replays the frame log and prints per-frame exposure.
pub fn run(args: SimulateArgs, params: &AdaptationParams) -> Result<()> {
    let frames = super::load_frames(&args.input)?;
    info!(frames = frames.len(), input = %args.input.display(), "replaying frame log");

    if frames.is_empty() {
        warn!("frame log is empty");
    }

    let reports = replay(&frames, args.initial, args.clamp_dt, params);
    super::print_reports(&reports, args.json)?;
    Ok(())
}

/// Runs every frame through a fresh adapter starting at `initial`.
pub fn replay(frames: &[FrameRecord], initial: f32, clamp_dt: bool, params: &AdaptationParams) -> Vec<FrameReport> {
    let mut adapter = ExposureAdapter::with_state(ExposureState::uniform(initial));
    let reports = frames
        .iter()
        .map(|record| {
            let dt = if clamp_dt { clamp_frame_time(record.dt) } else { record.dt };
            let frame = adapter.frame();
            let step = adapter.step(record.rgb, &params.with_dt(dt));
            FrameReport::new(frame, &step)
        })
        .collect();
    info!(exposure = adapter.exposure(), "final exposure");
    reports
}
