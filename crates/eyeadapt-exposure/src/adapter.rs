//! Stateful exposure adapter.
//!
//! [`ExposureAdapter`] owns the single [`ExposureState`] of a rendering
//! context. Advancing it needs `&mut self`, so the one-writer rule holds by
//! construction; sharing it with a consumer on another thread requires the
//! caller to pick a synchronization primitive.

use eyeadapt_core::{AdaptationParams, ExposureState, FrameSample};
use tracing::{debug, trace};

use crate::law::{self, AdaptationStep};

/// Owner of the exposure state for one rendering context.
///
/// # Example
///
/// ```rust
/// use eyeadapt_core::{AdaptationParams, FrameSample};
/// use eyeadapt_exposure::ExposureAdapter;
///
/// let mut adapter = ExposureAdapter::new();
/// let params = AdaptationParams::default().with_dt(1.0 / 60.0);
///
/// // Bright scene: exposure drifts down from 1.0.
/// for _ in 0..120 {
///     adapter.update(FrameSample::gray(4.0), &params);
/// }
/// assert!(adapter.exposure() < 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExposureAdapter {
    state: ExposureState,
    frame: u64,
}

impl ExposureAdapter {
    /// Creates an adapter with both exposure slots at `1.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter resuming from a persisted state.
    pub fn with_state(state: ExposureState) -> Self {
        Self { state, frame: 0 }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> ExposureState {
        self.state
    }

    /// Exposure to tone-map the current frame with.
    #[inline]
    pub fn exposure(&self) -> f32 {
        self.state.current
    }

    /// Number of updates since creation or the last [`reset`](Self::reset).
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Sets both slots to `exposure`, e.g. after a camera cut.
    pub fn reset(&mut self, exposure: f32) {
        debug!(exposure, "exposure state reset");
        self.state = ExposureState::uniform(exposure);
        self.frame = 0;
    }

    /// Advances one frame and returns the exposure for this frame.
    pub fn update(&mut self, sample: FrameSample, params: &AdaptationParams) -> f32 {
        self.step(sample, params).state.current
    }

    /// Advances one frame and returns every intermediate value.
    pub fn step(&mut self, sample: FrameSample, params: &AdaptationParams) -> AdaptationStep {
        let step = law::step(self.state, sample, params);

        if step.is_black_frame() {
            debug!(
                frame = self.frame,
                luminance = step.luminance,
                policy = ?params.zero_luminance,
                target = step.target,
                "black frame metered"
            );
        }
        trace!(
            frame = self.frame,
            luminance = step.luminance,
            target = step.target,
            factor = step.factor,
            current = step.state.current,
            next = step.state.next,
            "exposure step"
        );

        self.state = step.state;
        self.frame += 1;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_frame_uses_initial_exposure() {
        let mut adapter = ExposureAdapter::new();
        let params = AdaptationParams::default().with_dt(0.5);
        let exposure = adapter.update(FrameSample::gray(1.0), &params);

        assert_eq!(exposure, 1.0);
        assert_abs_diff_eq!(adapter.state().next, 0.75, epsilon = 1e-6);
        assert_eq!(adapter.frame(), 1);
    }

    #[test]
    fn test_second_frame_reads_first_output() {
        let mut adapter = ExposureAdapter::new();
        let params = AdaptationParams::default().with_dt(0.5);
        adapter.update(FrameSample::gray(1.0), &params);
        let exposure = adapter.update(FrameSample::gray(1.0), &params);

        assert_abs_diff_eq!(exposure, 0.75, epsilon = 1e-6);
        assert_abs_diff_eq!(adapter.state().next, 0.625, epsilon = 1e-6);
    }

    #[test]
    fn test_with_state_resumes() {
        let adapter = ExposureAdapter::with_state(ExposureState::new(2.0, 3.0));
        assert_eq!(adapter.exposure(), 2.0);
        assert_eq!(adapter.state().next, 3.0);
    }

    #[test]
    fn test_reset() {
        let mut adapter = ExposureAdapter::new();
        let params = AdaptationParams::default().with_dt(1.0);
        adapter.update(FrameSample::BLACK, &params);
        adapter.reset(0.5);

        assert_eq!(adapter.state(), ExposureState::uniform(0.5));
        assert_eq!(adapter.frame(), 0);
    }

    #[test]
    fn test_step_reports_black_frame() {
        let mut adapter = ExposureAdapter::new();
        let params = AdaptationParams::default().with_dt(0.25);
        let step = adapter.step(FrameSample::BLACK, &params);

        assert!(step.is_black_frame());
        assert_eq!(step.target, params.max_exposure);
        assert_eq!(adapter.state(), step.state);
    }
}
