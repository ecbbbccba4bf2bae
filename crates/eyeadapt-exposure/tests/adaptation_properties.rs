//! Behavioral tests for the exposure adaptation law.
//!
//! Covers the properties a renderer relies on frame after frame: no drift at
//! `dt = 0`, monotonic convergence, range clamping, and the rotation of the
//! double-buffered state.

use approx::assert_abs_diff_eq;
use eyeadapt_core::{AdaptationParams, BlendMode, ExposureState, FrameSample};
use eyeadapt_exposure::{step, update, ExposureAdapter};

const MIN_EXPOSURE: f32 = 0.1;
const MAX_EXPOSURE: f32 = 10.0;

fn params(dt: f32, speed: f32) -> AdaptationParams {
    AdaptationParams::default()
        .with_target_luminance(0.5)
        .with_exposure_range(MIN_EXPOSURE, MAX_EXPOSURE)
        .with_dt(dt)
        .with_adjustment_speed(speed)
}

/// Mixed bag of states and samples, including HDR and black frames.
fn cases() -> Vec<(ExposureState, FrameSample)> {
    vec![
        (ExposureState::default(), FrameSample::gray(0.5)),
        (ExposureState::new(0.3, 7.5), FrameSample::new(2.0, 0.1, 0.4)),
        (ExposureState::new(9.0, 0.2), FrameSample::gray(64.0)),
        (ExposureState::new(1.0, 1.0), FrameSample::BLACK),
        (ExposureState::new(4.0, 0.1), FrameSample::new(0.01, 0.02, 0.0)),
    ]
}

// ============================================================================
// dt = 0
// ============================================================================

#[test]
fn test_zero_dt_leaves_next_equal_to_current() {
    for speed in [0.0, 0.5, 1.0, 10.0] {
        for (state, sample) in cases() {
            let out = update(state, sample, &params(0.0, speed));
            assert_eq!(out.current, state.next);
            assert_eq!(out.next, out.current, "state {state:?}, sample {sample:?}");
        }
    }
}

#[test]
fn test_zero_dt_holds_extrapolating_blend_too() {
    let p = params(0.0, 100.0).with_blend(BlendMode::Extrapolate);
    for (state, sample) in cases() {
        let out = update(state, sample, &p);
        assert_eq!(out.next, out.current);
    }
}

// ============================================================================
// Convergence
// ============================================================================

fn assert_converges(start: f32, sample: FrameSample, expected_target: f32) {
    const EPS: f32 = 1e-4;

    let p = params(1.0 / 60.0, 1.0);
    let mut state = ExposureState::uniform(start);
    let mut distance = (expected_target - state.next).abs();

    for frame in 0..10_000 {
        let out = step(state, sample, &p);
        assert_abs_diff_eq!(out.target, expected_target, epsilon = 1e-5);

        let d = (out.target - out.state.next).abs();
        assert!(d < distance, "frame {frame}: distance {d} did not shrink from {distance}");

        // Approach from one side only.
        assert_eq!(
            (out.state.next - out.target).signum(),
            (start - expected_target).signum(),
            "frame {frame} overshot"
        );

        state = out.state;
        distance = d;
        if distance < EPS {
            return;
        }
    }
    panic!("did not converge, distance {distance}");
}

#[test]
fn test_converges_down_for_bright_scene() {
    // luminance 2.0 -> target 0.25
    assert_converges(1.0, FrameSample::gray(2.0), 0.25);
}

#[test]
fn test_converges_up_for_dim_scene() {
    // luminance 0.1 -> target 5.0
    assert_converges(1.0, FrameSample::gray(0.1), 5.0);
}

#[test]
fn test_adapter_converges_to_clamped_target() {
    let mut adapter = ExposureAdapter::new();
    let p = params(1.0 / 30.0, 3.0);
    for _ in 0..600 {
        adapter.update(FrameSample::gray(0.001), &p);
    }
    assert_abs_diff_eq!(adapter.exposure(), MAX_EXPOSURE, epsilon = 1e-3);
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_out_of_range_targets_are_clamped_inclusive() {
    let p = params(0.05, 2.0);

    for (sample, bound) in [
        (FrameSample::gray(1000.0), MIN_EXPOSURE),
        (FrameSample::gray(0.0005), MAX_EXPOSURE),
        (FrameSample::BLACK, MAX_EXPOSURE),
    ] {
        let mut state = ExposureState::default();
        for _ in 0..500 {
            let out = step(state, sample, &p);
            assert_eq!(out.target, bound);
            assert!(out.state.is_within(MIN_EXPOSURE, MAX_EXPOSURE), "{:?}", out.state);
            state = out.state;
        }
    }
}

#[test]
fn test_full_step_lands_exactly_on_bound() {
    let p = params(1.0, 1.0);
    let out = update(ExposureState::default(), FrameSample::gray(1000.0), &p);
    assert_eq!(out.next, MIN_EXPOSURE);
    let out = update(ExposureState::default(), FrameSample::BLACK, &p);
    assert_eq!(out.next, MAX_EXPOSURE);
}

#[test]
fn test_range_holds_with_alternating_scenes() {
    let mut adapter = ExposureAdapter::new();
    let samples = [
        FrameSample::gray(500.0),
        FrameSample::BLACK,
        FrameSample::new(3.0, 0.0, 0.2),
        FrameSample::gray(0.0001),
    ];
    for frame in 0..400 {
        let dt = if frame % 7 == 0 { 2.0 } else { 0.016 };
        adapter.update(samples[frame % samples.len()], &params(dt, 4.0));
        assert!(adapter.state().is_within(MIN_EXPOSURE, MAX_EXPOSURE));
    }
}

// ============================================================================
// Double buffering
// ============================================================================

#[test]
fn test_next_of_frame_n_is_current_of_frame_n_plus_one() {
    let inputs = [
        (FrameSample::gray(0.5), 0.016),
        (FrameSample::gray(4.0), 0.033),
        (FrameSample::new(0.1, 0.9, 0.2), 0.25),
        (FrameSample::BLACK, 0.1),
        (FrameSample::gray(20.0), 0.5),
    ];

    let mut state = ExposureState::default();
    let mut previous_next = state.next;
    for (sample, dt) in inputs {
        let out = update(state, sample, &params(dt, 1.5));
        assert_eq!(out.current, previous_next);
        previous_next = out.next;
        state = out;
    }
}

#[test]
fn test_adapter_returns_previous_frame_output() {
    let mut adapter = ExposureAdapter::new();
    let mut produced = Vec::new();
    for (i, lum) in [0.2f32, 3.0, 0.7, 12.0].into_iter().enumerate() {
        let exposure = adapter.update(FrameSample::gray(lum), &params(0.1 * (i + 1) as f32, 1.0));
        produced.push((exposure, adapter.state().next));
    }
    for pair in produced.windows(2) {
        assert_eq!(pair[1].0, pair[0].1);
    }
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_scenario_already_at_target() {
    let out = update(ExposureState::new(1.0, 1.0), FrameSample::gray(0.5), &params(1.0, 1.0));
    assert_abs_diff_eq!(out.current, 1.0);
    assert_abs_diff_eq!(out.next, 1.0, epsilon = 1e-5);
}

#[test]
fn test_scenario_half_way_to_darker_target() {
    let out = update(ExposureState::new(1.0, 1.0), FrameSample::gray(1.0), &params(0.5, 1.0));
    assert_abs_diff_eq!(out.next, 0.75, epsilon = 1e-6);
}

#[test]
fn test_scenario_black_frame_goes_to_max_exposure() {
    let out = step(ExposureState::new(1.0, 1.0), FrameSample::BLACK, &params(1.0, 1.0));
    assert_eq!(out.luminance, 0.0);
    assert_eq!(out.target, MAX_EXPOSURE);
    assert_eq!(out.state.next, MAX_EXPOSURE);
}

#[test]
fn test_persisted_state_round_trips_through_adapter() {
    let mut adapter = ExposureAdapter::new();
    adapter.update(FrameSample::gray(3.0), &params(0.2, 1.0));
    let bytes = adapter.state().as_bytes().to_vec();

    let restored = ExposureAdapter::with_state(ExposureState::from_bytes(&bytes).unwrap());
    assert_eq!(restored.state(), adapter.state());
}
