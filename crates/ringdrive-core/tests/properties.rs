//! Property-based tests for ringdrive-core DSP primitives.
//!
//! Tests phase wrapping, range mapping, clipping bounds, and gain ramp
//! monotonicity using proptest for randomized input generation.

use core::f64::consts::TAU;
use proptest::prelude::*;
use ringdrive_core::{
    LinearSmoothedParam, ParamDescriptor, Oscillator, gain, hard_clip,
    lfo::{advance_phase, lfo_sample, to_unipolar},
    soft_clip,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any in-range angle and any increment smaller than a full turn,
    /// the advanced phase stays in [0, 2π).
    #[test]
    fn phase_stays_wrapped(
        angle in 0.0f64..TAU,
        delta in -6.28f64..6.28f64,
    ) {
        let next = advance_phase(angle, delta);
        prop_assert!(
            (0.0..TAU).contains(&next),
            "advance_phase({}, {}) = {} escaped [0, 2π)", angle, delta, next
        );
    }

    /// Remapped sine samples are always usable as a gain in [0, 1].
    #[test]
    fn unipolar_sine_in_unit_range(angle in 0.0f64..TAU) {
        let value = to_unipolar(lfo_sample(angle));
        prop_assert!((0.0..=1.0).contains(&value), "to_unipolar(sin({})) = {}", angle, value);
    }

    /// An oscillator run for any number of samples at any audio-rate
    /// frequency keeps both channel phases wrapped.
    #[test]
    fn oscillator_phase_invariant(
        freq in 0.0f64..5000.0,
        sample_rate in prop::sample::select(vec![22050.0f64, 44100.0, 48000.0, 96000.0]),
        steps in 1usize..2048,
    ) {
        let mut lfo = Oscillator::new();
        lfo.set_frequency(freq, sample_rate);
        for _ in 0..steps {
            let left = lfo.next(0);
            let right = lfo.next(1);
            prop_assert!((-1.0..=1.0).contains(&left));
            prop_assert_eq!(left, right);
        }
        prop_assert!((0.0..TAU).contains(&lfo.angle(0)));
    }

    /// Hard clip never exceeds unity for any finite input.
    #[test]
    fn hard_clip_bounded(x in -1.0e6f32..1.0e6f32) {
        let y = hard_clip(x, 1.0);
        prop_assert!((-1.0..=1.0).contains(&y), "hard_clip({}) = {}", x, y);
    }

    /// Soft clip stays strictly inside (-1, 1) over the range where f32
    /// tanh has not yet rounded to unity.
    #[test]
    fn soft_clip_strictly_bounded(x in -8.0f32..8.0f32) {
        let y = soft_clip(x);
        prop_assert!(y > -1.0 && y < 1.0, "soft_clip({}) = {}", x, y);
    }

    /// Past |x| of about 9 the f32 result saturates to exactly ±1.0, so
    /// heavily driven samples only meet the closed bound.
    #[test]
    fn soft_clip_saturates_to_closed_bound(x in -1000.0f32..1000.0f32) {
        let y = soft_clip(x);
        prop_assert!((-1.0..=1.0).contains(&y), "soft_clip({}) = {}", x, y);
        if x.abs() >= 10.0 {
            prop_assert_eq!(y.abs(), 1.0);
        }
    }

    /// A linear ramp moves monotonically toward its target and lands on it.
    #[test]
    fn linear_ramp_monotonic(
        start in 0.0f64..10.0,
        target in 0.0f64..10.0,
        time_ms in 1.0f64..200.0,
    ) {
        let mut param = LinearSmoothedParam::with_config(start, 48000.0, time_ms);
        param.set_target(target);

        let rising = target >= start;
        let mut prev = param.get();
        for _ in 0..param.ramp_length_samples() {
            let v = param.advance();
            if rising {
                prop_assert!(v >= prev - 1e-12, "ramp reversed: {} -> {}", prev, v);
            } else {
                prop_assert!(v <= prev + 1e-12, "ramp reversed: {} -> {}", prev, v);
            }
            prev = v;
        }
        prop_assert_eq!(param.get(), target);
    }

    /// Compensation ratio is finite for every pair of measured peaks.
    #[test]
    fn compensation_ratio_finite(
        reference in 0.0f32..4.0,
        processed in 0.0f32..4.0,
    ) {
        prop_assert!(gain::compensation_ratio(reference, processed).is_finite());
    }

    /// Descriptor clamping always lands inside the range.
    #[test]
    fn descriptor_clamp_in_range(value in prop::num::f64::ANY) {
        let desc = ParamDescriptor::custom("Drive", "Drive", 1.0, 50.0, 1.0);
        let clamped = desc.clamp(value);
        prop_assert!((1.0..=50.0).contains(&clamped), "clamp({}) = {}", value, clamped);
    }
}
