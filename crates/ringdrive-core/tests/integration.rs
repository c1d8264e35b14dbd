//! Integration tests for ringdrive-core DSP primitives.
//!
//! Verifies behavior at the signal level: LFO frequency accuracy by zero
//! crossing count, unipolar envelope shape, peak-matched gain staging over
//! consecutive blocks, and clipper output levels.

use ringdrive_core::{
    Oscillator, gain, hard_clip, linear_to_db, peak_magnitude, rms, soft_clip,
};

const SAMPLE_RATE: f64 = 48000.0;

/// Run `lfo` on channel 0 for `n` samples.
fn render(lfo: &mut Oscillator, n: usize) -> Vec<f64> {
    (0..n).map(|_| lfo.next(0)).collect()
}

/// Count rising zero crossings.
fn rising_crossings(signal: &[f64]) -> usize {
    signal.windows(2).filter(|w| w[0] < 0.0 && w[1] >= 0.0).count()
}

// ============================================================================
// 1. LFO accuracy
// ============================================================================

#[test]
fn lfo_frequency_matches_crossings() {
    for freq in [1.0, 10.0, 100.0, 440.0] {
        let mut lfo = Oscillator::new();
        lfo.set_frequency(freq, SAMPLE_RATE);
        let signal = render(&mut lfo, SAMPLE_RATE as usize);

        let crossings = rising_crossings(&signal) as f64;
        assert!(
            (crossings - freq).abs() <= 1.0,
            "{freq} Hz LFO produced {crossings} rising crossings in one second"
        );
    }
}

#[test]
fn lfo_quarter_cycle_reaches_peak() {
    let mut lfo = Oscillator::new();
    lfo.set_frequency(1.0, 400.0);
    let signal = render(&mut lfo, 101);
    // Sample 100 is a quarter turn at 1 Hz / 400 Hz
    assert!((signal[100] - 1.0).abs() < 1e-9);
}

#[test]
fn unipolar_lfo_is_a_gain_envelope() {
    let mut lfo = Oscillator::new();
    lfo.set_frequency(2.0, SAMPLE_RATE);

    let envelope: Vec<f64> = (0..SAMPLE_RATE as usize).map(|_| lfo.next_unipolar(0)).collect();
    let min = envelope.iter().copied().fold(f64::INFINITY, f64::min);
    let max = envelope.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    assert!(min >= 0.0 && min < 0.01, "envelope floor {min}");
    assert!(max <= 1.0 && max > 0.99, "envelope ceiling {max}");
    // First sample is sin(0) remapped
    assert_eq!(envelope[0], 0.5);
}

#[test]
fn zero_frequency_freezes_phase() {
    let mut lfo = Oscillator::new();
    lfo.set_frequency(0.0, SAMPLE_RATE);
    let signal = render(&mut lfo, 256);
    assert!(signal.iter().all(|&s| s == 0.0));
    assert_eq!(lfo.angle(0), 0.0);
}

// ============================================================================
// 2. Peak-matched gain staging
// ============================================================================

/// Drive a block by `drive`, hard clip it, then apply the ramped makeup gain.
fn drive_block(
    block: &mut [f32],
    drive: f32,
    makeup: &mut ringdrive_core::LinearSmoothedParam,
) {
    let reference = peak_magnitude(block);
    for s in block.iter_mut() {
        *s = hard_clip(*s * drive, 1.0);
    }
    makeup.set_target(gain::compensation_ratio(reference, peak_magnitude(block)));
    for s in block.iter_mut() {
        *s = (f64::from(*s) * makeup.advance()) as f32;
    }
}

#[test]
fn makeup_gain_converges_to_reference_peak() {
    let mut makeup = gain::compensation_param(SAMPLE_RATE);
    let block_len = 512;
    let mut last_peak = 0.0;

    // 100 ms is 4800 samples; run well past it
    for _ in 0..20 {
        let mut block = vec![0.5_f32; block_len];
        drive_block(&mut block, 4.0, &mut makeup);
        last_peak = peak_magnitude(&block);
    }

    assert!(
        (last_peak - 0.5).abs() < 1e-4,
        "steady-state peak {last_peak} should match the 0.5 input peak"
    );
}

#[test]
fn makeup_gain_ramps_without_steps() {
    let mut makeup = gain::compensation_param(SAMPLE_RATE);
    let mut block = vec![0.25_f32; 256];
    drive_block(&mut block, 4.0, &mut makeup);

    // Constant input: consecutive outputs differ by one ramp increment at most
    let max_step = block
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(0.0_f32, f32::max);
    assert!(max_step < 1e-3, "largest per-sample step {max_step}");
    assert!(block[255] < block[0], "gain should be ramping down");
}

// ============================================================================
// 3. Clippers and meters
// ============================================================================

#[test]
fn soft_clip_compresses_loud_sine() {
    let sine: Vec<f32> = (0..480)
        .map(|i| 4.0 * libm::sinf(core::f32::consts::TAU * i as f32 / 480.0))
        .collect();
    let clipped: Vec<f32> = sine.iter().map(|&s| soft_clip(s)).collect();

    assert!(peak_magnitude(&clipped) < 1.0);
    // Saturation raises the RMS/peak ratio above a sine's 0.707
    let crest = rms(&clipped) / peak_magnitude(&clipped);
    assert!(crest > 0.8, "clipped crest ratio {crest}");
}

#[test]
fn meters_agree_on_full_scale() {
    let square = [1.0_f32, -1.0, 1.0, -1.0];
    assert_eq!(peak_magnitude(&square), 1.0);
    assert!(linear_to_db(rms(&square)).abs() < 1e-4);
}
