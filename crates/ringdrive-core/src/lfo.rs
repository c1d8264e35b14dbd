//! Low Frequency Oscillator for modulation and pulsing.
//!
//! Phase is carried as an angle in radians, wrapped to `[0, 2π)`. The phase
//! update itself is the pure function [`advance_phase`]; [`Oscillator`] owns
//! one angle per channel plus the per-sample increment shared by all of them.
//!
//! ## Signal ranges
//!
//! - [`lfo_sample`] is bipolar, `[-1.0, 1.0]`, suitable for ring modulation.
//! - [`to_unipolar`] remaps that to `[0.0, 1.0]` so the LFO can act as a
//!   gain envelope without inverting polarity.

use core::f64::consts::TAU;
use libm::{fmod, sin};

/// Number of channels with a dedicated oscillator phase.
pub const MAX_CHANNELS: usize = 2;

/// Sine LFO value at `angle` (radians).
#[inline]
pub fn lfo_sample(angle: f64) -> f64 {
    sin(angle)
}

/// Advance `angle` by `delta` radians and wrap the result to `[0, 2π)`.
///
/// Holds for either sign of `delta` provided `|delta| < 2π`, which is always
/// the case for sub-Nyquist frequencies at audio sample rates.
///
/// # Example
///
/// ```rust
/// use ringdrive_core::lfo::advance_phase;
/// use core::f64::consts::TAU;
///
/// let angle = advance_phase(TAU - 0.1, 0.2);
/// assert!((angle - 0.1).abs() < 1e-12);
///
/// let angle = advance_phase(0.05, -0.1);
/// assert!(angle >= 0.0 && angle < TAU);
/// ```
#[inline]
pub fn advance_phase(angle: f64, delta: f64) -> f64 {
    let mut wrapped = fmod(angle + delta, TAU);
    if wrapped < 0.0 {
        wrapped += TAU;
    }
    // A tiny negative remainder plus TAU rounds to exactly TAU.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Rescale a bipolar sample in `[-1, 1]` to unipolar `[0, 1]`.
#[inline]
pub fn to_unipolar(sample: f64) -> f64 {
    (sample + 1.0) * 0.5
}

/// Per-sample angle increment for `freq_hz` at `sample_rate` Hz.
///
/// Returns 0.0 for a non-positive sample rate, leaving the oscillator frozen
/// until a real rate is known.
#[inline]
pub fn angle_delta(freq_hz: f64, sample_rate: f64) -> f64 {
    if sample_rate <= 0.0 {
        return 0.0;
    }
    freq_hz / sample_rate * TAU
}

/// Sine oscillator with independent phase per channel.
///
/// All channels advance by the same increment, so two channels that start
/// in phase stay in phase; they only diverge if one of them is not advanced
/// (for example a mono block followed by a stereo block).
///
/// # Example
///
/// ```rust
/// use ringdrive_core::Oscillator;
///
/// let mut lfo = Oscillator::new();
/// lfo.set_frequency(2.0, 48000.0);
///
/// let first = lfo.next(0); // sin(0)
/// assert_eq!(first, 0.0);
/// assert!(lfo.angle(0) > 0.0);
/// assert_eq!(lfo.angle(1), 0.0); // channel 1 untouched
/// ```
#[derive(Debug, Clone, Default)]
pub struct Oscillator {
    /// Current angle for each channel, in `[0, 2π)`.
    angles: [f64; MAX_CHANNELS],
    /// Radians advanced per sample.
    delta: f64,
}

impl Oscillator {
    /// Create an oscillator with zero phase and zero frequency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the per-sample increment for a new frequency or sample rate.
    ///
    /// Phase is preserved so retuning does not click.
    pub fn set_frequency(&mut self, freq_hz: f64, sample_rate: f64) {
        self.delta = angle_delta(freq_hz, sample_rate);
    }

    /// Radians advanced per sample.
    pub fn angle_delta(&self) -> f64 {
        self.delta
    }

    /// Current angle of `channel`, or 0.0 for channels without phase state.
    pub fn angle(&self, channel: usize) -> f64 {
        self.angles.get(channel).copied().unwrap_or(0.0)
    }

    /// Zero every channel's phase.
    pub fn reset(&mut self) {
        self.angles = [0.0; MAX_CHANNELS];
    }

    /// Read the bipolar sample at `channel`'s phase, then advance that phase.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= MAX_CHANNELS`.
    #[inline]
    pub fn next(&mut self, channel: usize) -> f64 {
        let angle = self.angles[channel];
        self.angles[channel] = advance_phase(angle, self.delta);
        lfo_sample(angle)
    }

    /// Like [`next`](Self::next), remapped to `[0, 1]`.
    #[inline]
    pub fn next_unipolar(&mut self, channel: usize) -> f64 {
        to_unipolar(self.next(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_delta_scenario() {
        // 100 Hz at 44.1 kHz
        let delta = angle_delta(100.0, 44100.0);
        assert!(
            (delta - 0.014247585730565955).abs() < 1e-9,
            "unexpected delta {delta}"
        );
    }

    #[test]
    fn test_angle_delta_zero_sample_rate() {
        assert_eq!(angle_delta(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_phase_wraps_forward() {
        let angle = advance_phase(6.2, 0.2);
        assert!((angle - (6.4 - TAU)).abs() < 1e-12);
    }

    #[test]
    fn test_phase_wraps_backward() {
        let angle = advance_phase(0.1, -0.3);
        assert!((angle - (TAU - 0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_phase_tiny_negative_stays_in_range() {
        let angle = advance_phase(0.0, -1e-18);
        assert!((0.0..TAU).contains(&angle), "angle {angle} escaped range");
    }

    #[test]
    fn test_unipolar_endpoints() {
        assert_eq!(to_unipolar(-1.0), 0.0);
        assert_eq!(to_unipolar(0.0), 0.5);
        assert_eq!(to_unipolar(1.0), 1.0);
    }

    #[test]
    fn test_oscillator_full_cycle() {
        let mut lfo = Oscillator::new();
        lfo.set_frequency(1.0, 44100.0);

        // One second at 1 Hz is one full cycle
        for _ in 0..44100 {
            lfo.next(0);
        }

        let angle = lfo.angle(0);
        let error = angle.min(TAU - angle);
        assert!(error < 1e-6, "phase should be back near zero, got {angle}");
    }

    #[test]
    fn test_oscillator_channels_independent() {
        let mut lfo = Oscillator::new();
        lfo.set_frequency(5.0, 48000.0);

        for _ in 0..100 {
            lfo.next(0);
        }
        assert!(lfo.angle(0) > 0.0);
        assert_eq!(lfo.angle(1), 0.0);
    }

    #[test]
    fn test_oscillator_retune_keeps_phase() {
        let mut lfo = Oscillator::new();
        lfo.set_frequency(5.0, 48000.0);
        for _ in 0..10 {
            lfo.next(1);
        }
        let before = lfo.angle(1);

        lfo.set_frequency(7.0, 96000.0);
        assert_eq!(lfo.angle(1), before);
        assert!((lfo.angle_delta() - angle_delta(7.0, 96000.0)).abs() < 1e-15);
    }

    #[test]
    fn test_oscillator_unipolar_range() {
        let mut lfo = Oscillator::new();
        lfo.set_frequency(440.0, 44100.0);

        for _ in 0..1000 {
            let value = lfo.next_unipolar(0);
            assert!(
                (0.0..=1.0).contains(&value),
                "Unipolar value out of range: {}",
                value
            );
        }
    }

    #[test]
    fn test_reset_zeroes_phase() {
        let mut lfo = Oscillator::new();
        lfo.set_frequency(3.0, 48000.0);
        for _ in 0..500 {
            lfo.next(0);
            lfo.next(1);
        }
        lfo.reset();
        assert_eq!(lfo.angle(0), 0.0);
        assert_eq!(lfo.angle(1), 0.0);
    }
}
