//! Pulsing stage: a slow unipolar amplitude envelope.
//!
//! Same mechanism as amplitude modulation, with its own oscillator and a
//! rate range (0–10 Hz) meant for rhythmic swelling rather than timbre.
//! 0 Hz disables the stage and freezes its phase.

use ringdrive_core::Oscillator;

/// Pulsing stage with one LFO phase per channel.
#[derive(Debug, Clone, Default)]
pub struct Pulser {
    lfo: Oscillator,
    frequency_hz: f64,
}

impl Pulser {
    /// Create a stage at 0 Hz (disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pulse rate and recompute the phase increment for `sample_rate`.
    pub fn set_frequency(&mut self, freq_hz: f64, sample_rate: f64) {
        self.frequency_hz = freq_hz;
        self.lfo.set_frequency(freq_hz, sample_rate);
    }

    /// Pulse rate in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency_hz
    }

    /// The stage's oscillator.
    pub fn oscillator(&self) -> &Oscillator {
        &self.lfo
    }

    /// Zero all LFO phases.
    pub fn reset(&mut self) {
        self.lfo.reset();
    }

    /// Apply the envelope to `samples` in place using `channel`'s phase.
    #[inline]
    pub fn process(&mut self, samples: &mut [f32], channel: usize) {
        if self.frequency_hz <= 0.0 {
            return;
        }
        for sample in samples.iter_mut() {
            let envelope = self.lfo.next_unipolar(channel);
            *sample = (f64::from(*sample) * envelope) as f32;
        }
    }
}
