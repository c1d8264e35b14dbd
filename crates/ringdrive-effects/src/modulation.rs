//! Ring / amplitude modulation stage.
//!
//! Multiplies the signal by a sine LFO. In ring modulation the carrier is
//! bipolar, so a sinusoidal input `sin(f_in)` becomes sidebands at
//! `f_in ± f_lfo` with the original frequency suppressed. In amplitude
//! modulation the carrier is remapped to `[0, 1]` first, giving a
//! tremolo-like envelope that never inverts polarity.
//!
//! ## Signal Flow
//!
//! ```text
//! RM: out = in × sin(θ)
//! AM: out = in × (sin(θ) + 1) / 2
//! ```
//!
//! A frequency of 0 Hz disables the stage: samples pass through bit-exact
//! and the phase does not move.

use ringdrive_core::{Oscillator, lfo::to_unipolar};

use crate::ModulationMode;

/// Modulation stage with one LFO phase per channel.
///
/// # Example
///
/// ```rust
/// use ringdrive_effects::{Modulation, ModulationMode};
///
/// let mut stage = Modulation::new();
/// stage.set_frequency(100.0, 44100.0);
/// stage.set_mode(ModulationMode::AmplitudeModulation);
///
/// let mut block = [1.0_f32; 8];
/// stage.process(&mut block, 0);
/// // First sample sees sin(0) = 0, remapped to 0.5
/// assert_eq!(block[0], 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Modulation {
    lfo: Oscillator,
    frequency_hz: f64,
    mode: ModulationMode,
}

impl Modulation {
    /// Create a stage at 0 Hz (disabled), ring modulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the LFO frequency and recompute the phase increment for `sample_rate`.
    pub fn set_frequency(&mut self, freq_hz: f64, sample_rate: f64) {
        self.frequency_hz = freq_hz;
        self.lfo.set_frequency(freq_hz, sample_rate);
    }

    /// LFO frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency_hz
    }

    /// Select ring or amplitude modulation.
    pub fn set_mode(&mut self, mode: ModulationMode) {
        self.mode = mode;
    }

    /// Current mode.
    pub fn mode(&self) -> ModulationMode {
        self.mode
    }

    /// The stage's oscillator.
    pub fn oscillator(&self) -> &Oscillator {
        &self.lfo
    }

    /// Zero all LFO phases.
    pub fn reset(&mut self) {
        self.lfo.reset();
    }

    /// Modulate `samples` in place using `channel`'s phase.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= MAX_CHANNELS` and the stage is enabled.
    #[inline]
    pub fn process(&mut self, samples: &mut [f32], channel: usize) {
        if self.frequency_hz <= 0.0 {
            return;
        }
        match self.mode {
            ModulationMode::RingModulation => {
                for sample in samples.iter_mut() {
                    let carrier = self.lfo.next(channel);
                    *sample = (f64::from(*sample) * carrier) as f32;
                }
            }
            ModulationMode::AmplitudeModulation => {
                for sample in samples.iter_mut() {
                    let carrier = to_unipolar(self.lfo.next(channel));
                    *sample = (f64::from(*sample) * carrier) as f32;
                }
            }
        }
    }
}
