//! Overdrive distortion with peak-matched output level.
//!
//! The drive stage multiplies by the overdrive gain and clips, which both
//! raises and flattens the signal. To keep loudness steady while the drive
//! knob moves, the stage measures the peak of each processed block, compares
//! it to a reference peak supplied by the caller (the block's level before
//! any processing), and ramps a makeup gain toward the ratio over 100 ms.
//!
//! ## Signal Flow
//!
//! ```text
//! in ─► [× drive ─► clip]  (skipped at drive = 1) ─► × makeup(t) ─► out
//!                                                        ▲
//!                   reference peak / processed peak ─────┘ (100 ms ramp)
//! ```
//!
//! Compensation runs even when the drive pass is skipped, so it also evens
//! out level changes made by earlier stages.
//!
//! There is a single makeup ramp for the whole stage. Channels are processed
//! in order within a block, so each channel re-targets the ramp from wherever
//! the previous channel left it.

use ringdrive_core::{LinearSmoothedParam, gain, hard_clip, peak_magnitude, soft_clip};

use crate::ClipMode;

/// Overdrive stage with a shared makeup gain.
///
/// # Example
///
/// ```rust
/// use ringdrive_effects::{ClipMode, Distortion};
///
/// let mut dist = Distortion::new(48000.0);
/// dist.set_overdrive(8.0);
/// dist.set_clip_mode(ClipMode::Hard);
///
/// let mut block = [0.5_f32; 64];
/// dist.process(&mut block, 0.5);
/// assert!(block.iter().all(|s| s.abs() <= 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Distortion {
    overdrive: f64,
    clip_mode: ClipMode,
    compensation: LinearSmoothedParam,
}

impl Distortion {
    /// Create a stage at unity drive, hard clipping, makeup gain at 1.0.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            overdrive: 1.0,
            clip_mode: ClipMode::default(),
            compensation: gain::compensation_param(sample_rate),
        }
    }

    /// Rebuild the makeup ramp for `sample_rate`, back at unity.
    pub fn prepare(&mut self, sample_rate: f64) {
        self.compensation = gain::compensation_param(sample_rate);
    }

    /// Return the makeup gain to unity without changing settings.
    pub fn reset(&mut self) {
        self.compensation.set_immediate(1.0);
    }

    /// Set the overdrive gain multiplier. Values at or below 1 bypass the drive pass.
    pub fn set_overdrive(&mut self, gain: f64) {
        self.overdrive = gain;
    }

    /// Overdrive gain multiplier.
    pub fn overdrive(&self) -> f64 {
        self.overdrive
    }

    /// Select the waveshaper.
    pub fn set_clip_mode(&mut self, mode: ClipMode) {
        self.clip_mode = mode;
    }

    /// Current waveshaper.
    pub fn clip_mode(&self) -> ClipMode {
        self.clip_mode
    }

    /// Current makeup gain.
    pub fn makeup_gain(&self) -> f64 {
        self.compensation.get()
    }

    /// Process one channel's block in place.
    ///
    /// `reference_peak` is the level the output is steered back toward.
    pub fn process(&mut self, samples: &mut [f32], reference_peak: f32) {
        if self.overdrive > 1.0 {
            let drive = self.overdrive;
            match self.clip_mode {
                ClipMode::Soft => {
                    for sample in samples.iter_mut() {
                        *sample = soft_clip((f64::from(*sample) * drive) as f32);
                    }
                }
                ClipMode::Hard => {
                    for sample in samples.iter_mut() {
                        *sample = hard_clip((f64::from(*sample) * drive) as f32, 1.0);
                    }
                }
            }
        }

        let makeup = &mut self.compensation;
        makeup.set_target(gain::compensation_ratio(
            reference_peak,
            peak_magnitude(samples),
        ));
        for sample in samples.iter_mut() {
            *sample = (f64::from(*sample) * makeup.advance()) as f32;
        }
    }
}
