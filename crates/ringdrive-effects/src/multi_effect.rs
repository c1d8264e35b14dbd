//! The complete chain: modulation, distortion, pulsing.
//!
//! [`MultiEffect`] owns the three stages and runs them in a fixed order on
//! every input channel of a block:
//!
//! ```text
//! measure peak ─► Modulation ─► Distortion (makeup toward peak) ─► Pulser
//! ```
//!
//! Parameters live in shared atomic storage (see [`ParamHandle`]). The
//! engine reads them once at the start of each block, so a value written by
//! another thread takes effect at the next block boundary and never part way
//! through one.

use ringdrive_core::{
    AudioEffectEngine, MAX_CHANNELS, ParamDescriptor, ParameterInfo, peak_magnitude,
};

use crate::params::{self, ClipMode, EffectParameters, ModulationMode, PARAM_COUNT};
use crate::{Distortion, Modulation, ParamHandle, Pulser};

/// Sample rate assumed until [`prepare`](AudioEffectEngine::prepare) is called.
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Modulation, distortion and pulsing chain.
///
/// Handles up to [`MAX_CHANNELS`] channels; further input channels pass
/// through untouched.
///
/// # Example
///
/// ```rust
/// use ringdrive_core::AudioEffectEngine;
/// use ringdrive_effects::{ClipMode, MultiEffect};
///
/// let mut engine = MultiEffect::new();
/// engine.set_overdrive_gain(12.0);
/// engine.set_clip_mode(ClipMode::Soft);
/// engine.prepare(48000.0);
///
/// let mut left = vec![0.25_f32; 256];
/// let mut right = vec![0.25_f32; 256];
/// let mut extra = vec![0.9_f32; 256];
/// {
///     let mut buffer: [&mut [f32]; 3] = [&mut left, &mut right, &mut extra];
///     engine.process_block(&mut buffer, 2, 3);
/// }
///
/// assert!(left.iter().all(|s| s.is_finite()));
/// assert!(extra.iter().all(|&s| s == 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct MultiEffect {
    params: ParamHandle,
    /// Values the stages are currently configured with.
    applied: EffectParameters,
    sample_rate: f64,
    modulation: Modulation,
    distortion: Distortion,
    pulser: Pulser,
}

impl Default for MultiEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiEffect {
    /// Create a chain with default parameters at [`DEFAULT_SAMPLE_RATE`].
    pub fn new() -> Self {
        Self::with_handle(ParamHandle::default())
    }

    /// Create a chain whose parameters live in `params`.
    ///
    /// Use this to attach an engine to storage a control surface already holds.
    pub fn with_handle(params: ParamHandle) -> Self {
        let mut engine = Self {
            applied: params.parameters(),
            params,
            sample_rate: DEFAULT_SAMPLE_RATE,
            modulation: Modulation::new(),
            distortion: Distortion::new(DEFAULT_SAMPLE_RATE),
            pulser: Pulser::new(),
        };
        engine.configure_all();
        engine
    }

    /// Create a chain with `params` (clamped) at [`DEFAULT_SAMPLE_RATE`].
    pub fn with_parameters(params: EffectParameters) -> Self {
        Self::with_handle(ParamHandle::new(params))
    }

    /// Cloneable handle for writing parameters from other threads.
    pub fn handle(&self) -> ParamHandle {
        self.params.clone()
    }

    /// Sample rate of the last [`prepare`](AudioEffectEngine::prepare).
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Current parameter values.
    pub fn parameters(&self) -> EffectParameters {
        self.params.parameters()
    }

    /// Replace all parameter values (each clamped).
    pub fn set_parameters(&mut self, params: EffectParameters) {
        self.params.set_parameters(params);
    }

    /// Modulation LFO frequency in Hz.
    pub fn mod_frequency(&self) -> f64 {
        self.params.mod_frequency()
    }

    /// Set the modulation LFO frequency, clamped to `[0, 5000]` Hz.
    pub fn set_mod_frequency(&mut self, freq_hz: f64) {
        self.params.set_mod_frequency(freq_hz);
    }

    /// Overdrive gain multiplier.
    pub fn overdrive_gain(&self) -> f64 {
        self.params.overdrive_gain()
    }

    /// Set the overdrive gain, clamped to `[1, 50]`.
    pub fn set_overdrive_gain(&mut self, gain: f64) {
        self.params.set_overdrive_gain(gain);
    }

    /// Pulser LFO frequency in Hz.
    pub fn pulser_frequency(&self) -> f64 {
        self.params.pulser_frequency()
    }

    /// Set the pulser LFO frequency, clamped to `[0, 10]` Hz.
    pub fn set_pulser_frequency(&mut self, freq_hz: f64) {
        self.params.set_pulser_frequency(freq_hz);
    }

    /// Current modulation mode.
    pub fn modulation_mode(&self) -> ModulationMode {
        self.params.modulation_mode()
    }

    /// Set the modulation mode.
    pub fn set_modulation_mode(&mut self, mode: ModulationMode) {
        self.params.set_modulation_mode(mode);
    }

    /// Set the modulation mode by id (1 = RM, 2 = AM; anything else RM).
    pub fn set_modulation_mode_id(&mut self, id: u8) {
        self.params.set_modulation_mode_id(id);
    }

    /// Current clip mode.
    pub fn clip_mode(&self) -> ClipMode {
        self.params.clip_mode()
    }

    /// Set the clip mode.
    pub fn set_clip_mode(&mut self, mode: ClipMode) {
        self.params.set_clip_mode(mode);
    }

    /// Set the clip mode by id (1 = Soft, 2 = Hard; anything else Hard).
    pub fn set_clip_mode_id(&mut self, id: u8) {
        self.params.set_clip_mode_id(id);
    }

    /// The modulation stage.
    pub fn modulation(&self) -> &Modulation {
        &self.modulation
    }

    /// The distortion stage.
    pub fn distortion(&self) -> &Distortion {
        &self.distortion
    }

    /// The pulsing stage.
    pub fn pulser(&self) -> &Pulser {
        &self.pulser
    }

    /// Push every applied value into the stages, recomputing both LFO increments.
    fn configure_all(&mut self) {
        let p = self.applied;
        self.modulation.set_frequency(p.mod_frequency_hz, self.sample_rate);
        self.modulation.set_mode(p.modulation_mode);
        self.distortion.set_overdrive(p.overdrive_gain);
        self.distortion.set_clip_mode(p.clip_mode);
        self.pulser.set_frequency(p.pulser_frequency_hz, self.sample_rate);
    }

    /// Take this block's parameter snapshot and reconfigure what changed.
    fn apply_snapshot(&mut self) {
        let p = self.params.parameters();
        if p.mod_frequency_hz != self.applied.mod_frequency_hz {
            self.modulation.set_frequency(p.mod_frequency_hz, self.sample_rate);
        }
        if p.pulser_frequency_hz != self.applied.pulser_frequency_hz {
            self.pulser.set_frequency(p.pulser_frequency_hz, self.sample_rate);
        }
        self.modulation.set_mode(p.modulation_mode);
        self.distortion.set_overdrive(p.overdrive_gain);
        self.distortion.set_clip_mode(p.clip_mode);
        self.applied = p;
    }
}

impl AudioEffectEngine for MultiEffect {
    fn prepare(&mut self, sample_rate: f64) {
        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate, "prepare");
        self.sample_rate = sample_rate;
        self.applied = self.params.parameters();
        self.configure_all();
        self.distortion.prepare(sample_rate);
    }

    fn process_block(
        &mut self,
        buffer: &mut [&mut [f32]],
        input_channels: usize,
        output_channels: usize,
    ) {
        let input_channels = input_channels.min(buffer.len());
        let output_channels = output_channels.min(buffer.len());

        for channel in buffer
            .iter_mut()
            .take(output_channels)
            .skip(input_channels)
        {
            channel.fill(0.0);
        }

        self.apply_snapshot();

        for (channel, samples) in buffer
            .iter_mut()
            .take(input_channels.min(MAX_CHANNELS))
            .enumerate()
        {
            let samples: &mut [f32] = samples;
            let input_peak = peak_magnitude(samples);
            self.modulation.process(samples, channel);
            self.distortion.process(samples, input_peak);
            self.pulser.process(samples, channel);
        }
    }

    fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("reset");
        self.modulation.reset();
        self.pulser.reset();
        self.distortion.reset();
    }
}

impl ParameterInfo for MultiEffect {
    fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        params::descriptor(index)
    }

    fn get_param(&self, index: usize) -> f64 {
        self.params.get_param(index)
    }

    fn set_param(&mut self, index: usize, value: f64) {
        self.params.set_param(index, value);
    }
}
