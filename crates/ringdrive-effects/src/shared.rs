//! Lock-free parameter storage shared between control and audio threads.
//!
//! Each field is a single-word atomic: continuous values are stored as `f64`
//! bit patterns in an `AtomicU64`, modes as their numeric id in an
//! `AtomicU8`. Writers clamp before storing, so readers never observe an
//! out-of-range value. The audio thread reads all fields once per block via
//! [`SharedParams::snapshot`].
//!
//! Fields are independent atomics; a snapshot taken while another thread is
//! writing several fields may mix old and new values, but each individual
//! value is always one that some writer stored.

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
use core::sync::atomic::{AtomicU8, AtomicU64, Ordering};
#[cfg(feature = "std")]
use std::sync::Arc;

use ringdrive_core::{ParamDescriptor, ParameterInfo};

use crate::params::{
    self, ClipMode, EffectParameters, ModulationMode, PARAM_COUNT, clamp_mod_frequency,
    clamp_overdrive_gain, clamp_pulser_frequency,
};

/// Atomic storage for every chain parameter.
#[derive(Debug)]
pub struct SharedParams {
    mod_frequency: AtomicU64,
    overdrive: AtomicU64,
    pulser_frequency: AtomicU64,
    modulation_mode: AtomicU8,
    clip_mode: AtomicU8,
}

impl SharedParams {
    /// Create storage holding `initial` (clamped).
    pub fn new(initial: EffectParameters) -> Self {
        let p = initial.clamped();
        Self {
            mod_frequency: AtomicU64::new(p.mod_frequency_hz.to_bits()),
            overdrive: AtomicU64::new(p.overdrive_gain.to_bits()),
            pulser_frequency: AtomicU64::new(p.pulser_frequency_hz.to_bits()),
            modulation_mode: AtomicU8::new(p.modulation_mode.id()),
            clip_mode: AtomicU8::new(p.clip_mode.id()),
        }
    }

    #[inline]
    fn load_f64(atomic: &AtomicU64) -> f64 {
        f64::from_bits(atomic.load(Ordering::Acquire))
    }

    #[inline]
    fn store_f64(atomic: &AtomicU64, value: f64) {
        atomic.store(value.to_bits(), Ordering::Release);
    }

    /// Read every field once.
    pub fn snapshot(&self) -> EffectParameters {
        EffectParameters {
            mod_frequency_hz: self.mod_frequency(),
            overdrive_gain: self.overdrive_gain(),
            pulser_frequency_hz: self.pulser_frequency(),
            modulation_mode: self.modulation_mode(),
            clip_mode: self.clip_mode(),
        }
    }

    /// Overwrite every field (each clamped).
    pub fn store(&self, params: EffectParameters) {
        self.set_mod_frequency(params.mod_frequency_hz);
        self.set_overdrive_gain(params.overdrive_gain);
        self.set_pulser_frequency(params.pulser_frequency_hz);
        self.set_modulation_mode(params.modulation_mode);
        self.set_clip_mode(params.clip_mode);
    }

    /// Modulation LFO frequency in Hz.
    pub fn mod_frequency(&self) -> f64 {
        Self::load_f64(&self.mod_frequency)
    }

    /// Set the modulation LFO frequency, clamped to `[0, 5000]` Hz.
    pub fn set_mod_frequency(&self, freq_hz: f64) {
        Self::store_f64(&self.mod_frequency, clamp_mod_frequency(freq_hz));
    }

    /// Overdrive gain multiplier.
    pub fn overdrive_gain(&self) -> f64 {
        Self::load_f64(&self.overdrive)
    }

    /// Set the overdrive gain, clamped to `[1, 50]`.
    pub fn set_overdrive_gain(&self, gain: f64) {
        Self::store_f64(&self.overdrive, clamp_overdrive_gain(gain));
    }

    /// Pulser LFO frequency in Hz.
    pub fn pulser_frequency(&self) -> f64 {
        Self::load_f64(&self.pulser_frequency)
    }

    /// Set the pulser LFO frequency, clamped to `[0, 10]` Hz.
    pub fn set_pulser_frequency(&self, freq_hz: f64) {
        Self::store_f64(&self.pulser_frequency, clamp_pulser_frequency(freq_hz));
    }

    /// Current modulation mode.
    pub fn modulation_mode(&self) -> ModulationMode {
        ModulationMode::from_id(self.modulation_mode.load(Ordering::Acquire))
    }

    /// Set the modulation mode.
    pub fn set_modulation_mode(&self, mode: ModulationMode) {
        self.modulation_mode.store(mode.id(), Ordering::Release);
    }

    /// Current clip mode.
    pub fn clip_mode(&self) -> ClipMode {
        ClipMode::from_id(self.clip_mode.load(Ordering::Acquire))
    }

    /// Set the clip mode.
    pub fn set_clip_mode(&self, mode: ClipMode) {
        self.clip_mode.store(mode.id(), Ordering::Release);
    }
}

impl Default for SharedParams {
    fn default() -> Self {
        Self::new(EffectParameters::default())
    }
}

/// Cloneable control-side handle to a chain's [`SharedParams`].
///
/// Hand clones to UI, automation, or network threads; every clone writes to
/// the same storage the engine snapshots at each block.
///
/// # Example
///
/// ```rust
/// use ringdrive_effects::{ModulationMode, MultiEffect};
///
/// let engine = MultiEffect::new();
/// let handle = engine.handle();
///
/// std::thread::spawn(move || {
///     handle.set_mod_frequency(440.0);
///     handle.set_modulation_mode_id(2);
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(engine.mod_frequency(), 440.0);
/// assert_eq!(engine.modulation_mode(), ModulationMode::AmplitudeModulation);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamHandle {
    shared: Arc<SharedParams>,
}

impl ParamHandle {
    /// Create a handle to fresh storage holding `initial`.
    pub fn new(initial: EffectParameters) -> Self {
        Self {
            shared: Arc::new(SharedParams::new(initial)),
        }
    }

    /// The underlying storage.
    pub fn shared(&self) -> &SharedParams {
        &self.shared
    }

    /// Consistent-per-field copy of all values.
    pub fn parameters(&self) -> EffectParameters {
        self.shared.snapshot()
    }

    /// Replace all values (each clamped).
    pub fn set_parameters(&self, params: EffectParameters) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?params, "set_parameters");
        self.shared.store(params);
    }

    /// Modulation LFO frequency in Hz.
    pub fn mod_frequency(&self) -> f64 {
        self.shared.mod_frequency()
    }

    /// Set the modulation LFO frequency, clamped to `[0, 5000]` Hz.
    pub fn set_mod_frequency(&self, freq_hz: f64) {
        self.shared.set_mod_frequency(freq_hz);
        #[cfg(feature = "tracing")]
        tracing::debug!(requested = freq_hz, applied = self.shared.mod_frequency(), "mod_frequency");
    }

    /// Overdrive gain multiplier.
    pub fn overdrive_gain(&self) -> f64 {
        self.shared.overdrive_gain()
    }

    /// Set the overdrive gain, clamped to `[1, 50]`.
    pub fn set_overdrive_gain(&self, gain: f64) {
        self.shared.set_overdrive_gain(gain);
        #[cfg(feature = "tracing")]
        tracing::debug!(requested = gain, applied = self.shared.overdrive_gain(), "overdrive_gain");
    }

    /// Pulser LFO frequency in Hz.
    pub fn pulser_frequency(&self) -> f64 {
        self.shared.pulser_frequency()
    }

    /// Set the pulser LFO frequency, clamped to `[0, 10]` Hz.
    pub fn set_pulser_frequency(&self, freq_hz: f64) {
        self.shared.set_pulser_frequency(freq_hz);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            requested = freq_hz,
            applied = self.shared.pulser_frequency(),
            "pulser_frequency"
        );
    }

    /// Current modulation mode.
    pub fn modulation_mode(&self) -> ModulationMode {
        self.shared.modulation_mode()
    }

    /// Set the modulation mode.
    pub fn set_modulation_mode(&self, mode: ModulationMode) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?mode, "modulation_mode");
        self.shared.set_modulation_mode(mode);
    }

    /// Set the modulation mode by id (1 = RM, 2 = AM; anything else RM).
    pub fn set_modulation_mode_id(&self, id: u8) {
        self.set_modulation_mode(ModulationMode::from_id(id));
    }

    /// Current clip mode.
    pub fn clip_mode(&self) -> ClipMode {
        self.shared.clip_mode()
    }

    /// Set the clip mode.
    pub fn set_clip_mode(&self, mode: ClipMode) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?mode, "clip_mode");
        self.shared.set_clip_mode(mode);
    }

    /// Set the clip mode by id (1 = Soft, 2 = Hard; anything else Hard).
    pub fn set_clip_mode_id(&self, id: u8) {
        self.set_clip_mode(ClipMode::from_id(id));
    }
}

impl ParameterInfo for ParamHandle {
    fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        params::descriptor(index)
    }

    fn get_param(&self, index: usize) -> f64 {
        self.parameters().get_index(index)
    }

    fn set_param(&mut self, index: usize, value: f64) {
        let mut p = self.parameters();
        p.set_index(index, value);
        match index {
            params::PARAM_MOD_FREQ => self.set_mod_frequency(p.mod_frequency_hz),
            params::PARAM_OVERDRIVE => self.set_overdrive_gain(p.overdrive_gain),
            params::PARAM_PULSER_FREQ => self.set_pulser_frequency(p.pulser_frequency_hz),
            params::PARAM_MOD_MODE => self.set_modulation_mode(p.modulation_mode),
            params::PARAM_CLIP_MODE => self.set_clip_mode(p.clip_mode),
            _ => {}
        }
    }
}
