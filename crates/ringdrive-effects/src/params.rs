//! Parameter model for the effects chain.
//!
//! [`EffectParameters`] is a plain value snapshot of every control. All
//! setters funnel through the `clamp_*` functions here, so a stored value is
//! always inside its range no matter which surface (typed accessor, index
//! based [`ParameterInfo`](ringdrive_core::ParameterInfo), config file) it
//! came from.
//!
//! ## Parameters
//!
//! | Index | String ID | Range | Default |
//! |-------|-----------|-------|---------|
//! | 0 | `mod_freq` | 0–5000 Hz | 100 Hz |
//! | 1 | `overdrive` | 1–50 × | 1 × |
//! | 2 | `pulser_freq` | 0–10 Hz | 2 Hz |
//! | 3 | `mod_mode` | 1 RM / 2 AM | RM |
//! | 4 | `clip_mode` | 1 Soft / 2 Hard | Hard |

use ringdrive_core::{ParamDescriptor, ParamId, ParamUnit};

/// Upper bound of the modulation LFO frequency, in Hz.
pub const MOD_FREQ_LIMIT: f64 = 5000.0;
/// Upper bound of the overdrive gain multiplier.
pub const OVERDRIVE_LIMIT: f64 = 50.0;
/// Upper bound of the pulser LFO frequency, in Hz.
pub const PULSER_FREQ_LIMIT: f64 = 10.0;

/// Default modulation LFO frequency, in Hz.
pub const DEFAULT_MOD_FREQ_HZ: f64 = 100.0;
/// Default overdrive gain (unity, distortion bypassed).
pub const DEFAULT_OVERDRIVE_GAIN: f64 = 1.0;
/// Default pulser LFO frequency, in Hz.
pub const DEFAULT_PULSER_FREQ_HZ: f64 = 2.0;

/// Index of the modulation frequency parameter.
pub const PARAM_MOD_FREQ: usize = 0;
/// Index of the overdrive gain parameter.
pub const PARAM_OVERDRIVE: usize = 1;
/// Index of the pulser frequency parameter.
pub const PARAM_PULSER_FREQ: usize = 2;
/// Index of the modulation mode selector.
pub const PARAM_MOD_MODE: usize = 3;
/// Index of the clip mode selector.
pub const PARAM_CLIP_MODE: usize = 4;
/// Number of parameters exposed by the chain.
pub const PARAM_COUNT: usize = 5;

const MOD_MODE_LABELS: &[&str] = &["RM", "AM"];
const CLIP_MODE_LABELS: &[&str] = &["Soft", "Hard"];

/// Descriptors for every parameter, in index order.
pub const DESCRIPTORS: [ParamDescriptor; PARAM_COUNT] = [
    ParamDescriptor::frequency_hz(
        "Modulation Frequency",
        "ModFreq",
        0.0,
        MOD_FREQ_LIMIT,
        DEFAULT_MOD_FREQ_HZ,
    )
    .with_id(ParamId(100), "mod_freq"),
    ParamDescriptor::custom(
        "Overdrive",
        "Drive",
        1.0,
        OVERDRIVE_LIMIT,
        DEFAULT_OVERDRIVE_GAIN,
    )
    .with_unit(ParamUnit::Multiplier)
    .with_step(0.1)
    .with_id(ParamId(101), "overdrive"),
    ParamDescriptor::frequency_hz(
        "Pulser Frequency",
        "Pulse",
        0.0,
        PULSER_FREQ_LIMIT,
        DEFAULT_PULSER_FREQ_HZ,
    )
    .with_step(0.01)
    .with_id(ParamId(102), "pulser_freq"),
    ParamDescriptor::selector("Modulation Mode", "ModMode", 1.0, 1.0, MOD_MODE_LABELS)
        .with_id(ParamId(103), "mod_mode"),
    ParamDescriptor::selector("Clip Mode", "Clip", 1.0, 2.0, CLIP_MODE_LABELS)
        .with_id(ParamId(104), "clip_mode"),
];

/// Descriptor for the parameter at `index`.
pub fn descriptor(index: usize) -> Option<ParamDescriptor> {
    DESCRIPTORS.get(index).copied()
}

/// How the modulation LFO is applied to the signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModulationMode {
    /// Multiply by the raw bipolar LFO, producing sum and difference tones.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ring", alias = "rm"))]
    RingModulation,
    /// Multiply by the LFO remapped to `[0, 1]`, a tremolo-like envelope.
    #[cfg_attr(feature = "serde", serde(rename = "am"))]
    AmplitudeModulation,
}

impl ModulationMode {
    /// Mode for a host-facing numeric id (1 = RM, 2 = AM).
    ///
    /// Unrecognized ids fall back to [`RingModulation`](Self::RingModulation).
    pub const fn from_id(id: u8) -> Self {
        match id {
            2 => Self::AmplitudeModulation,
            _ => Self::RingModulation,
        }
    }

    /// Host-facing numeric id.
    pub const fn id(self) -> u8 {
        match self {
            Self::RingModulation => 1,
            Self::AmplitudeModulation => 2,
        }
    }

    /// Short display label.
    pub const fn label(self) -> &'static str {
        MOD_MODE_LABELS[self.id() as usize - 1]
    }
}

/// Waveshaper applied after the overdrive gain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClipMode {
    /// Hyperbolic tangent saturation.
    Soft,
    /// Clamp to `[-1, 1]`.
    #[default]
    Hard,
}

impl ClipMode {
    /// Mode for a host-facing numeric id (1 = Soft, 2 = Hard).
    ///
    /// Unrecognized ids fall back to [`Hard`](Self::Hard).
    pub const fn from_id(id: u8) -> Self {
        match id {
            1 => Self::Soft,
            _ => Self::Hard,
        }
    }

    /// Host-facing numeric id.
    pub const fn id(self) -> u8 {
        match self {
            Self::Soft => 1,
            Self::Hard => 2,
        }
    }

    /// Short display label.
    pub const fn label(self) -> &'static str {
        CLIP_MODE_LABELS[self.id() as usize - 1]
    }
}

/// Clamp `value` to `[min, max]`, mapping NaN to `min`.
#[inline]
fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value >= min {
        value
    } else {
        min
    }
}

/// Clamp a modulation frequency to `[0, MOD_FREQ_LIMIT]`.
#[inline]
pub fn clamp_mod_frequency(freq_hz: f64) -> f64 {
    clamp_range(freq_hz, 0.0, MOD_FREQ_LIMIT)
}

/// Clamp an overdrive gain to `[1, OVERDRIVE_LIMIT]`.
#[inline]
pub fn clamp_overdrive_gain(gain: f64) -> f64 {
    clamp_range(gain, 1.0, OVERDRIVE_LIMIT)
}

/// Clamp a pulser frequency to `[0, PULSER_FREQ_LIMIT]`.
#[inline]
pub fn clamp_pulser_frequency(freq_hz: f64) -> f64 {
    clamp_range(freq_hz, 0.0, PULSER_FREQ_LIMIT)
}

/// Selector value from an index-based write: nearest integer, as an id.
#[inline]
fn selector_id(value: f64) -> u8 {
    // `as` saturates: NaN and negatives become 0, large values 255
    libm::round(value) as u8
}

/// Complete set of control values for the chain.
///
/// # Example
///
/// ```rust
/// use ringdrive_effects::{ClipMode, EffectParameters, ModulationMode};
///
/// let params = EffectParameters {
///     mod_frequency_hz: 9000.0,
///     overdrive_gain: 0.5,
///     ..EffectParameters::default()
/// }
/// .clamped();
///
/// assert_eq!(params.mod_frequency_hz, 5000.0);
/// assert_eq!(params.overdrive_gain, 1.0);
/// assert_eq!(params.modulation_mode, ModulationMode::RingModulation);
/// assert_eq!(params.clip_mode, ClipMode::Hard);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EffectParameters {
    /// Modulation LFO frequency in Hz; 0 disables the modulation stage.
    pub mod_frequency_hz: f64,
    /// Overdrive gain multiplier; 1 bypasses gain and clipping.
    pub overdrive_gain: f64,
    /// Pulser LFO frequency in Hz; 0 disables the pulsing stage.
    pub pulser_frequency_hz: f64,
    /// Ring or amplitude modulation.
    pub modulation_mode: ModulationMode,
    /// Soft or hard clipping.
    pub clip_mode: ClipMode,
}

impl Default for EffectParameters {
    fn default() -> Self {
        Self {
            mod_frequency_hz: DEFAULT_MOD_FREQ_HZ,
            overdrive_gain: DEFAULT_OVERDRIVE_GAIN,
            pulser_frequency_hz: DEFAULT_PULSER_FREQ_HZ,
            modulation_mode: ModulationMode::default(),
            clip_mode: ClipMode::default(),
        }
    }
}

impl EffectParameters {
    /// Copy with every continuous value clamped to its range.
    pub fn clamped(self) -> Self {
        Self {
            mod_frequency_hz: clamp_mod_frequency(self.mod_frequency_hz),
            overdrive_gain: clamp_overdrive_gain(self.overdrive_gain),
            pulser_frequency_hz: clamp_pulser_frequency(self.pulser_frequency_hz),
            ..self
        }
    }

    /// Value of the parameter at `index` as a plain number.
    ///
    /// Selectors report their numeric id. Out-of-range indices return 0.0.
    pub fn get_index(&self, index: usize) -> f64 {
        match index {
            PARAM_MOD_FREQ => self.mod_frequency_hz,
            PARAM_OVERDRIVE => self.overdrive_gain,
            PARAM_PULSER_FREQ => self.pulser_frequency_hz,
            PARAM_MOD_MODE => f64::from(self.modulation_mode.id()),
            PARAM_CLIP_MODE => f64::from(self.clip_mode.id()),
            _ => 0.0,
        }
    }

    /// Write the parameter at `index`, clamping continuous values.
    ///
    /// Selector values are rounded to the nearest id; unknown ids select the
    /// default mode. Out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize, value: f64) {
        match index {
            PARAM_MOD_FREQ => self.mod_frequency_hz = clamp_mod_frequency(value),
            PARAM_OVERDRIVE => self.overdrive_gain = clamp_overdrive_gain(value),
            PARAM_PULSER_FREQ => self.pulser_frequency_hz = clamp_pulser_frequency(value),
            PARAM_MOD_MODE => self.modulation_mode = ModulationMode::from_id(selector_id(value)),
            PARAM_CLIP_MODE => self.clip_mode = ClipMode::from_id(selector_id(value)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = EffectParameters::default();
        assert_eq!(p.mod_frequency_hz, 100.0);
        assert_eq!(p.overdrive_gain, 1.0);
        assert_eq!(p.pulser_frequency_hz, 2.0);
        assert_eq!(p.modulation_mode, ModulationMode::RingModulation);
        assert_eq!(p.clip_mode, ClipMode::Hard);
    }

    #[test]
    fn descriptor_defaults_match_struct_defaults() {
        let p = EffectParameters::default();
        for (i, desc) in DESCRIPTORS.iter().enumerate() {
            assert_eq!(desc.default, p.get_index(i), "default mismatch for {}", desc.string_id);
        }
    }

    #[test]
    fn mod_frequency_clamps() {
        assert_eq!(clamp_mod_frequency(-5.0), 0.0);
        assert_eq!(clamp_mod_frequency(440.0), 440.0);
        assert_eq!(clamp_mod_frequency(6000.0), 5000.0);
        assert_eq!(clamp_mod_frequency(f64::NAN), 0.0);
        assert_eq!(clamp_mod_frequency(f64::INFINITY), 5000.0);
    }

    #[test]
    fn overdrive_clamps() {
        assert_eq!(clamp_overdrive_gain(0.5), 1.0);
        assert_eq!(clamp_overdrive_gain(1.0), 1.0);
        assert_eq!(clamp_overdrive_gain(60.0), 50.0);
        assert_eq!(clamp_overdrive_gain(f64::NAN), 1.0);
    }

    #[test]
    fn pulser_clamps() {
        assert_eq!(clamp_pulser_frequency(-1.0), 0.0);
        assert_eq!(clamp_pulser_frequency(11.0), 10.0);
        assert_eq!(clamp_pulser_frequency(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn mode_ids_round_trip_and_fall_back() {
        assert_eq!(ModulationMode::from_id(1), ModulationMode::RingModulation);
        assert_eq!(ModulationMode::from_id(2), ModulationMode::AmplitudeModulation);
        assert_eq!(ModulationMode::from_id(99), ModulationMode::RingModulation);
        assert_eq!(ModulationMode::from_id(0), ModulationMode::RingModulation);
        assert_eq!(ClipMode::from_id(1), ClipMode::Soft);
        assert_eq!(ClipMode::from_id(2), ClipMode::Hard);
        assert_eq!(ClipMode::from_id(99), ClipMode::Hard);
        assert_eq!(ClipMode::Soft.id(), 1);
        assert_eq!(ModulationMode::AmplitudeModulation.id(), 2);
    }

    #[test]
    fn mode_labels() {
        assert_eq!(ModulationMode::RingModulation.label(), "RM");
        assert_eq!(ModulationMode::AmplitudeModulation.label(), "AM");
        assert_eq!(ClipMode::Soft.label(), "Soft");
        assert_eq!(ClipMode::Hard.label(), "Hard");
    }

    #[test]
    fn set_index_selectors() {
        let mut p = EffectParameters::default();
        p.set_index(PARAM_MOD_MODE, 2.0);
        assert_eq!(p.modulation_mode, ModulationMode::AmplitudeModulation);
        p.set_index(PARAM_MOD_MODE, 99.0);
        assert_eq!(p.modulation_mode, ModulationMode::RingModulation);
        p.set_index(PARAM_CLIP_MODE, 0.9);
        assert_eq!(p.clip_mode, ClipMode::Soft);
        p.set_index(PARAM_CLIP_MODE, f64::NAN);
        assert_eq!(p.clip_mode, ClipMode::Hard);
    }

    #[test]
    fn set_index_ignores_unknown() {
        let mut p = EffectParameters::default();
        p.set_index(PARAM_COUNT, 3.0);
        assert_eq!(p, EffectParameters::default());
        assert_eq!(p.get_index(PARAM_COUNT), 0.0);
    }

    #[test]
    fn selector_descriptors_format_labels() {
        let mode = DESCRIPTORS[PARAM_MOD_MODE];
        assert_eq!(mode.format_value(2.0), "AM");
        assert_eq!(mode.parse_value("rm"), Some(1.0));
        let clip = DESCRIPTORS[PARAM_CLIP_MODE];
        assert_eq!(clip.format_value(1.0), "Soft");
    }
}
