//! Parameter introspection system for discoverable engine parameters.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types that enable
//! runtime discovery and manipulation of parameters. Host wrappers, control
//! surfaces and the command line use it to list controls, validate input, and
//! apply values without knowing the engine's concrete type.
//!
//! # Design
//!
//! Parameters are addressed by a stable zero-based index. Each one is described by
//! a [`ParamDescriptor`] carrying display metadata, the valid range, and:
//!
//! - [`ParamId`] - stable numeric ID for host automation
//! - [`ParamFlags`] - capability flags (automatable, stepped)
//! - `string_id` - human-readable stable ID used on the command line
//! - `step_labels` - display names for stepped (enum-like) parameters
//!
//! # Example
//!
//! ```rust
//! use ringdrive_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Pulser {
//!     rate_hz: f64,
//! }
//!
//! impl ParameterInfo for Pulser {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::frequency_hz("Rate", "Rate", 0.0, 10.0, 2.0)
//!                 .with_id(ParamId(100), "rate")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f64 {
//!         match index {
//!             0 => self.rate_hz,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f64) {
//!         if index == 0 {
//!             self.rate_hz = value.clamp(0.0, 10.0);
//!         }
//!     }
//! }
//!
//! let mut p = Pulser { rate_hz: 2.0 };
//! let idx = p.find_param_by_name("rate").unwrap();
//! p.set_param(idx, 50.0);
//! assert_eq!(p.get_param(idx), 10.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter;
/// host automation lanes are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// Use [`union`](Self::union) to combine.
///
/// # Example
///
/// ```rust
/// use ringdrive_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::AUTOMATABLE));
/// assert!(flags.contains(ParamFlags::STEPPED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter (default for all params).
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (enum-like, integer values).
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for engines that expose introspectable parameters.
///
/// # Parameter Indexing
///
/// Parameters are accessed by zero-based index, stable for the lifetime of the
/// instance. Use [`param_count`](Self::param_count) to determine valid indices.
pub trait ParameterInfo {
    /// Returns the number of parameters exposed.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at `index`, or `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at `index`.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f64;

    /// Sets the value of the parameter at `index`.
    ///
    /// Implementations clamp to the descriptor's range. Out-of-range indices
    /// are ignored.
    fn set_param(&mut self, index: usize, value: f64);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Scans all parameters (O(n)); for setup paths, not audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Example
///
/// ```rust
/// use ringdrive_core::{ParamDescriptor, ParamId};
///
/// let rate = ParamDescriptor::frequency_hz("Pulser Frequency", "Pulse", 0.0, 10.0, 2.0)
///     .with_id(ParamId(3), "pulser_freq");
///
/// assert_eq!(rate.clamp(25.0), 10.0);
/// assert_eq!(rate.format_value(2.0), "2.00 Hz");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Modulation Frequency").
    pub name: &'static str,

    /// Short name for compact displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f64,

    /// Maximum allowed value for this parameter.
    pub max: f64,

    /// Default value when the engine is constructed.
    pub default: f64,

    /// Recommended step increment for encoder-based control.
    pub step: f64,

    /// Stable numeric ID for host automation.
    pub id: ParamId,

    /// Human-readable stable ID (e.g., `"mod_freq"`).
    pub string_id: &'static str,

    /// Capability flags for host communication.
    pub flags: ParamFlags,

    /// Display labels for stepped parameters, indexed by `value - min`.
    ///
    /// Empty for continuous parameters.
    pub step_labels: &'static [&'static str],
}

impl ParamDescriptor {
    /// Continuous parameter with custom name, range and no unit.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
            step_labels: &[],
        }
    }

    /// Frequency parameter in Hz with custom name and range.
    pub const fn frequency_hz(
        name: &'static str,
        short_name: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self::custom(name, short_name, min, max, default)
            .with_unit(ParamUnit::Hertz)
            .with_step(0.1)
    }

    /// Stepped selector with one label per integer value starting at `min`.
    ///
    /// `max` is derived from the number of labels.
    pub const fn selector(
        name: &'static str,
        short_name: &'static str,
        min: f64,
        default: f64,
        labels: &'static [&'static str],
    ) -> Self {
        let max = min + labels.len().saturating_sub(1) as f64;
        Self::custom(name, short_name, min, max, default)
            .with_step(1.0)
            .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED))
            .with_step_labels(labels)
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ringdrive_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::custom("Drive", "Drive", 1.0, 50.0, 1.0)
    ///     .with_id(ParamId(2), "overdrive");
    /// assert_eq!(desc.id, ParamId(2));
    /// assert_eq!(desc.string_id, "overdrive");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the display unit.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the recommended step increment.
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the labels for a stepped parameter.
    pub const fn with_step_labels(mut self, labels: &'static [&'static str]) -> Self {
        self.step_labels = labels;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// NaN maps to `min`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ringdrive_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::custom("Drive", "Drive", 1.0, 50.0, 1.0);
    /// assert_eq!(desc.clamp(0.0), 1.0);
    /// assert_eq!(desc.clamp(100.0), 50.0);
    /// assert_eq!(desc.clamp(f64::NAN), 1.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value >= self.min {
            value
        } else {
            self.min
        }
    }

    /// Converts a plain value to the normalized range (0.0 to 1.0).
    ///
    /// # Example
    ///
    /// ```rust
    /// use ringdrive_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::frequency_hz("Freq", "Freq", 0.0, 5000.0, 100.0);
    /// assert_eq!(desc.normalize(2500.0), 0.5);
    /// ```
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) / range
    }

    /// Converts a normalized value (0.0 to 1.0) to the plain range.
    ///
    /// Stepped parameters snap to the nearest step.
    #[inline]
    pub fn denormalize(&self, normalized: f64) -> f64 {
        let plain = self.min + normalized.clamp(0.0, 1.0) * (self.max - self.min);
        if self.flags.contains(ParamFlags::STEPPED) {
            libm::round(plain)
        } else {
            plain
        }
    }

    /// Label for a stepped value, if this parameter has labels.
    pub fn step_label(&self, value: f64) -> Option<&'static str> {
        if self.step_labels.is_empty() {
            return None;
        }
        let index = libm::round(self.clamp(value) - self.min) as usize;
        self.step_labels.get(index).copied()
    }

    /// Format a value for display, using step labels when present.
    pub fn format_value(&self, value: f64) -> String {
        if let Some(label) = self.step_label(value) {
            return String::from(label);
        }
        match self.unit {
            ParamUnit::Hertz => format!("{:.2} Hz", value),
            ParamUnit::Multiplier => format!("{:.2}x", value),
            ParamUnit::None => format!("{:.2}", value),
        }
    }

    /// Parse display text back into a plain value.
    ///
    /// Accepts step labels (case-insensitive), bare numbers, and numbers
    /// followed by this parameter's unit suffix. The result is clamped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ringdrive_core::ParamDescriptor;
    ///
    /// let freq = ParamDescriptor::frequency_hz("Freq", "Freq", 0.0, 5000.0, 100.0);
    /// assert_eq!(freq.parse_value("440 Hz"), Some(440.0));
    /// assert_eq!(freq.parse_value("9000"), Some(5000.0));
    ///
    /// let mode = ParamDescriptor::selector("Mode", "Mode", 1.0, 1.0, &["RM", "AM"]);
    /// assert_eq!(mode.parse_value("am"), Some(2.0));
    /// assert_eq!(mode.parse_value("fm"), None);
    /// ```
    pub fn parse_value(&self, text: &str) -> Option<f64> {
        let text = text.trim();
        if let Some(pos) = self
            .step_labels
            .iter()
            .position(|label| label.eq_ignore_ascii_case(text))
        {
            return Some(self.min + pos as f64);
        }

        let suffix = self.unit.suffix().trim();
        let number = if suffix.is_empty() {
            text
        } else {
            text.strip_suffix(suffix).unwrap_or(text).trim_end()
        };
        number
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(|v| self.clamp(v))
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz (Hz) - LFO rates.
    Hertz,

    /// Linear gain multiplier (e.g. `8.00x`).
    Multiplier,

    /// No unit - for dimensionless or enum-like parameters.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ringdrive_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::Multiplier => "x",
            ParamUnit::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: &[&str] = &["Soft", "Hard"];

    struct TestEngine {
        rate: f64,
        drive: f64,
        clip: f64,
    }

    impl TestEngine {
        fn new() -> Self {
            Self {
                rate: 2.0,
                drive: 1.0,
                clip: 2.0,
            }
        }
    }

    impl ParameterInfo for TestEngine {
        fn param_count(&self) -> usize {
            3
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::frequency_hz("Rate", "Rate", 0.0, 10.0, 2.0)
                        .with_id(ParamId(10), "rate"),
                ),
                1 => Some(
                    ParamDescriptor::custom("Drive", "Drive", 1.0, 50.0, 1.0)
                        .with_unit(ParamUnit::Multiplier)
                        .with_id(ParamId(11), "drive"),
                ),
                2 => Some(
                    ParamDescriptor::selector("Clip Mode", "Clip", 1.0, 2.0, LABELS)
                        .with_id(ParamId(12), "clip_mode"),
                ),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f64 {
            match index {
                0 => self.rate,
                1 => self.drive,
                2 => self.clip,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f64) {
            if let Some(desc) = self.param_info(index) {
                let v = desc.clamp(value);
                match index {
                    0 => self.rate = v,
                    1 => self.drive = v,
                    _ => self.clip = v,
                }
            }
        }
    }

    #[test]
    fn test_param_count_and_info() {
        let engine = TestEngine::new();
        assert_eq!(engine.param_count(), 3);
        assert!(engine.param_info(3).is_none());
        assert_eq!(engine.param_info(0).unwrap().unit, ParamUnit::Hertz);
    }

    #[test]
    fn test_find_by_name_variants() {
        let engine = TestEngine::new();
        assert_eq!(engine.find_param_by_name("RATE"), Some(0));
        assert_eq!(engine.find_param_by_name("Clip"), Some(2));
        assert_eq!(engine.find_param_by_name("clip_mode"), Some(2));
        assert_eq!(engine.find_param_by_name("missing"), None);
    }

    #[test]
    fn test_param_index_by_id() {
        let engine = TestEngine::new();
        assert_eq!(engine.param_index_by_id(ParamId(11)), Some(1));
        assert_eq!(engine.param_index_by_id(ParamId(99)), None);
    }

    #[test]
    fn test_set_param_clamps() {
        let mut engine = TestEngine::new();
        engine.set_param(1, 500.0);
        assert_eq!(engine.get_param(1), 50.0);
        engine.set_param(1, -3.0);
        assert_eq!(engine.get_param(1), 1.0);
        engine.set_param(7, 1.0);
        assert_eq!(engine.get_param(7), 0.0);
    }

    #[test]
    fn test_selector_range_and_flags() {
        let desc = ParamDescriptor::selector("Clip Mode", "Clip", 1.0, 2.0, LABELS);
        assert_eq!(desc.min, 1.0);
        assert_eq!(desc.max, 2.0);
        assert!(desc.flags.contains(ParamFlags::STEPPED));
        assert_eq!(desc.step_label(1.0), Some("Soft"));
        assert_eq!(desc.step_label(2.0), Some("Hard"));
        assert_eq!(desc.format_value(2.0), "Hard");
    }

    #[test]
    fn test_normalize_denormalize() {
        let desc = ParamDescriptor::frequency_hz("Freq", "Freq", 0.0, 5000.0, 100.0);
        assert_eq!(desc.normalize(0.0), 0.0);
        assert_eq!(desc.normalize(5000.0), 1.0);
        assert_eq!(desc.denormalize(0.5), 2500.0);

        let stepped = ParamDescriptor::selector("Mode", "Mode", 1.0, 1.0, &["RM", "AM"]);
        assert_eq!(stepped.denormalize(0.4), 1.0);
        assert_eq!(stepped.denormalize(0.6), 2.0);
    }

    #[test]
    fn test_normalize_zero_range() {
        let desc = ParamDescriptor::custom("Fixed", "Fixed", 1.0, 1.0, 1.0);
        assert_eq!(desc.normalize(1.0), 0.0);
    }

    #[test]
    fn test_format_and_parse() {
        let drive = ParamDescriptor::custom("Drive", "Drive", 1.0, 50.0, 1.0)
            .with_unit(ParamUnit::Multiplier);
        assert_eq!(drive.format_value(8.0), "8.00x");
        assert_eq!(drive.parse_value("8x"), Some(8.0));
        assert_eq!(drive.parse_value(" 12.5 "), Some(12.5));
        assert_eq!(drive.parse_value("nan"), None);
        assert_eq!(drive.parse_value("loud"), None);
    }

    #[test]
    fn test_param_flags() {
        assert!(ParamFlags::default().contains(ParamFlags::AUTOMATABLE));
        assert!(!ParamFlags::NONE.contains(ParamFlags::STEPPED));
    }
}
