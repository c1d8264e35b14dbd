//! Gain staging helpers for automatic level compensation.
//!
//! A nonlinear stage changes the level of whatever passes through it. To
//! keep the output at the loudness of a reference signal, the stage
//! measures its own output peak, forms the ratio to the reference peak, and
//! ramps a [`LinearSmoothedParam`] toward that ratio so that corrections
//! never step at block boundaries.
//!
//! # Usage
//!
//! ```rust
//! use ringdrive_core::gain;
//!
//! let mut makeup = gain::compensation_param(48000.0);
//! makeup.set_target(gain::compensation_ratio(0.5, 1.0));
//! assert_eq!(makeup.target(), 0.5);
//! ```

use crate::LinearSmoothedParam;

/// Ramp time for compensation gain changes, in milliseconds.
pub const COMPENSATION_SMOOTHING_MS: f64 = 100.0;

/// Create the compensation gain smoother: unity, [`COMPENSATION_SMOOTHING_MS`] ramps.
pub fn compensation_param(sample_rate: f64) -> LinearSmoothedParam {
    LinearSmoothedParam::with_config(1.0, sample_rate, COMPENSATION_SMOOTHING_MS)
}

/// Gain that brings a block with peak `processed_peak` back to `reference_peak`.
///
/// A silent processed block (`processed_peak == 0.0`) is treated as having
/// unit peak, so the ratio stays finite.
///
/// # Examples
///
/// ```rust
/// use ringdrive_core::gain::compensation_ratio;
///
/// assert_eq!(compensation_ratio(0.5, 1.0), 0.5);
/// assert_eq!(compensation_ratio(0.8, 0.8), 1.0);
/// assert_eq!(compensation_ratio(0.0, 0.0), 0.0);
/// ```
#[inline]
pub fn compensation_ratio(reference_peak: f32, processed_peak: f32) -> f64 {
    let processed = if processed_peak == 0.0 {
        1.0
    } else {
        processed_peak
    };
    f64::from(reference_peak) / f64::from(processed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compensation_param_starts_at_unity() {
        let param = compensation_param(44100.0);
        assert_eq!(param.get(), 1.0);
        assert_eq!(param.ramp_length_samples(), 4410);
    }

    #[test]
    fn ratio_restores_reference_level() {
        let ratio = compensation_ratio(0.25, 1.0);
        assert!((ratio * 1.0 - 0.25).abs() < 1e-12);
    }

    #[test]
    fn ratio_boosts_quiet_output() {
        let ratio = compensation_ratio(1.0, 0.5);
        assert_eq!(ratio, 2.0);
    }

    #[test]
    fn silent_output_never_divides_by_zero() {
        let ratio = compensation_ratio(0.7, 0.0);
        assert!(ratio.is_finite());
        assert!((ratio - f64::from(0.7_f32)).abs() < 1e-12);
    }
}
