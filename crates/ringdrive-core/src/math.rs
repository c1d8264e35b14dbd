//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Waveshaping / Clipping
//!
//! | Function | Character | Range |
//! |----------|-----------|-------|
//! | [`soft_clip`] | Smooth, asymptotic | (-1, 1) |
//! | [`hard_clip`] | Flat tops, abrupt | [-threshold, threshold] |
//!
//! # Level Measurement
//!
//! - [`peak_magnitude`] - Largest absolute sample in a block
//! - [`rms`] - Root-mean-square level of a block
//! - [`linear_to_db`] - Linear amplitude to decibels

use libm::{fabsf, logf, sqrtf, tanhf};

/// Convert linear gain to decibels.
///
/// Values at or below `1e-10` are floored to avoid `-inf`.
///
/// # Example
/// ```rust
/// use ringdrive_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Soft clip using hyperbolic tangent.
///
/// Smooth saturation that approaches ±1 asymptotically. In `f32` the result
/// rounds to exactly ±1.0 once `|x|` exceeds roughly 9.
///
/// # Example
/// ```rust
/// use ringdrive_core::soft_clip;
///
/// assert_eq!(soft_clip(0.0), 0.0);
/// assert!(soft_clip(2.0) < 1.0);
/// ```
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    tanhf(x)
}

/// Hard clip to ±threshold range.
///
/// Abrupt limiting that creates flat tops on waveforms.
#[inline]
pub fn hard_clip(x: f32, threshold: f32) -> f32 {
    x.clamp(-threshold, threshold)
}

/// Largest absolute sample value in `samples`, or 0.0 for an empty block.
///
/// # Example
/// ```rust
/// use ringdrive_core::peak_magnitude;
///
/// assert_eq!(peak_magnitude(&[0.25, -0.75, 0.5]), 0.75);
/// assert_eq!(peak_magnitude(&[]), 0.0);
/// ```
#[inline]
pub fn peak_magnitude(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0_f32, |peak, &s| peak.max(fabsf(s)))
}

/// Root-mean-square level of `samples`, or 0.0 for an empty block.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    sqrtf(sum / samples.len() as f32)
}
