//! Ringdrive Core - DSP primitives for the ringdrive effects chain
//!
//! This crate provides the building blocks the effect stages are assembled
//! from, designed for real-time audio processing with zero allocation in the
//! audio path.
//!
//! # Core Abstractions
//!
//! ## Engine Contract
//!
//! - [`AudioEffectEngine`] - Multi-channel, in-place block engine driven by a host
//! - [`ParameterInfo`] - Index-based parameter discovery and control
//!
//! ## Oscillators
//!
//! - [`Oscillator`] - Sine LFO with one phase per channel
//! - [`lfo::advance_phase`], [`lfo::to_unipolar`] - Pure phase and range helpers
//!
//! ## Gain Smoothing
//!
//! - [`LinearSmoothedParam`] - Linear ramps (constant rate, fixed arrival time)
//! - [`gain::compensation_ratio`] - Peak-matching makeup gain
//!
//! ## Utilities
//!
//! - Clipping: [`soft_clip`], [`hard_clip`]
//! - Metering: [`peak_magnitude`], [`rms`], [`linear_to_db`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringdrive-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ringdrive_core::{Oscillator, soft_clip};
//!
//! let mut lfo = Oscillator::new();
//! lfo.set_frequency(100.0, 44100.0);
//!
//! let mut block = [0.8_f32; 64];
//! for sample in block.iter_mut() {
//!     *sample = soft_clip((f64::from(*sample) * lfo.next(0)) as f32 * 4.0);
//! }
//! assert!(block.iter().all(|s| s.abs() < 1.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod effect;
pub mod gain;
pub mod lfo;
pub mod math;
pub mod param;
pub mod param_info;

// Re-export main types at crate root
pub use effect::AudioEffectEngine;
pub use lfo::{MAX_CHANNELS, Oscillator};
pub use math::{hard_clip, linear_to_db, peak_magnitude, rms, soft_clip};
pub use param::LinearSmoothedParam;
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamUnit, ParameterInfo};
