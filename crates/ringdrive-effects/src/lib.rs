//! Ringdrive Effects - the modulation / distortion / pulsing chain
//!
//! This crate assembles the chain from ringdrive-core primitives:
//!
//! - [`Modulation`] - Ring or amplitude modulation by a sine LFO (0–5000 Hz)
//! - [`Distortion`] - Overdrive with soft/hard clipping and peak-matched makeup gain
//! - [`Pulser`] - Slow unipolar amplitude envelope (0–10 Hz)
//! - [`MultiEffect`] - The three stages in series, as an [`AudioEffectEngine`]
//!
//! Parameters are held in lock-free shared storage ([`SharedParams`]) and
//! written through a cloneable [`ParamHandle`] from any thread.
//!
//! ## Example
//!
//! ```rust
//! use ringdrive_core::AudioEffectEngine;
//! use ringdrive_effects::{ModulationMode, MultiEffect};
//!
//! let mut engine = MultiEffect::new();
//! engine.set_mod_frequency(30.0);
//! engine.set_modulation_mode(ModulationMode::AmplitudeModulation);
//! engine.set_overdrive_gain(6.0);
//! engine.prepare(48000.0);
//!
//! let mut mono = vec![0.3_f32; 512];
//! let mut buffer: [&mut [f32]; 1] = [&mut mono];
//! engine.process_block(&mut buffer, 1, 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Standard library support
//! - `serde` - `Serialize`/`Deserialize` for [`EffectParameters`] and the mode enums
//! - `tracing` - Debug events from control-path operations (never from `process_block`)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod distortion;
pub mod modulation;
pub mod multi_effect;
pub mod params;
pub mod pulser;
pub mod shared;

// Re-export main types at crate root
pub use distortion::Distortion;
pub use modulation::Modulation;
pub use multi_effect::MultiEffect;
pub use params::{ClipMode, EffectParameters, ModulationMode};
pub use pulser::Pulser;
pub use ringdrive_core::AudioEffectEngine;
pub use shared::{ParamHandle, SharedParams};
