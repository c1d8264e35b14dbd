//! The block-processing engine contract.
//!
//! [`AudioEffectEngine`] is what a host drives: it is told the sample rate
//! once through [`prepare`](AudioEffectEngine::prepare) and then handed one
//! multi-channel block at a time. Host adapters (plugin formats, audio
//! callbacks, offline file processors) hold an engine and delegate to it.
//!
//! ## Real-time contract
//!
//! - `process_block` must not allocate, lock, or perform I/O.
//! - `prepare` and `reset` may run off the audio thread, but never
//!   concurrently with `process_block`.

use crate::ParameterInfo;

/// Multi-channel, in-place audio engine.
///
/// # Example
///
/// ```rust
/// use ringdrive_core::{AudioEffectEngine, ParamDescriptor, ParameterInfo};
///
/// struct Silence;
///
/// impl ParameterInfo for Silence {
///     fn param_count(&self) -> usize { 0 }
///     fn param_info(&self, _: usize) -> Option<ParamDescriptor> { None }
///     fn get_param(&self, _: usize) -> f64 { 0.0 }
///     fn set_param(&mut self, _: usize, _: f64) {}
/// }
///
/// impl AudioEffectEngine for Silence {
///     fn prepare(&mut self, _sample_rate: f64) {}
///
///     fn process_block(
///         &mut self,
///         buffer: &mut [&mut [f32]],
///         _input_channels: usize,
///         _output_channels: usize,
///     ) {
///         for channel in buffer.iter_mut() {
///             channel.fill(0.0);
///         }
///     }
///
///     fn reset(&mut self) {}
/// }
///
/// let mut left = [0.5_f32; 4];
/// let mut right = [0.5_f32; 4];
/// let mut buffer: [&mut [f32]; 2] = [&mut left, &mut right];
///
/// let mut engine = Silence;
/// engine.prepare(48000.0);
/// engine.process_block(&mut buffer, 2, 2);
/// assert!(left.iter().all(|&s| s == 0.0));
/// ```
pub trait AudioEffectEngine: ParameterInfo {
    /// Configure for a new sample rate before the first block.
    ///
    /// Recomputes every rate-dependent quantity and returns smoothed state
    /// to its resting value.
    fn prepare(&mut self, sample_rate: f64);

    /// Process one block in place.
    ///
    /// `buffer` holds one slice per channel. The first `input_channels`
    /// carry signal; channels in `input_channels..output_channels` are
    /// outputs with no corresponding input and are written with silence.
    fn process_block(
        &mut self,
        buffer: &mut [&mut [f32]],
        input_channels: usize,
        output_channels: usize,
    );

    /// Clear internal state (oscillator phases, gain ramps) without
    /// changing parameters.
    fn reset(&mut self);

    /// Processing latency in samples. Default is 0.
    fn latency_samples(&self) -> usize {
        0
    }
}
