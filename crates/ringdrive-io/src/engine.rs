//! Offline block rendering: drive an engine over a whole file.

use crate::ChannelBuffer;
use ringdrive_core::AudioEffectEngine;

/// Default processing block size in frames.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Runs an [`AudioEffectEngine`] over in-memory audio the way a host
/// callback would: prepare once, then fixed-size blocks with the input
/// channel count equal to the output channel count.
///
/// # Example
///
/// ```rust
/// use ringdrive_effects::MultiEffect;
/// use ringdrive_io::{ChannelBuffer, OfflineProcessor};
///
/// let mut audio = ChannelBuffer::new(vec![vec![0.5; 2048], vec![0.5; 2048]]);
/// let mut processor = OfflineProcessor::new(MultiEffect::new(), 256);
/// processor.prepare(48000);
///
/// let mut blocks = 0;
/// processor.process(&mut audio, |_| blocks += 1);
/// assert_eq!(blocks, 8);
/// ```
#[derive(Debug, Clone)]
pub struct OfflineProcessor<E> {
    engine: E,
    block_size: usize,
}

impl<E: AudioEffectEngine> OfflineProcessor<E> {
    /// Wrap `engine`, processing `block_size` frames at a time (minimum 1).
    pub fn new(engine: E, block_size: usize) -> Self {
        Self {
            engine,
            block_size: block_size.max(1),
        }
    }

    /// Frames per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The wrapped engine, mutably (for parameter changes between files).
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Unwrap the engine.
    pub fn into_inner(self) -> E {
        self.engine
    }

    /// Prepare the engine for audio at `sample_rate` Hz.
    pub fn prepare(&mut self, sample_rate: u32) {
        self.engine.prepare(f64::from(sample_rate));
    }

    /// Process `audio` in place, block by block.
    ///
    /// `on_block` is called after each block with the number of frames it
    /// held, for progress reporting.
    pub fn process<F>(&mut self, audio: &mut ChannelBuffer, mut on_block: F)
    where
        F: FnMut(usize),
    {
        let channels = audio.num_channels();
        let engine = &mut self.engine;
        audio.for_each_block_mut(self.block_size, |block| {
            let frames = block.first().map_or(0, |ch| ch.len());
            engine.process_block(block, channels, channels);
            on_block(frames);
        });
    }
}
