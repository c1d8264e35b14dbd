//! Audio file I/O for ringdrive.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for loading/saving
//!   multi-channel audio without changing its channel layout
//! - **Channel storage**: [`ChannelBuffer`] for deinterleaved samples
//! - **Offline rendering**: [`OfflineProcessor`] for running an engine over a file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ringdrive_effects::MultiEffect;
//! use ringdrive_io::{OfflineProcessor, read_wav, write_wav};
//!
//! let (mut audio, spec) = read_wav("input.wav")?;
//!
//! let mut processor = OfflineProcessor::new(MultiEffect::new(), 512);
//! processor.prepare(spec.sample_rate);
//! processor.process(&mut audio, |_| {});
//!
//! write_wav("output.wav", &audio, spec)?;
//! ```

mod buffer;
mod engine;
mod wav;

pub use buffer::ChannelBuffer;
pub use engine::{DEFAULT_BLOCK_SIZE, OfflineProcessor};
pub use wav::{
    SUPPORTED_BIT_DEPTHS, WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested output bit depth cannot be written.
    #[error("Unsupported bit depth: {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),

    /// Audio with no channels cannot be written.
    #[error("Audio has no channels")]
    NoChannels,

    /// More channels than the WAV header can describe.
    #[error("Too many channels for WAV: {0}")]
    TooManyChannels(usize),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
