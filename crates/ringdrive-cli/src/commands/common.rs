//! Shared CLI helpers used across multiple commands.

use clap::ValueEnum;
use ringdrive_core::{linear_to_db, peak_magnitude, rms};
use ringdrive_effects::{ClipMode, ModulationMode};
use ringdrive_io::ChannelBuffer;

/// `--mod-mode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModModeArg {
    /// Ring modulation (carrier in [-1, 1])
    #[value(alias = "rm")]
    Ring,
    /// Amplitude modulation (carrier in [0, 1])
    Am,
}

impl From<ModModeArg> for ModulationMode {
    fn from(arg: ModModeArg) -> Self {
        match arg {
            ModModeArg::Ring => ModulationMode::RingModulation,
            ModModeArg::Am => ModulationMode::AmplitudeModulation,
        }
    }
}

/// `--clip` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClipArg {
    /// tanh saturation
    Soft,
    /// Clamp to [-1, 1]
    Hard,
}

impl From<ClipArg> for ClipMode {
    fn from(arg: ClipArg) -> Self {
        match arg {
            ClipArg::Soft => ClipMode::Soft,
            ClipArg::Hard => ClipMode::Hard,
        }
    }
}

/// Peak and RMS level of a whole file, in dB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    /// Largest absolute sample, in dB.
    pub peak_db: f32,
    /// RMS over every sample of every channel, in dB.
    pub rms_db: f32,
}

impl Levels {
    /// Measure across all channels.
    pub fn measure(audio: &ChannelBuffer) -> Self {
        let peak = audio
            .channels()
            .iter()
            .map(|ch| peak_magnitude(ch))
            .fold(0.0_f32, f32::max);
        let all: Vec<f32> = audio.samples().collect();
        Self {
            peak_db: linear_to_db(peak),
            rms_db: linear_to_db(rms(&all)),
        }
    }
}

/// Human-readable byte count.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
