//! File-based effect processing command.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use ringdrive_config::EngineConfig;
use ringdrive_effects::MultiEffect;
use ringdrive_io::{OfflineProcessor, SUPPORTED_BIT_DEPTHS, WavSpec, read_wav, write_wav};
use std::path::PathBuf;

use super::common::{ClipArg, Levels, ModModeArg};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Configuration file (TOML); flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Modulation LFO frequency in Hz (0-5000)
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    mod_freq: Option<f64>,

    /// Overdrive gain (1-50)
    #[arg(long, value_name = "G", allow_negative_numbers = true)]
    overdrive: Option<f64>,

    /// Pulser LFO frequency in Hz (0-10)
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    pulser_freq: Option<f64>,

    /// Modulation mode
    #[arg(long, value_enum)]
    mod_mode: Option<ModModeArg>,

    /// Clipping curve
    #[arg(long, value_enum)]
    clip: Option<ClipArg>,

    /// Processing block size in frames
    #[arg(long, value_name = "N")]
    block_size: Option<usize>,

    /// Output bit depth (16, 24 or 32); defaults to the input's
    #[arg(long, value_name = "B")]
    bit_depth: Option<u16>,
}

impl ProcessArgs {
    /// Load the configuration file (if any) and apply flag overrides.
    fn resolve_config(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading configuration");
                EngineConfig::load(path)?
            }
            None => EngineConfig::default(),
        };

        let params = &mut config.params;
        if let Some(freq) = self.mod_freq {
            params.mod_frequency_hz = freq;
        }
        if let Some(gain) = self.overdrive {
            params.overdrive_gain = gain;
        }
        if let Some(freq) = self.pulser_freq {
            params.pulser_frequency_hz = freq;
        }
        if let Some(mode) = self.mod_mode {
            params.modulation_mode = mode.into();
        }
        if let Some(mode) = self.clip {
            params.clip_mode = mode.into();
        }
        if let Some(block_size) = self.block_size {
            config.processing.block_size = block_size;
        }
        if let Some(bits) = self.bit_depth {
            config.processing.bit_depth = Some(bits);
        }

        let report = config.validate();
        for warning in &report.warnings {
            tracing::warn!("{warning}; value will be clamped");
        }
        report.into_result()?;

        Ok(config)
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let config = args.resolve_config()?;

    println!("Reading {}...", args.input.display());
    let (mut audio, spec) =
        read_wav(&args.input).with_context(|| format!("reading {}", args.input.display()))?;
    let frames = audio.num_frames();

    println!(
        "  {} channel(s), {} frames, {} Hz, {:.2}s",
        audio.num_channels(),
        frames,
        spec.sample_rate,
        frames as f64 / f64::from(spec.sample_rate)
    );

    let bits_per_sample = config.processing.bit_depth.unwrap_or(
        if SUPPORTED_BIT_DEPTHS.contains(&spec.bits_per_sample) {
            spec.bits_per_sample
        } else {
            32
        },
    );

    let engine = MultiEffect::with_parameters(config.params);
    let applied = engine.parameters();
    tracing::info!(
        mod_freq = applied.mod_frequency_hz,
        overdrive = applied.overdrive_gain,
        pulser_freq = applied.pulser_frequency_hz,
        mod_mode = applied.modulation_mode.label(),
        clip = applied.clip_mode.label(),
        block_size = config.processing.block_size,
        "processing"
    );

    let mut processor = OfflineProcessor::new(engine, config.processing.block_size);
    processor.prepare(spec.sample_rate);

    let input_levels = Levels::measure(&audio);

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )?
        .progress_chars("##-"),
    );
    processor.process(&mut audio, |n| pb.inc(n as u64));
    pb.finish_and_clear();

    let output_levels = Levels::measure(&audio);

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        input_levels.rms_db, input_levels.peak_db
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        output_levels.rms_db, output_levels.peak_db
    );

    let out_spec = WavSpec {
        bits_per_sample,
        ..spec
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &audio, out_spec)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(path = %args.output.display(), bits = bits_per_sample, "wrote output");
    println!("Done!");

    Ok(())
}
