//! Walk through the ringdrive chain one stage at a time.
//!
//! Renders one second of a 440 Hz sine through a few parameter sets and
//! prints the resulting levels. The last run changes parameters from a
//! second thread through a shared handle while audio is being processed.
//!
//! Run with: cargo run -p ringdrive-effects --example chain_demo

use ringdrive_core::{linear_to_db, peak_magnitude, rms};
use ringdrive_effects::{AudioEffectEngine, ClipMode, EffectParameters, ModulationMode, MultiEffect};

const SAMPLE_RATE: f64 = 48000.0;
const BLOCK: usize = 512;

fn render(engine: &mut MultiEffect) -> Vec<f32> {
    let mut left: Vec<f32> = (0..SAMPLE_RATE as usize)
        .map(|i| 0.5 * (std::f32::consts::TAU * 440.0 * i as f32 / SAMPLE_RATE as f32).sin())
        .collect();
    let mut right = left.clone();

    engine.prepare(SAMPLE_RATE);
    for (l, r) in left.chunks_mut(BLOCK).zip(right.chunks_mut(BLOCK)) {
        let mut block: [&mut [f32]; 2] = [l, r];
        engine.process_block(&mut block, 2, 2);
    }
    left
}

fn report(title: &str, samples: &[f32]) {
    println!(
        "  {:32} peak {:6.1} dB  rms {:6.1} dB",
        title,
        linear_to_db(peak_magnitude(samples)),
        linear_to_db(rms(samples))
    );
}

fn main() {
    println!("ringdrive chain demo");
    println!("====================\n");

    let dry: Vec<f32> = (0..SAMPLE_RATE as usize)
        .map(|i| 0.5 * (std::f32::consts::TAU * 440.0 * i as f32 / SAMPLE_RATE as f32).sin())
        .collect();
    report("dry", &dry);

    let runs = [
        (
            "ring mod 100 Hz",
            EffectParameters {
                pulser_frequency_hz: 0.0,
                ..EffectParameters::default()
            },
        ),
        (
            "AM 30 Hz",
            EffectParameters {
                mod_frequency_hz: 30.0,
                pulser_frequency_hz: 0.0,
                modulation_mode: ModulationMode::AmplitudeModulation,
                ..EffectParameters::default()
            },
        ),
        (
            "overdrive x20 hard",
            EffectParameters {
                mod_frequency_hz: 0.0,
                overdrive_gain: 20.0,
                pulser_frequency_hz: 0.0,
                ..EffectParameters::default()
            },
        ),
        (
            "overdrive x20 soft + pulse 4 Hz",
            EffectParameters {
                mod_frequency_hz: 0.0,
                overdrive_gain: 20.0,
                pulser_frequency_hz: 4.0,
                clip_mode: ClipMode::Soft,
                ..EffectParameters::default()
            },
        ),
    ];

    for (title, params) in runs {
        let mut engine = MultiEffect::with_parameters(params);
        report(title, &render(&mut engine));
    }

    println!("\nParameter changes from a control thread:");
    let mut engine = MultiEffect::new();
    let handle = engine.handle();
    let control = std::thread::spawn(move || {
        for step in 0..50 {
            handle.set_mod_frequency(f64::from(step) * 100.0);
            handle.set_overdrive_gain(1.0 + f64::from(step));
            std::thread::yield_now();
        }
    });
    let out = render(&mut engine);
    if control.join().is_err() {
        eprintln!("control thread panicked");
    }
    report("automated", &out);
    println!(
        "  final: mod {:.0} Hz, overdrive x{:.0}",
        engine.mod_frequency(),
        engine.overdrive_gain()
    );
}
