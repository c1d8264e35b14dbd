//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings

use clap::Args;
use ringdrive_config::EngineConfig;
use ringdrive_core::ParamDescriptor;
use ringdrive_effects::params::DESCRIPTORS;

#[derive(Args)]
pub struct ParamsArgs {
    /// Print a default configuration file instead of the table
    #[arg(long)]
    toml: bool,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    if args.toml {
        print!("{}", EngineConfig::default().to_toml()?);
        return Ok(());
    }

    println!("Engine Parameters");
    println!("=================");
    println!();
    println!(
        "  {:12}  {:22}  {:20}  {}",
        "Id", "Name", "Range", "Default"
    );
    println!(
        "  {:12}  {:22}  {:20}  {}",
        "--", "----", "-----", "-------"
    );

    for desc in &DESCRIPTORS {
        println!(
            "  {:12}  {:22}  {:20}  {}",
            desc.string_id,
            desc.name,
            range_text(desc),
            desc.format_value(desc.default)
        );
    }

    println!();
    println!("Example usage:");
    println!();
    println!("  ringdrive process input.wav output.wav --mod-freq 440 --overdrive 8 --clip soft");
    println!("  ringdrive params --toml > engine.toml");
    println!("  ringdrive process input.wav output.wav --config engine.toml");

    Ok(())
}

fn range_text(desc: &ParamDescriptor) -> String {
    if desc.step_labels.is_empty() {
        format!(
            "{} .. {}",
            desc.format_value(desc.min),
            desc.format_value(desc.max)
        )
    } else {
        desc.step_labels.join(" | ")
    }
}
