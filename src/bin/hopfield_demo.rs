//! Train a Hopfield network and present patterns to it
//!
//! Usage:
//!   cargo run --bin hopfield_demo
//!   cargo run --bin hopfield_demo -- --train T,T,F,F --present T,F,F,F --show-weights

use anyhow::{Context, Result};
use clap::Parser;
use hopfield_memory::{format_pattern, parse_pattern, HopfieldNetwork};

#[derive(Parser, Debug)]
#[command(name = "hopfield_demo")]
#[command(about = "Train a Hopfield network and recall patterns from it")]
struct Args {
    /// Pattern to train on (repeatable), e.g. T,T,F,F
    #[arg(long = "train", default_values_t = vec!["T,T,F,F".to_string()])]
    train: Vec<String>,

    /// Pattern to present (repeatable)
    #[arg(long = "present", default_values_t = vec!["T,T,F,F".to_string(), "T,F,F,F".to_string()])]
    present: Vec<String>,

    /// Print the learned weight matrix
    #[arg(long)]
    show_weights: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let training = args
        .train
        .iter()
        .map(|text| parse_pattern(text))
        .collect::<hopfield_memory::Result<Vec<_>>>()
        .context("Failed to parse training pattern")?;

    let presented = args
        .present
        .iter()
        .map(|text| parse_pattern(text))
        .collect::<hopfield_memory::Result<Vec<_>>>()
        .context("Failed to parse presented pattern")?;

    let size = training
        .first()
        .map(|p| p.len())
        .context("At least one training pattern is required")?;

    log::info!("Creating Hopfield network of size {}", size);
    let mut network = HopfieldNetwork::new(size)?;

    for pattern in &training {
        println!("Training Hopfield network with: {}", format_pattern(pattern));
        network.train(pattern)?;
    }

    if args.show_weights {
        println!("\n=== Weight Matrix ===");
        print!("{}", network.weights());
        println!();
    }

    for pattern in &presented {
        let result = network.present(pattern)?;
        println!(
            "Presenting pattern:{}, and got {}",
            format_pattern(pattern),
            format_pattern(&result)
        );
    }

    log::info!("Stored {} patterns", network.pattern_count());

    Ok(())
}
