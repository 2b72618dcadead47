//! Bancosim CLI - demonstration driver for the banking simulation
//!
//! Usage:
//! ```bash
//! bancosim demo
//! bancosim demo --seed 42
//! ```
//!
//! There is no persistence in this simulation, so the CLI offers a single
//! `demo` subcommand that runs the whole scenario in one process.

use anyhow::Result;
use clap::{Parser, Subcommand};
use bancosim_core::RandomIds;

mod demo;

/// Bancosim - an educational banking simulation
#[derive(Parser)]
#[command(name = "bancosim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the identifier source; omit for OS entropy
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demonstration scenario: accounts, cards, and the three
    /// branch kinds
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut ids = match cli.seed {
        Some(seed) => RandomIds::seeded(seed),
        None => RandomIds::from_entropy(),
    };

    match cli.command {
        Commands::Demo => demo::run(&mut ids)?,
    }

    Ok(())
}
