//! SlotForge — classic three-line slot machine in the terminal
//!
//! Usage:
//!   slotforge                  - Play with an OS-seeded machine
//!   slotforge --seed 42        - Replay a deterministic sequence of spins
//!   slotforge --show-config    - Print the machine configuration as JSON
//!
//! Set `RUST_LOG=debug` to trace every round on stderr.

mod shell;

use std::io;

use anyhow::{Context, Result, bail};
use clap::Parser;

use sf_engine::{SlotConfig, SlotMachine};

use crate::shell::Shell;

#[derive(Parser)]
#[command(name = "slotforge", about = "Classic three-line slot machine")]
struct Cli {
    /// Seed the reels for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Answer that ends the session at the round prompt
    #[arg(long, default_value = "q")]
    quit_token: String,

    /// Print the machine configuration as JSON and exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SlotConfig::default();
    if cli.show_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    if cli.quit_token.trim().is_empty() {
        bail!("Quit token must not be blank");
    }

    let machine = match cli.seed {
        Some(seed) => SlotMachine::seeded(config, seed),
        None => SlotMachine::new(config),
    }
    .context("Failed to build slot machine")?;

    log::info!(
        "Starting {} ({}x{}, seed {:?})",
        machine.config().name,
        machine.config().grid.reels,
        machine.config().grid.rows,
        cli.seed
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), machine, cli.quit_token);
    shell.run()?;

    Ok(())
}
