//! `gacha` — weighted mission reward picker with a roulette spinner
//!
//! Usage:
//!   gacha EASY                  draw from the EASY pool
//!   gacha                       prompt for the difficulty
//!   gacha --validate            catalog diagnostics only
//!   gacha MEDIUM --seed 7       reproducible draw

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mg_cli::paths::DataPaths;
use mg_cli::session;

#[derive(Parser)]
#[command(name = "gacha", about = "Weighted mission reward picker with a roulette spinner")]
struct Cli {
    /// Mission difficulty (EASY / MEDIUM / HARD); prompts when omitted
    difficulty: Option<String>,

    /// Run catalog diagnostics and exit without drawing
    #[arg(long)]
    validate: bool,

    /// Directory holding config.json, rewards.json and history.json
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Override the configured spinner seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let paths = DataPaths::in_dir(&cli.data_dir);

    if cli.validate {
        session::run_validate(&paths).context("catalog validation failed")
    } else {
        session::run(&paths, cli.difficulty.as_deref(), cli.seed)
            .context("draw session failed")
    }
}
