//! gatestats library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Rank { .. } => cli::commands::rank::handle(&cli.command, cfg),
        Commands::Longest { .. } => cli::commands::longest::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load()?;

    // 3️⃣ apply input-file override from the command line
    if let Some(custom_input) = &cli.input {
        cfg.input_file = custom_input.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
