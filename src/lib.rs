//! CoffeeConnect library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
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
        Commands::Countdown { .. } => cli::commands::countdown::handle(&cli.command),
        Commands::Signup { .. } => cli::commands::signup::handle(&cli.command, cfg),
        Commands::Crew { .. } => cli::commands::crew::handle(&cli.command, cfg),
        Commands::Faq { .. } => cli::commands::faq::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. apply the fallback directory override from the command line
    if let Some(dir) = &cli.fallback_dir {
        cfg.fallback_dir = dir.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
