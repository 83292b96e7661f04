//! rollcall library root.
//! Exposes the attendance engine (parser, aggregator, classifier, pivot),
//! the CLI surface, and a high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Pivot { .. } => cli::commands::pivot::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; --config overrides the platform path
    let cfg = match &cli.config {
        Some(path) => Config::load_from(&PathBuf::from(path)),
        None => Config::load(),
    };

    dispatch(&cli, &cfg)
}
