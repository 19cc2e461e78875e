//! Wayline - page routing, render ownership and refresh persistence
//! for single-page application shells.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod guard;
mod host;
mod lifecycle;
mod logger;
mod page;
mod persist;
mod route;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = AppConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Routes => cli::routes::print_routes(&config),
        Commands::Validate => cli::validate::run(&config),
        Commands::Simulate { script } => cli::simulate::run(&config, script),
    }
}
