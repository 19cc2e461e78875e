//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Wayline navigation-core testbed CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: wayline.toml)
    #[arg(short = 'C', long, default_value = "wayline.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved route table
    #[command(visible_alias = "r")]
    Routes,

    /// Validate the configuration and report every problem
    #[command(visible_alias = "v")]
    Validate,

    /// Replay a navigation script against in-memory hosts
    #[command(visible_alias = "s")]
    Simulate {
        /// Script file (one command per line; `-` reads stdin)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        script: PathBuf,
    },
}
