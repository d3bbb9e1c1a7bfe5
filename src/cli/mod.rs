//! CLI interface for pyth-signal
//!
//! Subcommands:
//! - `run`: start the live signal pipeline
//! - `config`: show the resolved configuration

mod run;

pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pyth-signal")]
#[command(about = "Moving-average trading signal bot for Pyth price feeds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the live signal pipeline
    Run(RunArgs),
    /// Show the resolved configuration
    Config,
}
