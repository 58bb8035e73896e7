//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Single Header - Merge a multi-file header library into one file
#[derive(Parser, Debug)]
#[command(name = "single-header")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Amalgamate the configured entry files into a single header
    Build(commands::build::BuildArgs),
    /// Verify the committed single header is up to date
    Check(commands::check::CheckArgs),
    /// Display the include graph of the configured entries
    Tree(commands::tree::TreeArgs),
    /// Initialize a new .single-header.yaml configuration
    Init(commands::init::InitArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // RUST_LOG wins over --log-level when both are set.
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .init();

        match self.command {
            Commands::Build(args) => commands::build::execute(args, &self.color),
            Commands::Check(args) => commands::check::execute(args, &self.color),
            Commands::Tree(args) => commands::tree::execute(args),
            Commands::Init(args) => commands::init::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
