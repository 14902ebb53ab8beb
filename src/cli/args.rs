//! CLI argument parsing using clap

use crate::output::ColorMode;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

/// Resolve the version string shown by `--version`
///
/// The `PACKAGE_VERSION` environment variable overrides the compiled-in
/// fallback.
pub fn version() -> String {
    std::env::var("PACKAGE_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string())
}

/// Thoughts CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "thoughts")]
#[command(about = "Developer thoughts and notes management system")]
pub struct Cli {
    /// Subcommand to execute; help is shown when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Explicit config file path (bypasses the candidate search)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect and manage the thoughts configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands of `thoughts config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the resolved config file path
    Path,

    /// Write a starter config file
    Init {
        /// Path of the primary notes repository
        #[arg(long, value_name = "PATH")]
        thoughts_repo: String,

        /// User name recorded in the config (defaults to $USER)
        #[arg(long, value_name = "NAME")]
        user: Option<String>,

        /// Directory for per-repository notes (defaults to <THOUGHTS_REPO>/repos)
        #[arg(long, value_name = "PATH")]
        repos_dir: Option<String>,

        /// Directory for global notes (defaults to <THOUGHTS_REPO>/global)
        #[arg(long, value_name = "PATH")]
        global_dir: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Build the clap command with the runtime-resolved version string
pub fn build_command() -> clap::Command {
    Cli::command().version(Box::leak(version().into_boxed_str()) as &'static str)
}

/// Parse the live process arguments
pub fn parse() -> Cli {
    let matches = build_command().get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}
