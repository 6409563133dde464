//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, flow::FlowCommands, roles::RolesCommands,
};

#[derive(Parser)]
#[command(name = "lrt")]
#[command(author, version, about = "League Registration Toolkit")]
#[command(
    long_about = "A toolkit for sports-league role classification and registration wizard flows kept as plain-text YAML files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory searched for custom flow definitions
    #[arg(long, global = true, env = "LRT_FLOWS_DIR")]
    pub flows_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Role identifier resolution and classification
    #[command(subcommand)]
    Roles(RolesCommands),

    /// Registration flow management
    #[command(subcommand)]
    Flow(FlowCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (pretty for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// Just names or ids, one per line
    Id,
}
