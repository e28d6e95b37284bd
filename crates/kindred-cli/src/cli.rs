//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kindred CLI - Find records that may describe the same person.
#[derive(Debug, Parser)]
#[command(name = "kindred")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINDRED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log rule-by-rule scoring to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two person records
    Compare(CompareArgs),

    /// Rank candidate records against a subject
    Suggest(SuggestArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// JSON file holding the first person record ("-" for stdin)
    pub left: String,

    /// JSON file holding the second person record
    pub right: String,
}

/// Arguments for the suggest command.
#[derive(Debug, Parser)]
pub struct SuggestArgs {
    /// JSON file holding the subject person record
    pub subject: String,

    /// JSON file holding an array of candidates
    pub candidates: String,

    /// Minimum overall confidence to report (0.0-1.0)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Maximum number of suggestions
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Matching preset
        #[arg(short, long, value_enum, default_value = "default")]
        preset: PresetArg,
    },
}

/// Matching preset argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Balanced gates
    Default,
    /// Higher gates, fewer suggestions
    Strict,
    /// Lower gates, more suggestions
    Lenient,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<PresetArg> for kindred_matcher::MatchConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => kindred_matcher::MatchConfig::default(),
            PresetArg::Strict => kindred_matcher::MatchConfig::strict(),
            PresetArg::Lenient => kindred_matcher::MatchConfig::lenient(),
        }
    }
}
