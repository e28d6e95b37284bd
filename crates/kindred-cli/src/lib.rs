//! Kindred CLI library.
//!
//! This library provides the core functionality for the `kindred` command-line
//! interface: configuration management, candidate loading, suggestion ranking,
//! command execution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod source;
pub mod suggest;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
