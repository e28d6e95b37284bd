//! Kindred CLI - Command-line interface for the identity-matching engine.

use clap::Parser;
use kindred_cli::cli::{ConfigAction, ConfigArgs};
use kindred_cli::commands;
use kindred_cli::{Cli, Command, Config, Formatter};
use kindred_matcher::Matcher;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so JSON output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> kindred_cli::Result<()> {
    // A config file being initialised need not exist yet
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Compare(args) => {
            let matcher = Matcher::new(config.matching.clone())?;
            commands::execute_compare(args, &matcher, &formatter)?;
        }
        Command::Suggest(args) => {
            let matcher = Matcher::new(config.matching.clone())?;
            commands::execute_suggest(args, &config, &matcher, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?;
        }
    }

    Ok(())
}
