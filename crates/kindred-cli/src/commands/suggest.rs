//! Suggest command implementation.

use crate::cli::SuggestArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::source::{load_person, JsonCandidateSource};
use crate::suggest::rank;
use kindred_domain::traits::CandidateSource;
use kindred_matcher::Matcher;
use tracing::info;

/// Execute the suggest command.
pub fn execute_suggest(
    args: SuggestArgs,
    config: &Config,
    matcher: &Matcher,
    formatter: &Formatter,
) -> Result<()> {
    let threshold = args
        .threshold
        .unwrap_or(config.suggestions.acceptance_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(CliError::InvalidInput(
            "Threshold must be between 0.0 and 1.0".to_string(),
        ));
    }

    let limit = args.limit.unwrap_or(config.suggestions.limit);
    if limit == 0 {
        return Err(CliError::InvalidInput(
            "Limit must be greater than 0".to_string(),
        ));
    }

    let subject = load_person(&args.subject)?;
    let candidates = JsonCandidateSource::new(&args.candidates).candidates()?;
    info!(
        count = candidates.len(),
        threshold,
        limit,
        rules = ?matcher.rule_kinds(),
        "Ranking candidates"
    );

    let report = rank(matcher, &subject, candidates, threshold, limit)?;
    println!("{}", formatter.format_report(&report)?);

    Ok(())
}
