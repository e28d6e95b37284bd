//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::source::load_person;
use kindred_matcher::Matcher;
use tracing::debug;

/// Execute the compare command.
pub fn execute_compare(args: CompareArgs, matcher: &Matcher, formatter: &Formatter) -> Result<()> {
    if args.left == "-" && args.right == "-" {
        return Err(CliError::InvalidInput(
            "Only one record can be read from stdin".to_string(),
        ));
    }

    let left = load_person(&args.left)?;
    let right = load_person(&args.right)?;

    debug!(rules = ?matcher.rule_kinds(), "Comparing records");
    let result = matcher.compare(&left, &right)?;
    println!("{}", formatter.format_result(&result)?);

    Ok(())
}
