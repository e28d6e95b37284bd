//! Duplicate-suggestion ranking over a candidate pool.
//!
//! Candidates are filtered by their opt-in flags before any comparison. A
//! candidate the engine cannot evaluate is skipped, never fatal.

use kindred_domain::{Candidate, MatchResult, PersonRecord};
use kindred_matcher::{MatchError, Matcher, RecordSide};
use serde::Serialize;
use tracing::{debug, warn};

/// A candidate that cleared the acceptance threshold.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    /// The suggested candidate
    pub candidate: Candidate,

    /// The engine's verdict
    pub result: MatchResult,
}

/// Outcome of ranking a candidate pool.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    /// Accepted candidates, best first
    pub suggestions: Vec<Suggestion>,

    /// Candidates compared by the engine
    pub compared: usize,

    /// Candidates whose tree or person opted out of global matching
    pub opted_out: usize,

    /// Candidates the engine could not evaluate
    pub invalid: usize,

    /// Candidates compared but below the acceptance threshold
    pub below_threshold: usize,
}

impl SuggestionReport {
    /// One-line summary of the ranking.
    pub fn summary(&self) -> String {
        format!(
            "{} suggestion(s) from {} compared ({} opted out, {} invalid, {} below threshold)",
            self.suggestions.len(),
            self.compared,
            self.opted_out,
            self.invalid,
            self.below_threshold
        )
    }
}

/// Rank `candidates` against `subject`.
///
/// Keeps candidates with `overall >= threshold`, sorted by `overall`
/// descending (ties keep input order), truncated to `limit`. The subject's
/// own record (same id) is never suggested.
///
/// # Errors
///
/// Fails only when the subject itself has no name.
pub fn rank(
    matcher: &Matcher,
    subject: &PersonRecord,
    candidates: Vec<Candidate>,
    threshold: f64,
    limit: usize,
) -> Result<SuggestionReport, MatchError> {
    if !subject.has_name() {
        return Err(MatchError::MissingRequiredField {
            side: RecordSide::Left,
            field: "name",
        });
    }

    let mut report = SuggestionReport::default();

    for candidate in candidates {
        if !candidate.is_matchable() {
            report.opted_out += 1;
            continue;
        }
        if subject.id.is_some() && candidate.person.id == subject.id {
            continue;
        }

        let result = match matcher.compare(subject, &candidate.person) {
            Ok(result) => result,
            Err(e) => {
                warn!(candidate = ?candidate.person.id, "Cannot evaluate candidate: {}", e);
                report.invalid += 1;
                continue;
            }
        };
        report.compared += 1;

        debug!(
            candidate = ?candidate.person.id,
            overall = result.overall,
            evidence = result.evidence.len(),
            "Candidate compared"
        );

        if result.overall >= threshold {
            report.suggestions.push(Suggestion { candidate, result });
        } else {
            report.below_threshold += 1;
        }
    }

    report
        .suggestions
        .sort_by(|a, b| b.result.overall.total_cmp(&a.result.overall));
    report.suggestions.truncate(limit);

    Ok(report)
}
