//! Trait definitions for the engine's seams
//!
//! These traits define the boundaries between the scoring engine and the
//! collaborators around it. Implementations live in other crates.

use crate::{Candidate, EvidenceKind, PersonRecord};

/// One row of the matcher's rule table
///
/// Implemented by the engine (`kindred-matcher`) for the built-in rules, and
/// by callers who want to add their own evidence.
pub trait EvidenceRule {
    /// The kind of evidence this rule produces
    fn kind(&self) -> EvidenceKind;

    /// Raw score in [0.0, 1.0], or `None` when the rule's inputs are missing
    fn score(&self, a: &PersonRecord, b: &PersonRecord) -> Option<f64>;

    /// Explanation attached to the evidence item when the rule clears its gate
    fn details(&self, score: f64) -> String;
}

/// Trait for supplying candidates to compare against
///
/// Implemented by whatever owns person storage (a database, a file, a fixture)
pub trait CandidateSource {
    /// Error type for source operations
    type Error;

    /// Fetch every candidate the source can offer
    fn candidates(&self) -> Result<Vec<Candidate>, Self::Error>;
}
