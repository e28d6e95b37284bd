//! Kindred Domain Layer
//!
//! Value objects and trait seams shared by the matching engine and its
//! collaborators. The only external dependency is `serde`, because the JSON
//! shape of records and results is part of the contract with callers.
//!
//! ## Key Concepts
//!
//! - **PersonRecord**: the comparison input (a person as stored in some family tree)
//! - **Evidence**: a named, scored observation supporting a same-person hypothesis
//! - **MatchResult**: overall confidence, the evidence trail and a diagnostic breakdown
//! - **Candidate**: a record offered for global matching, with its opt-in flags
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Scoring lives in `kindred-matcher`
//! - Storage and presentation live outside the engine, behind [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod evidence;
pub mod person;
pub mod traits;

// Re-exports for convenience
pub use candidate::Candidate;
pub use evidence::{Breakdown, EvidenceItem, EvidenceKind, MatchResult};
pub use person::{ParentNames, PersonRecord};
