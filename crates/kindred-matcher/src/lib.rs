//! Kindred Matcher
//!
//! Compares two person records and produces an explainable confidence that
//! they describe the same person.
//!
//! The matcher provides:
//! - Text normalization and Levenshtein similarity
//! - Four evidence rules (name, birth year, location, parent names)
//! - Gated, weighted aggregation driven by a rule table
//! - An evidence trail and a diagnostic breakdown
//!
//! # Examples
//!
//! ```
//! use kindred_domain::PersonRecord;
//! use kindred_matcher::{Matcher, MatchConfig};
//!
//! let matcher = Matcher::new(MatchConfig::default()).unwrap();
//!
//! let a = PersonRecord::new("John Smith").with_date_of_birth("1990-05-01");
//! let b = PersonRecord::new("john smith ").with_date_of_birth("1990-06-15");
//!
//! let result = matcher.compare(&a, &b).unwrap();
//! assert_eq!(result.overall, 1.0);
//! assert_eq!(result.evidence.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod distance;
mod engine;
mod error;
pub mod normalize;
pub mod rules;

pub use config::{MatchConfig, RuleSettings};
pub use engine::{compare, Matcher};
pub use error::{MatchError, RecordSide};
