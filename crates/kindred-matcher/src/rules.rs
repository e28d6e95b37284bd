//! Built-in evidence rules
//!
//! Each rule compares one attribute of two person records and returns a raw
//! score in [0.0, 1.0], or `None` when either record lacks the attribute.
//! Gating and weighting happen in the matcher, not here.

use crate::distance::similarity;
use crate::normalize::{normalize, normalize_place};
use chrono::{DateTime, Datelike, NaiveDate};
use kindred_domain::traits::EvidenceRule;
use kindred_domain::{EvidenceKind, PersonRecord};
use std::collections::HashMap;
use tracing::warn;

/// Compares full names by edit distance
#[derive(Debug, Clone, Copy, Default)]
pub struct NameSimilarityRule;

impl NameSimilarityRule {
    /// Similarity of two names after normalization
    ///
    /// Names equal after trimming and case folding score `1.0` without
    /// running the edit-distance computation.
    pub fn similarity(a: &str, b: &str) -> f64 {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            return 1.0;
        }
        similarity(&a, &b)
    }
}

impl EvidenceRule for NameSimilarityRule {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::NameSimilarity
    }

    fn score(&self, a: &PersonRecord, b: &PersonRecord) -> Option<f64> {
        Some(Self::similarity(&a.name, &b.name))
    }

    fn details(&self, score: f64) -> String {
        format!("Names match {}%", (score * 100.0).round() as u32)
    }
}

/// Compares calendar years of birth with linear decay
///
/// Only the year is considered: 31 December 1899 and 1 January 1900 are one
/// year apart.
#[derive(Debug, Clone, Copy)]
pub struct DateProximityRule {
    decay_years: u32,
}

impl DateProximityRule {
    /// Create a rule where `decay_years` apart (or more) scores zero
    ///
    /// A span of 0 is raised to 1, so only equal years score above zero.
    /// [`MatchConfig::validate`](crate::MatchConfig::validate) rejects a zero
    /// span before it reaches a matcher.
    pub fn new(decay_years: u32) -> Self {
        Self {
            decay_years: decay_years.max(1),
        }
    }

    /// Score for a given absolute year difference
    pub fn score_for_gap(&self, year_diff: u32) -> f64 {
        (1.0 - year_diff as f64 / self.decay_years as f64).max(0.0)
    }
}

impl Default for DateProximityRule {
    fn default() -> Self {
        Self::new(crate::config::DATE_DECAY_YEARS)
    }
}

impl EvidenceRule for DateProximityRule {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::DateProximity
    }

    fn score(&self, a: &PersonRecord, b: &PersonRecord) -> Option<f64> {
        let (raw_a, raw_b) = (a.date_of_birth()?, b.date_of_birth()?);

        let (Some(year_a), Some(year_b)) = (parse_birth_year(raw_a), parse_birth_year(raw_b)) else {
            warn!(left = raw_a, right = raw_b, "Unparseable date of birth, skipping date rule");
            return None;
        };

        Some(self.score_for_gap(year_a.abs_diff(year_b)))
    }

    fn details(&self, _score: f64) -> String {
        "Birth dates within acceptable range".to_string()
    }
}

/// Extract the calendar year from an ISO-ish date string
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, `YYYY-MM` and bare `YYYY`.
///
/// # Examples
///
/// ```
/// use kindred_matcher::rules::parse_birth_year;
///
/// assert_eq!(parse_birth_year("1990-05-01"), Some(1990));
/// assert_eq!(parse_birth_year("1887"), Some(1887));
/// assert_eq!(parse_birth_year("unknown"), None);
/// ```
pub fn parse_birth_year(value: &str) -> Option<i32> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.year());
    }

    let (year, month) = match value.split_once('-') {
        Some((year, month)) => (year, Some(month)),
        None => (value, None),
    };

    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if let Some(month) = month {
        let month: u32 = month.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
    }

    year.parse().ok()
}

/// Strategy for comparing two place names
pub trait PlaceComparator {
    /// Similarity of two place names in [0.0, 1.0]
    ///
    /// `None` when either name carries nothing comparable.
    fn compare(&self, a: &str, b: &str) -> Option<f64>;
}

/// Place comparison through an alias table, then edit distance
///
/// Both names are normalized and mapped to their canonical form. Equal
/// canonical forms score `1.0`; anything else falls back to edit-distance
/// similarity of the canonical forms. A name that normalizes to nothing
/// (such as "." or ",") is not comparable.
#[derive(Debug, Clone, Default)]
pub struct AliasedPlaceComparator {
    canonical: HashMap<String, String>,
}

impl AliasedPlaceComparator {
    /// Build from alias groups; each group maps to its first entry
    ///
    /// A name listed in several groups belongs to the first one.
    pub fn new(groups: &[Vec<String>]) -> Self {
        let mut canonical = HashMap::new();
        for group in groups {
            let Some(head) = group.first() else { continue };
            let head = normalize_place(head);
            for alias in group {
                canonical
                    .entry(normalize_place(alias))
                    .or_insert_with(|| head.clone());
            }
        }
        Self { canonical }
    }

    /// Canonical form of a place name, `None` if it normalizes to nothing
    pub fn canonical(&self, place: &str) -> Option<String> {
        let normalized = normalize_place(place);
        if normalized.is_empty() {
            return None;
        }
        match self.canonical.get(&normalized) {
            Some(head) => Some(head.clone()),
            None => Some(normalized),
        }
    }
}

impl PlaceComparator for AliasedPlaceComparator {
    fn compare(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.canonical(a)?;
        let b = self.canonical(b)?;
        if a == b {
            return Some(1.0);
        }
        Some(similarity(&a, &b))
    }
}

/// Compares places of origin or residence
pub struct LocationProximityRule {
    comparator: Box<dyn PlaceComparator + Send + Sync>,
}

impl LocationProximityRule {
    /// Create a rule using the given place comparator
    pub fn new<C>(comparator: C) -> Self
    where
        C: PlaceComparator + Send + Sync + 'static,
    {
        Self {
            comparator: Box::new(comparator),
        }
    }

    /// Create a rule using the alias table comparator
    pub fn with_aliases(groups: &[Vec<String>]) -> Self {
        Self::new(AliasedPlaceComparator::new(groups))
    }
}

impl Default for LocationProximityRule {
    fn default() -> Self {
        Self::new(AliasedPlaceComparator::default())
    }
}

impl EvidenceRule for LocationProximityRule {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::LocationMatch
    }

    fn score(&self, a: &PersonRecord, b: &PersonRecord) -> Option<f64> {
        self.comparator.compare(a.location()?, b.location()?)
    }

    fn details(&self, _score: f64) -> String {
        "Same or nearby location".to_string()
    }
}

/// Compares father and mother names slot by slot
///
/// The score is the mean name similarity over the slots filled on both
/// records. No comparable slot means no score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentNamesRule;

impl EvidenceRule for ParentNamesRule {
    fn kind(&self) -> EvidenceKind {
        EvidenceKind::ParentMatch
    }

    fn score(&self, a: &PersonRecord, b: &PersonRecord) -> Option<f64> {
        let (pa, pb) = (a.parent_names()?, b.parent_names()?);

        let scores: Vec<f64> = [(pa.father(), pb.father()), (pa.mother(), pb.mother())]
            .into_iter()
            .filter_map(|pair| match pair {
                (Some(x), Some(y)) => Some(NameSimilarityRule::similarity(x, y)),
                _ => None,
            })
            .collect();

        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }

    fn details(&self, _score: f64) -> String {
        "Parent names match".to_string()
    }
}
