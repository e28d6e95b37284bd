//! Evidence module - scored observations and the match result

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of observation an evidence item records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceKind {
    /// Full names are similar
    NameSimilarity,

    /// Birth years are close
    DateProximity,

    /// Places of origin or residence agree
    LocationMatch,

    /// Parent names agree
    ParentMatch,
}

impl EvidenceKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceKind::NameSimilarity => "NAME_SIMILARITY",
            EvidenceKind::DateProximity => "DATE_PROXIMITY",
            EvidenceKind::LocationMatch => "LOCATION_MATCH",
            EvidenceKind::ParentMatch => "PARENT_MATCH",
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contributing observation that cleared its gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// What was observed
    #[serde(rename = "type")]
    pub kind: EvidenceKind,

    /// Raw rule score [0.0, 1.0]
    pub score: f64,

    /// Human-readable explanation
    pub details: String,
}

/// Raw sub-scores, reported regardless of gating
///
/// A field is `0.0` when the underlying data is missing on either record.
/// Parent evidence is not part of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    /// Name similarity
    pub name_score: f64,

    /// Birth-year proximity
    pub date_score: f64,

    /// Location proximity
    pub location_score: f64,
}

/// Outcome of comparing two person records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Weighted confidence [0.0, 1.0] that both records describe one person
    pub overall: f64,

    /// Evidence that cleared its gate, in rule order
    pub evidence: Vec<EvidenceItem>,

    /// Diagnostic sub-scores
    pub breakdown: Breakdown,
}

impl MatchResult {
    /// A result with no detectable evidence of identity
    pub fn empty(breakdown: Breakdown) -> Self {
        Self {
            overall: 0.0,
            evidence: Vec::new(),
            breakdown,
        }
    }

    /// Whether any rule cleared its gate
    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let result = MatchResult {
            overall: 0.75,
            evidence: vec![EvidenceItem {
                kind: EvidenceKind::NameSimilarity,
                score: 0.75,
                details: "Names match 75%".to_string(),
            }],
            breakdown: Breakdown {
                name_score: 0.75,
                date_score: 0.0,
                location_score: 0.0,
            },
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["evidence"][0]["type"], "NAME_SIMILARITY");
        assert_eq!(value["evidence"][0]["details"], "Names match 75%");
        assert_eq!(value["breakdown"]["nameScore"], 0.75);
        assert!(value["breakdown"].get("dateScore").is_some());
        assert!(value["breakdown"].get("locationScore").is_some());
    }

    #[test]
    fn test_kind_display_matches_wire_name() {
        for kind in [
            EvidenceKind::NameSimilarity,
            EvidenceKind::DateProximity,
            EvidenceKind::LocationMatch,
            EvidenceKind::ParentMatch,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_empty_result() {
        let result = MatchResult::empty(Breakdown::default());
        assert_eq!(result.overall, 0.0);
        assert!(!result.has_evidence());
        assert!(result.evidence.is_empty());
    }
}
