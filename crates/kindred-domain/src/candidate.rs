//! Candidate module - records offered for global matching

use crate::PersonRecord;
use serde::{Deserialize, Serialize};

/// A person record offered for cross-tree matching
///
/// Global matching is opt-in twice: the owning tree and the person itself
/// must both allow it before the record may be compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The candidate person
    pub person: PersonRecord,

    /// Owning tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,

    /// Tree-level opt-in flag
    #[serde(default)]
    pub tree_global_matching: bool,

    /// Person-level opt-in flag
    #[serde(default)]
    pub person_global_matching: bool,
}

impl Candidate {
    /// Whether both opt-in flags allow matching
    pub fn is_matchable(&self) -> bool {
        self.tree_global_matching && self.person_global_matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_to_opted_out() {
        let json = r#"{ "person": { "name": "Jan Kowalski" } }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert!(!candidate.is_matchable());
    }

    #[test]
    fn test_both_flags_required() {
        let mut candidate = Candidate {
            person: PersonRecord::new("Jan Kowalski"),
            tree_id: Some("tree-1".to_string()),
            tree_global_matching: true,
            person_global_matching: true,
        };
        assert!(candidate.is_matchable());

        candidate.person_global_matching = false;
        assert!(!candidate.is_matchable());

        candidate.person_global_matching = true;
        candidate.tree_global_matching = false;
        assert!(!candidate.is_matchable());
    }
}
