//! Property tests for the matcher: range, determinism and symmetry

use kindred_domain::{ParentNames, PersonRecord};
use kindred_matcher::distance::{edit_distance, similarity};
use kindred_matcher::{compare, MatchConfig, Matcher};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-złóśż ]{0,6}[A-Za-z][A-Za-złóśż ]{0,12}"
}

fn optional_name() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(name_strategy())
}

fn date_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        (1700i32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        (1700i32..2030).prop_map(|y| y.to_string()),
        Just("unknown".to_string()),
    ])
}

fn location_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just("Lviv".to_string()),
        Just("Lwów".to_string()),
        Just("Kraków".to_string()),
        Just("St. Petersburg".to_string()),
        "[a-z]{1,10}",
    ])
}

fn person_strategy() -> impl Strategy<Value = PersonRecord> {
    (
        name_strategy(),
        date_strategy(),
        location_strategy(),
        proptest::option::of((optional_name(), optional_name())),
    )
        .prop_map(|(name, date_of_birth, location, parents)| PersonRecord {
            id: None,
            name,
            date_of_birth,
            location,
            parent_names: parents.map(|(father, mother)| ParentNames { father, mother }),
        })
}

fn aliased_matcher() -> Matcher {
    let mut config = MatchConfig::default();
    config.place_aliases = vec![vec!["Lviv".to_string(), "Lwów".to_string()]];
    Matcher::new(config).unwrap()
}

proptest! {
    /// Property: overall and every evidence score stay in [0, 1]
    #[test]
    fn test_scores_in_range(a in person_strategy(), b in person_strategy()) {
        let result = compare(&a, &b).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.overall));
        for item in &result.evidence {
            prop_assert!((0.0..=1.0).contains(&item.score), "score {} out of range", item.score);
        }
        prop_assert!((0.0..=1.0).contains(&result.breakdown.name_score));
        prop_assert!((0.0..=1.0).contains(&result.breakdown.date_score));
        prop_assert!((0.0..=1.0).contains(&result.breakdown.location_score));
    }

    /// Property: comparing twice yields byte-identical JSON
    #[test]
    fn test_deterministic(a in person_strategy(), b in person_strategy()) {
        let matcher = aliased_matcher();
        let first = serde_json::to_string(&matcher.compare(&a, &b).unwrap()).unwrap();
        let second = serde_json::to_string(&matcher.compare(&a, &b).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: argument order does not matter
    #[test]
    fn test_symmetric(a in person_strategy(), b in person_strategy()) {
        let matcher = aliased_matcher();
        let ab = matcher.compare(&a, &b).unwrap();
        let ba = matcher.compare(&b, &a).unwrap();
        prop_assert_eq!(ab.breakdown, ba.breakdown);
        prop_assert_eq!(ab, ba);
    }

    /// Property: evidence is never empty when overall is positive, and vice versa
    #[test]
    fn test_overall_zero_iff_no_evidence(a in person_strategy(), b in person_strategy()) {
        let result = compare(&a, &b).unwrap();
        prop_assert_eq!(result.evidence.is_empty(), result.overall == 0.0);
    }

    /// Property: a record always fully matches itself on name
    #[test]
    fn test_self_match(a in person_strategy()) {
        let result = compare(&a, &a).unwrap();
        prop_assert_eq!(result.breakdown.name_score, 1.0);
        prop_assert_eq!(result.overall, 1.0);
    }

    /// Property: edit distance is bounded by the longer string and symmetric
    #[test]
    fn test_edit_distance_bounds(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let d = edit_distance(&a, &b);
        let max_len = a.chars().count().max(b.chars().count());
        prop_assert!(d <= max_len);
        prop_assert_eq!(d, edit_distance(&b, &a));
        prop_assert!((0.0..=1.0).contains(&similarity(&a, &b)));
    }

    /// Property: the triangle inequality holds
    #[test]
    fn test_edit_distance_triangle(a in "[a-c]{0,8}", b in "[a-c]{0,8}", c in "[a-c]{0,8}") {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }
}
