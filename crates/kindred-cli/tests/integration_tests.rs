//! Integration tests for kindred-cli
//!
//! These tests drive the library end to end: config file, record files,
//! ranking and formatted output.

use kindred_cli::config::OutputFormat;
use kindred_cli::source::{load_person, JsonCandidateSource};
use kindred_cli::suggest::rank;
use kindred_cli::{Config, Formatter};
use kindred_domain::traits::CandidateSource;
use kindred_matcher::Matcher;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CANDIDATES: &str = r#"[
    {
        "person": {
            "id": "t2-14",
            "name": "Piotr Wisniewski",
            "dateOfBirth": "1923",
            "location": "Lemberg"
        },
        "treeId": "tree-2",
        "treeGlobalMatching": true,
        "personGlobalMatching": true
    },
    {
        "person": { "id": "t3-1", "name": "Piotr Wiśniewski", "dateOfBirth": "1921-02-11" },
        "treeId": "tree-3",
        "treeGlobalMatching": false,
        "personGlobalMatching": true
    },
    {
        "person": { "id": "t4-9", "name": "Helena Zielińska", "dateOfBirth": "1850" },
        "treeId": "tree-4",
        "treeGlobalMatching": true,
        "personGlobalMatching": true
    },
    {
        "person": { "id": "t5-2", "name": "" },
        "treeGlobalMatching": true,
        "personGlobalMatching": true
    }
]"#;

const SUBJECT: &str = r#"{
    "id": "t1-3",
    "name": "Piotr Wiśniewski",
    "dateOfBirth": "1921-02-11",
    "location": "Lwów"
}"#;

const CONFIG: &str = r#"
[settings]
color = false
format = "json"

[suggestions]
acceptance_threshold = 0.7
limit = 5

[matching]
place_aliases = [["Lviv", "Lwów", "Lemberg"]]
"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_suggest_flow_from_files() {
    let dir = TempDir::new().unwrap();
    let config_path = write(&dir, "config.toml", CONFIG);
    let subject_path = write(&dir, "subject.json", SUBJECT);
    let candidates_path = write(&dir, "candidates.json", CANDIDATES);

    let config = Config::load(Some(Path::new(&config_path))).unwrap();
    assert_eq!(config.settings.format, OutputFormat::Json);

    let matcher = Matcher::new(config.matching.clone()).unwrap();
    let subject = load_person(&subject_path).unwrap();
    let candidates = JsonCandidateSource::new(&candidates_path).candidates().unwrap();

    let report = rank(
        &matcher,
        &subject,
        candidates,
        config.suggestions.acceptance_threshold,
        config.suggestions.limit,
    )
    .unwrap();

    assert_eq!(report.suggestions.len(), 1);
    assert_eq!(report.opted_out, 1);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.below_threshold, 1);

    let best = &report.suggestions[0];
    assert_eq!(best.candidate.person.id.as_deref(), Some("t2-14"));
    // Lemberg and Lwów share an alias group
    assert_eq!(best.result.breakdown.location_score, 1.0);
    assert!(best.result.overall > 0.9);
}

#[test]
fn test_report_serializes_for_callers() {
    let dir = TempDir::new().unwrap();
    let subject_path = write(&dir, "subject.json", SUBJECT);
    let candidates_path = write(&dir, "candidates.json", CANDIDATES);

    let subject = load_person(&subject_path).unwrap();
    let candidates = JsonCandidateSource::new(&candidates_path).candidates().unwrap();
    let report = rank(&Matcher::default(), &subject, candidates, 0.5, 10).unwrap();

    let formatter = Formatter::new(OutputFormat::Json, false);
    let output = formatter.format_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["suggestions"][0]["candidate"]["person"]["id"], "t2-14");
    assert_eq!(
        value["suggestions"][0]["result"]["evidence"][0]["type"],
        "NAME_SIMILARITY"
    );
    assert_eq!(value["optedOut"], 1);
}

#[test]
fn test_compare_two_files() {
    let dir = TempDir::new().unwrap();
    let left = write(&dir, "left.json", r#"{ "name": "John Smith", "dateOfBirth": "1990-05-01" }"#);
    let right = write(&dir, "right.json", r#"{ "name": "john smith ", "dateOfBirth": "1990-06-15" }"#);

    let result = Matcher::default()
        .compare(&load_person(&left).unwrap(), &load_person(&right).unwrap())
        .unwrap();
    assert_eq!(result.overall, 1.0);

    let formatter = Formatter::new(OutputFormat::Table, false);
    let output = formatter.format_result(&result).unwrap();
    assert!(output.contains("Overall confidence: 100%"));
    assert!(output.contains("Birth dates within acceptable range"));
}
