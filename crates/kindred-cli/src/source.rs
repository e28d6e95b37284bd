//! File-backed record loading.

use crate::error::{CliError, Result};
use kindred_domain::traits::CandidateSource;
use kindred_domain::{Candidate, PersonRecord};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Read a JSON document from a file, or stdin when `path` is "-".
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Load a single person record from a JSON file.
pub fn load_person(path: &str) -> Result<PersonRecord> {
    parse_person(&read_input(path)?)
}

/// Parse a single person record from JSON.
pub fn parse_person(json: &str) -> Result<PersonRecord> {
    Ok(serde_json::from_str(json)?)
}

/// Candidates stored as a JSON array in a file.
#[derive(Debug, Clone)]
pub struct JsonCandidateSource {
    path: PathBuf,
}

impl JsonCandidateSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for JsonCandidateSource {
    type Error = CliError;

    fn candidates(&self) -> Result<Vec<Candidate>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            CliError::Source(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            CliError::Source(format!("Invalid candidates in {}: {}", self.path.display(), e))
        })
    }
}
