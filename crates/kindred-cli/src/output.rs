//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::suggest::SuggestionReport;
use colored::*;
use kindred_domain::MatchResult;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single comparison result.
    pub fn format_result(&self, result: &MatchResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_result_table(result)),
        }
    }

    /// Format a suggestion report.
    pub fn format_report(&self, report: &SuggestionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
        }
    }

    fn format_result_table(&self, result: &MatchResult) -> String {
        let mut lines = vec![format!(
            "Overall confidence: {}",
            self.confidence(result.overall)
        )];

        if !result.has_evidence() {
            lines.push(self.warning("No evidence of identity"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Evidence", "Score", "Details"]);
            for item in &result.evidence {
                builder.push_record([
                    item.kind.to_string(),
                    format!("{:.2}", item.score),
                    item.details.clone(),
                ]);
            }
            lines.push(styled(builder));
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Date", "Location"]);
        builder.push_record([
            format!("{:.2}", result.breakdown.name_score),
            format!("{:.2}", result.breakdown.date_score),
            format!("{:.2}", result.breakdown.location_score),
        ]);
        lines.push("Breakdown:".to_string());
        lines.push(styled(builder));

        lines.join("\n")
    }

    fn format_report_table(&self, report: &SuggestionReport) -> String {
        if report.suggestions.is_empty() {
            return format!(
                "{}\n{}",
                self.colorize("No suggestions found.", "yellow"),
                report.summary()
            );
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Name", "Tree", "Overall", "Evidence"]);

        for (rank, suggestion) in report.suggestions.iter().enumerate() {
            let person = &suggestion.candidate.person;
            let evidence: Vec<&str> = suggestion
                .result
                .evidence
                .iter()
                .map(|e| e.kind.as_str())
                .collect();

            builder.push_record([
                (rank + 1).to_string(),
                person.id.clone().unwrap_or_else(|| "-".to_string()),
                person.name.clone(),
                suggestion
                    .candidate
                    .tree_id
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
                format!("{:.2}", suggestion.result.overall),
                evidence.join(", "),
            ]);
        }

        format!("{}\n{}", styled(builder), self.info(&report.summary()))
    }

    /// Format an overall confidence, colored by strength.
    pub fn confidence(&self, overall: f64) -> String {
        let text = format!("{:.0}%", overall * 100.0);
        let color = if overall >= 0.8 {
            "green"
        } else if overall >= 0.5 {
            "yellow"
        } else {
            "red"
        };
        self.colorize(&text, color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
