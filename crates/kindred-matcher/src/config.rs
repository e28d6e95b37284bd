//! Matcher configuration
//!
//! Weights and gating thresholds for every rule, the birth-year decay span
//! and the place alias table. All of it can be loaded from TOML:
//!
//! ```toml
//! date_decay_years = 20
//! place_aliases = [["lviv", "lwow", "lemberg"]]
//!
//! [name]
//! weight = 0.4
//! threshold = 0.3
//!
//! [date]
//! weight = 0.3
//! threshold = 0.5
//!
//! [location]
//! weight = 0.2
//! threshold = 0.6
//!
//! [parent]
//! weight = 0.1
//! threshold = 0.7
//! ```

use crate::MatchError;
use serde::{Deserialize, Serialize};

/// Weight of name similarity in the overall score
pub const NAME_WEIGHT: f64 = 0.40;
/// Weight of birth-year proximity in the overall score
pub const DATE_WEIGHT: f64 = 0.30;
/// Weight of location proximity in the overall score
pub const LOCATION_WEIGHT: f64 = 0.20;
/// Weight of parent-name agreement in the overall score
pub const PARENT_WEIGHT: f64 = 0.10;

/// Name similarity must exceed this to count as evidence
pub const NAME_THRESHOLD: f64 = 0.30;
/// Birth-year proximity must exceed this to count as evidence
pub const DATE_THRESHOLD: f64 = 0.50;
/// Location proximity must exceed this to count as evidence
pub const LOCATION_THRESHOLD: f64 = 0.60;
/// Parent-name agreement must exceed this to count as evidence
pub const PARENT_THRESHOLD: f64 = 0.70;

/// Birth years this far apart (or more) score zero
pub const DATE_DECAY_YEARS: u32 = 20;

/// Weight and gate of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Contribution to the weighted average when the rule clears its gate
    pub weight: f64,

    /// Raw score must be strictly greater than this to count as evidence
    pub threshold: f64,
}

impl RuleSettings {
    /// Create rule settings
    pub const fn new(weight: f64, threshold: f64) -> Self {
        Self { weight, threshold }
    }

    /// Check that the weight is positive and the threshold lies in [0, 1)
    pub fn validate(&self, rule: &str) -> Result<(), MatchError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(MatchError::InvalidConfig(format!(
                "{} weight must be a positive number, got {}",
                rule, self.weight
            )));
        }
        if !self.threshold.is_finite() || !(0.0..1.0).contains(&self.threshold) {
            return Err(MatchError::InvalidConfig(format!(
                "{} threshold must be in [0.0, 1.0), got {}",
                rule, self.threshold
            )));
        }
        Ok(())
    }
}

/// Configuration for the matcher's rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Birth years this far apart score zero; decay is linear up to it
    #[serde(default = "default_date_decay_years")]
    pub date_decay_years: u32,

    /// Groups of place names that denote the same place
    ///
    /// Every name in a group is compared as the group's first entry.
    #[serde(default)]
    pub place_aliases: Vec<Vec<String>>,

    /// Name similarity rule
    #[serde(default = "default_name")]
    pub name: RuleSettings,

    /// Birth-year proximity rule
    #[serde(default = "default_date")]
    pub date: RuleSettings,

    /// Location proximity rule
    #[serde(default = "default_location")]
    pub location: RuleSettings,

    /// Parent-name corroboration rule
    #[serde(default = "default_parent")]
    pub parent: RuleSettings,
}

fn default_date_decay_years() -> u32 {
    DATE_DECAY_YEARS
}

fn default_name() -> RuleSettings {
    RuleSettings::new(NAME_WEIGHT, NAME_THRESHOLD)
}

fn default_date() -> RuleSettings {
    RuleSettings::new(DATE_WEIGHT, DATE_THRESHOLD)
}

fn default_location() -> RuleSettings {
    RuleSettings::new(LOCATION_WEIGHT, LOCATION_THRESHOLD)
}

fn default_parent() -> RuleSettings {
    RuleSettings::new(PARENT_WEIGHT, PARENT_THRESHOLD)
}

impl Default for MatchConfig {
    /// Weights 0.4 / 0.3 / 0.2 / 0.1, gates 0.3 / 0.5 / 0.6 / 0.7, 20-year decay
    fn default() -> Self {
        Self {
            date_decay_years: DATE_DECAY_YEARS,
            place_aliases: Vec::new(),
            name: default_name(),
            date: default_date(),
            location: default_location(),
            parent: default_parent(),
        }
    }
}

impl MatchConfig {
    /// Strict preset: higher gates, shorter birth-year decay
    ///
    /// Fewer, more certain suggestions.
    pub fn strict() -> Self {
        Self {
            date_decay_years: 10,
            name: RuleSettings::new(NAME_WEIGHT, 0.5),
            date: RuleSettings::new(DATE_WEIGHT, 0.6),
            location: RuleSettings::new(LOCATION_WEIGHT, 0.75),
            parent: RuleSettings::new(PARENT_WEIGHT, 0.8),
            ..Self::default()
        }
    }

    /// Lenient preset: lower gates, longer birth-year decay
    ///
    /// Useful for sparse historical records with transcription noise.
    pub fn lenient() -> Self {
        Self {
            date_decay_years: 30,
            name: RuleSettings::new(NAME_WEIGHT, 0.2),
            date: RuleSettings::new(DATE_WEIGHT, 0.4),
            location: RuleSettings::new(LOCATION_WEIGHT, 0.5),
            parent: RuleSettings::new(PARENT_WEIGHT, 0.6),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), MatchError> {
        self.name.validate("name")?;
        self.date.validate("date")?;
        self.location.validate("location")?;
        self.parent.validate("parent")?;

        if self.date_decay_years == 0 {
            return Err(MatchError::InvalidConfig(
                "date_decay_years must be greater than 0".to_string(),
            ));
        }

        for (i, group) in self.place_aliases.iter().enumerate() {
            if group.is_empty() {
                return Err(MatchError::InvalidConfig(format!(
                    "place alias group {} is empty",
                    i
                )));
            }
            if group.iter().any(|name| name.trim().is_empty()) {
                return Err(MatchError::InvalidConfig(format!(
                    "place alias group {} contains a blank name",
                    i
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, MatchError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| MatchError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, MatchError> {
        toml::to_string_pretty(self)
            .map_err(|e| MatchError::InvalidConfig(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.name, RuleSettings::new(0.4, 0.3));
        assert_eq!(config.date, RuleSettings::new(0.3, 0.5));
        assert_eq!(config.location, RuleSettings::new(0.2, 0.6));
        assert_eq!(config.parent, RuleSettings::new(0.1, 0.7));
        assert_eq!(config.date_decay_years, 20);
        assert!(config.place_aliases.is_empty());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(MatchConfig::default().validate().is_ok());
        assert!(MatchConfig::strict().validate().is_ok());
        assert!(MatchConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_strict_gates_are_higher() {
        let strict = MatchConfig::strict();
        let default = MatchConfig::default();
        assert!(strict.name.threshold > default.name.threshold);
        assert!(strict.parent.threshold > default.parent.threshold);
        assert!(strict.date_decay_years < default.date_decay_years);
    }

    #[test]
    fn test_invalid_weight() {
        let mut config = MatchConfig::default();
        config.date.weight = 0.0;
        assert!(config.validate().is_err());

        config.date.weight = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_threshold() {
        let mut config = MatchConfig::default();
        config.location.threshold = 1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("location threshold"));
    }

    #[test]
    fn test_invalid_decay() {
        let mut config = MatchConfig::default();
        config.date_decay_years = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_alias_groups() {
        let mut config = MatchConfig::default();
        config.place_aliases = vec![vec![]];
        assert!(config.validate().is_err());

        config.place_aliases = vec![vec!["lviv".to_string(), " ".to_string()]];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = MatchConfig::strict();
        config.place_aliases = vec![vec!["Lviv".to_string(), "Lemberg".to_string()]];

        let toml_str = config.to_toml().unwrap();
        let parsed = MatchConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = MatchConfig::from_toml(
            r#"
            [name]
            weight = 0.5
            threshold = 0.4
            "#,
        )
        .unwrap();

        assert_eq!(parsed.name, RuleSettings::new(0.5, 0.4));
        assert_eq!(parsed.date, RuleSettings::new(DATE_WEIGHT, DATE_THRESHOLD));
        assert_eq!(parsed.date_decay_years, DATE_DECAY_YEARS);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        let result = MatchConfig::from_toml(
            r#"
            [parent]
            weight = -1.0
            threshold = 0.7
            "#,
        );
        assert!(matches!(result, Err(MatchError::InvalidConfig(_))));
    }
}
