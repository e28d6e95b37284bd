//! Evidence aggregation

use crate::rules::{DateProximityRule, LocationProximityRule, NameSimilarityRule, ParentNamesRule};
use crate::{MatchConfig, MatchError, RecordSide, RuleSettings};
use kindred_domain::traits::EvidenceRule;
use kindred_domain::{Breakdown, EvidenceItem, EvidenceKind, MatchResult, PersonRecord};
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

/// One row of the rule table
struct RuleEntry {
    rule: Box<dyn EvidenceRule + Send + Sync>,
    settings: RuleSettings,
}

/// The Matcher compares person records against its rule table
///
/// Rules run in table order. A rule whose raw score clears its gate adds an
/// evidence item and takes part in the weighted average; a rule that does
/// not clear its gate (or has no score) is left out of both the numerator
/// and the denominator.
///
/// A matcher holds no per-call state and can be shared across threads.
pub struct Matcher {
    rules: Vec<RuleEntry>,
}

impl Matcher {
    /// Create a Matcher with the built-in rules configured by `config`
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self::from_validated(&config))
    }

    /// Create a Matcher with default configuration
    pub fn default_config() -> Self {
        Self::from_validated(&MatchConfig::default())
    }

    fn from_validated(config: &MatchConfig) -> Self {
        let mut matcher = Self { rules: Vec::new() };
        matcher.push(NameSimilarityRule, config.name);
        matcher.push(DateProximityRule::new(config.date_decay_years), config.date);
        matcher.push(
            LocationProximityRule::with_aliases(&config.place_aliases),
            config.location,
        );
        matcher.push(ParentNamesRule, config.parent);
        matcher
    }

    fn push<R>(&mut self, rule: R, settings: RuleSettings)
    where
        R: EvidenceRule + Send + Sync + 'static,
    {
        self.rules.push(RuleEntry {
            rule: Box::new(rule),
            settings,
        });
    }

    /// Append a rule to the end of the table
    ///
    /// Breakdown fields are filled by the first rule of each kind, so an
    /// extra rule of an existing kind only adds evidence.
    pub fn with_rule<R>(mut self, rule: R, settings: RuleSettings) -> Result<Self, MatchError>
    where
        R: EvidenceRule + Send + Sync + 'static,
    {
        settings.validate(rule.kind().as_str())?;
        self.push(rule, settings);
        Ok(self)
    }

    /// Kinds of the rules in table order
    pub fn rule_kinds(&self) -> Vec<EvidenceKind> {
        self.rules.iter().map(|entry| entry.rule.kind()).collect()
    }

    /// Compare two person records
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MissingRequiredField`] if either record has a
    /// blank name. No partial result is produced.
    pub fn compare(&self, a: &PersonRecord, b: &PersonRecord) -> Result<MatchResult, MatchError> {
        require_name(a, RecordSide::Left)?;
        require_name(b, RecordSide::Right)?;

        let mut evidence = Vec::new();
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        let mut name_score = None;
        let mut date_score = None;
        let mut location_score = None;

        for entry in &self.rules {
            let kind = entry.rule.kind();

            let Some(score) = entry.rule.score(a, b) else {
                trace!(kind = %kind, "Rule skipped, inputs missing");
                continue;
            };
            if !score.is_finite() {
                warn!(kind = %kind, score, "Rule produced a non-finite score, ignoring");
                continue;
            }
            let score = score.clamp(0.0, 1.0);

            match kind {
                EvidenceKind::NameSimilarity => {
                    name_score.get_or_insert(score);
                }
                EvidenceKind::DateProximity => {
                    date_score.get_or_insert(score);
                }
                EvidenceKind::LocationMatch => {
                    location_score.get_or_insert(score);
                }
                EvidenceKind::ParentMatch => {}
            }

            let included = score > entry.settings.threshold;
            debug!(
                kind = %kind,
                score,
                threshold = entry.settings.threshold,
                included,
                "Evidence rule evaluated"
            );

            if included {
                evidence.push(EvidenceItem {
                    kind,
                    score,
                    details: entry.rule.details(score),
                });
                weighted_sum += score * entry.settings.weight;
                weight_total += entry.settings.weight;
            }
        }

        let breakdown = Breakdown {
            name_score: name_score.unwrap_or(0.0),
            date_score: date_score.unwrap_or(0.0),
            location_score: location_score.unwrap_or(0.0),
        };

        if weight_total <= 0.0 {
            return Ok(MatchResult::empty(breakdown));
        }

        Ok(MatchResult {
            overall: (weighted_sum / weight_total).clamp(0.0, 1.0),
            evidence,
            breakdown,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::default_config()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|entry| (entry.rule.kind(), entry.settings)))
            .finish()
    }
}

fn require_name(person: &PersonRecord, side: RecordSide) -> Result<(), MatchError> {
    if person.has_name() {
        Ok(())
    } else {
        Err(MatchError::MissingRequiredField { side, field: "name" })
    }
}

/// Compare two person records with the default configuration
///
/// # Examples
///
/// ```
/// use kindred_domain::PersonRecord;
///
/// let result = kindred_matcher::compare(
///     &PersonRecord::new("cat"),
///     &PersonRecord::new("hat"),
/// ).unwrap();
/// assert_eq!(result.evidence[0].details, "Names match 67%");
/// ```
pub fn compare(a: &PersonRecord, b: &PersonRecord) -> Result<MatchResult, MatchError> {
    static DEFAULT: OnceLock<Matcher> = OnceLock::new();
    DEFAULT.get_or_init(Matcher::default_config).compare(a, b)
}
