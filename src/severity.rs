use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Words whose presence marks a comment as bluntly phrased.
const HARSH_INDICATORS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "stupid",
    "dumb",
    "wrong",
    "never",
    "always",
    "completely",
    "totally",
    "absolutely",
    "obviously",
];

/// Hedging words that soften how a comment reads.
const NEUTRAL_INDICATORS: &[&str] = &[
    "could",
    "might",
    "consider",
    "suggest",
    "perhaps",
    "maybe",
    "improvement",
    "better",
    "optimize",
];

/// How harshly a review comment is phrased, independent of its technical
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// More harsh indicators than hedging ones
    Harsh,
    /// Balanced counts, including no hits from either set
    Moderate,
    /// More hedging indicators than harsh ones
    Neutral,
}

impl SeverityLevel {
    /// Classifies the tone of a single comment.
    ///
    /// Counts substring occurrences of the harsh and hedging word sets in
    /// the lower-cased comment. Matching is containment, not whole-word:
    /// "maybe" matches inside "maybel" too, and that imprecision is part
    /// of the contract. A tie, including zero hits on both sides, is
    /// moderate.
    pub fn classify(comment: &str) -> SeverityLevel {
        let comment = comment.to_lowercase();

        let harsh_count = HARSH_INDICATORS
            .iter()
            .filter(|indicator| comment.contains(**indicator))
            .count();
        let neutral_count = NEUTRAL_INDICATORS
            .iter()
            .filter(|indicator| comment.contains(**indicator))
            .count();

        if harsh_count > neutral_count {
            SeverityLevel::Harsh
        } else if neutral_count > harsh_count {
            SeverityLevel::Neutral
        } else {
            SeverityLevel::Moderate
        }
    }

    /// The most frequent severity in a batch, used to condition the
    /// generation prompt for the whole review.
    ///
    /// Ties go to whichever level is encountered first in sequence order.
    /// An empty batch is moderate.
    pub fn overall(severities: &[SeverityLevel]) -> SeverityLevel {
        let mut overall = SeverityLevel::Moderate;
        let mut best_count = 0;

        for severity in severities {
            let count = severities.iter().filter(|s| *s == severity).count();
            if count > best_count {
                overall = *severity;
                best_count = count;
            }
        }

        overall
    }

    /// Lower-case label used in breakdown tables and log events.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Harsh => "harsh",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Neutral => "neutral",
        }
    }
}

impl Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
