#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Serialize, Serializer};
use tabled::Tabled;

use crate::{language::Language, severity::SeverityLevel};

/// Baseline value every quality dimension starts from.
const BASELINE: f64 = 7.0;

/// Trigger words that make a comment penalize readability.
const READABILITY_TRIGGERS: &[&str] = &["naming", "variable", "unclear"];

/// Trigger words that make a comment penalize performance.
const PERFORMANCE_TRIGGERS: &[&str] = &["efficient", "performance", "slow", "optimize"];

/// Trigger words that make a comment penalize maintainability.
const MAINTAINABILITY_TRIGGERS: &[&str] = &["maintainability", "complex", "structure"];

/// Trigger words that make a comment penalize best practices.
const BEST_PRACTICES_TRIGGERS: &[&str] = &["convention", "style", "best practice", "standard"];

/// Serializes a score rounded to one decimal place, matching how scores
/// are displayed.
fn round1<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10.0).round() / 10.0)
}

/// A six-field snapshot of code quality on a 0-10 scale, immutable after
/// construction.
///
/// `overall` is the unweighted mean of the four base dimensions and
/// `improvement_potential` is `10 - overall`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityScore {
    /// Mean of the four base dimensions
    #[serde(serialize_with = "round1")]
    pub overall:               f64,
    /// Penalized by naming/variable/unclear comments
    #[serde(serialize_with = "round1")]
    pub readability:           f64,
    /// Penalized by efficiency and optimization comments
    #[serde(serialize_with = "round1")]
    pub performance:           f64,
    /// Penalized by complexity and structure comments
    #[serde(serialize_with = "round1")]
    pub maintainability:       f64,
    /// Penalized by convention and style comments
    #[serde(serialize_with = "round1")]
    pub best_practices:        f64,
    /// Inverse of the overall score
    #[serde(serialize_with = "round1")]
    pub improvement_potential: f64,
}

/// One row of the score table rendered by the CLI.
#[derive(Tabled)]
pub struct ScoreRow {
    /// Dimension name
    #[tabled(rename = "Dimension")]
    dimension: &'static str,
    /// Score out of ten, one decimal
    #[tabled(rename = "Score")]
    score:     String,
}

impl QualityScore {
    /// Rows for rendering this score as a table, one per field.
    pub fn rows(&self) -> Vec<ScoreRow> {
        let row = |dimension: &'static str, value: f64| ScoreRow {
            dimension,
            score: format!("{value:.1}/10"),
        };

        vec![
            row("Overall", self.overall),
            row("Readability", self.readability),
            row("Performance", self.performance),
            row("Maintainability", self.maintainability),
            row("Best practices", self.best_practices),
            row("Improvement potential", self.improvement_potential),
        ]
    }
}

/// Maps a comment's severity to the penalty applied to each matching
/// dimension.
fn penalty(severity: SeverityLevel) -> f64 {
    match severity {
        SeverityLevel::Harsh => -2.0,
        SeverityLevel::Moderate => -1.0,
        SeverityLevel::Neutral => -0.5,
    }
}

/// Clamps a dimension to the 0-10 scale.
fn clamp(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

/// Aggregates review comments into a [`QualityScore`].
///
/// Every dimension starts at 7.0. Each comment is classified for severity
/// and applies its penalty weight to every dimension whose trigger-word
/// set it contains; one comment may penalize several dimensions at once,
/// and a comment matching no trigger penalizes nothing. Dimensions are
/// clamped before the overall mean is taken. Deterministic, never fails.
pub fn score(comments: &[String]) -> QualityScore {
    let mut readability = BASELINE;
    let mut performance = BASELINE;
    let mut maintainability = BASELINE;
    let mut best_practices = BASELINE;

    for comment in comments {
        let weight = penalty(SeverityLevel::classify(comment));
        let comment = comment.to_lowercase();

        let hits = |triggers: &[&str]| triggers.iter().any(|word| comment.contains(word));

        if hits(READABILITY_TRIGGERS) {
            readability += weight;
        }
        if hits(PERFORMANCE_TRIGGERS) {
            performance += weight;
        }
        if hits(MAINTAINABILITY_TRIGGERS) {
            maintainability += weight;
        }
        if hits(BEST_PRACTICES_TRIGGERS) {
            best_practices += weight;
        }
    }

    let readability = clamp(readability);
    let performance = clamp(performance);
    let maintainability = clamp(maintainability);
    let best_practices = clamp(best_practices);

    let overall = (readability + performance + maintainability + best_practices) / 4.0;

    QualityScore {
        overall,
        readability,
        performance,
        maintainability,
        best_practices,
        improvement_potential: 10.0 - overall,
    }
}

/// Comment counts per severity level for one submission.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeverityBreakdown {
    /// Comments classified as harsh
    pub harsh:    usize,
    /// Comments classified as moderate
    pub moderate: usize,
    /// Comments classified as neutral
    pub neutral:  usize,
}

/// One row of the severity breakdown table rendered by the CLI.
#[derive(Tabled)]
pub struct BreakdownRow {
    /// Severity label
    #[tabled(rename = "Severity")]
    severity: &'static str,
    /// Number of comments with that severity
    #[tabled(rename = "Comments")]
    count:    usize,
}

impl SeverityBreakdown {
    /// Rows for rendering this breakdown as a table.
    pub fn rows(&self) -> Vec<BreakdownRow> {
        vec![
            BreakdownRow {
                severity: "harsh",
                count:    self.harsh,
            },
            BreakdownRow {
                severity: "moderate",
                count:    self.moderate,
            },
            BreakdownRow {
                severity: "neutral",
                count:    self.neutral,
            },
        ]
    }
}

/// A standalone quality analysis that never touches the generation
/// service.
#[derive(Debug, Clone, Serialize)]
pub struct QualityAnalysis {
    /// Language detected from the snippet
    pub language:           Language,
    /// Quality metrics for the submission
    pub quality_metrics:    QualityScore,
    /// Number of review comments considered
    pub total_issues:       usize,
    /// Comment counts per severity level
    pub severity_breakdown: SeverityBreakdown,
}

/// Scores a submission without generating narrative feedback.
pub fn analyze(code_snippet: &str, comments: &[String]) -> QualityAnalysis {
    let language = Language::detect(code_snippet);
    let quality_metrics = score(comments);

    let mut breakdown = SeverityBreakdown {
        harsh:    0,
        moderate: 0,
        neutral:  0,
    };
    for comment in comments {
        match SeverityLevel::classify(comment) {
            SeverityLevel::Harsh => breakdown.harsh += 1,
            SeverityLevel::Moderate => breakdown.moderate += 1,
            SeverityLevel::Neutral => breakdown.neutral += 1,
        }
    }

    QualityAnalysis {
        language,
        quality_metrics,
        total_issues: comments.len(),
        severity_breakdown: breakdown,
    }
}
