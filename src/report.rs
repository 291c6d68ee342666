#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    generate::{GenerationError, ReviewGenerator},
    language::Language,
    persona::{self, Persona},
    resources::{self, ResourceLink},
    score::{self, QualityScore},
    severity::SeverityLevel,
};

/// Errors surfaced while turning a request into a review report.
///
/// Unrecognized persona or language keys are not an error path: they
/// default silently to a safe fallback instead.
#[derive(thiserror::Error, Debug)]
pub enum ReviewError {
    /// The input was not parseable as JSON; carries the parser's
    /// diagnostic verbatim
    #[error("invalid JSON input: {0}")]
    InputFormat(String),
    /// The input parsed but violated the request schema; names the
    /// violated constraint
    #[error("invalid review request: {0}")]
    InvalidInput(String),
    /// The external generation call failed; the cause is preserved and
    /// never retried automatically
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// One review request: the code under review and the original comments,
/// owned by the caller and passed by value into the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
pub struct ReviewRequest {
    /// The code under review
    pub code_snippet:    String,
    /// Original review comments, in submission order
    pub review_comments: Vec<String>,
}

impl ReviewRequest {
    /// Checks the schema constraints: a non-empty code snippet and at
    /// least one review comment.
    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.code_snippet.trim().is_empty() {
            return Err(ReviewError::InvalidInput(
                "`code_snippet` must be a non-empty string".to_string(),
            ));
        }
        if self.review_comments.is_empty() {
            return Err(ReviewError::InvalidInput(
                "`review_comments` must be a non-empty list".to_string(),
            ));
        }

        Ok(())
    }

    /// Parses a request from JSON text.
    ///
    /// Malformed syntax is an [`ReviewError::InputFormat`]; syntactically
    /// valid JSON that is missing a key, has wrong-typed fields, or fails
    /// [`ReviewRequest::validate`] is an [`ReviewError::InvalidInput`].
    pub fn from_json(input: &str) -> Result<ReviewRequest, ReviewError> {
        let value: serde_json::Value =
            serde_json::from_str(input).map_err(|e| ReviewError::InputFormat(e.to_string()))?;
        let request: ReviewRequest =
            serde_json::from_value(value).map_err(|e| ReviewError::InvalidInput(e.to_string()))?;
        request.validate()?;

        Ok(request)
    }
}

/// The assembled review: header, generated per-comment sections, and the
/// trailing resource section. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    /// Language detected for the reviewed snippet
    language: Language,
    /// Persona the review was voiced as
    persona:  Persona,
    /// The final markdown document
    markdown: String,
}

impl ReviewReport {
    /// Returns the language detected for the reviewed snippet.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the persona the review was voiced as.
    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Returns the full markdown document.
    pub fn markdown(&self) -> &str {
        &self.markdown
    }
}

impl Display for ReviewReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.markdown)
    }
}

/// Renders the report header naming detected language, persona, and
/// overall score.
fn header(language: Language, persona: Persona, quality: &QualityScore) -> String {
    format!(
        "# 📝 Empathetic Code Review Report\n\n**Language:** {} | **Reviewer Persona:** {} | \
         **Overall Quality Score:** {:.1}/10\n\n",
        language.title(),
        persona.display_name(),
        quality.overall,
    )
}

/// Collects deduplicated resource links across all comments, preserving
/// first-seen order, and renders the trailing section. `None` when no
/// trigger matched.
fn resource_section(request: &ReviewRequest, language: Language) -> Option<String> {
    let links: Vec<ResourceLink> = request
        .review_comments
        .iter()
        .flat_map(|comment| resources::resources_for(comment, &request.code_snippet, language))
        .unique_by(|link| link.label)
        .collect();

    if links.is_empty() {
        return None;
    }

    let mut section = String::from(
        "\n\n## Additional Resources\n\nFor further learning, consider reviewing these \
         resources:\n\n",
    );
    for link in links {
        section.push_str(&format!("- {}\n", link.label));
    }

    Some(section)
}

/// Runs the full review pipeline for one request at a time.
///
/// The persona is caller-supplied configuration fixed at construction;
/// reviewing as a different persona means constructing a new
/// orchestrator. All derived state lives for a single
/// [`ReviewOrchestrator::generate_report`] invocation.
pub struct ReviewOrchestrator<G> {
    /// Backend used for the single generation call per review
    generator: G,
    /// Persona voicing every review this orchestrator produces
    persona:   Persona,
}

impl<G: ReviewGenerator> ReviewOrchestrator<G> {
    /// Creates an orchestrator voicing reviews as the given persona.
    pub fn new(generator: G, persona: Persona) -> Self {
        Self { generator, persona }
    }

    /// Returns the persona this orchestrator reviews as.
    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Validates the request and produces the review report and quality
    /// score as independent deliverables.
    ///
    /// Detection, scoring, and prompt construction are pure and complete
    /// before the generation call is issued; a generation failure aborts
    /// assembly and surfaces immediately with no retry.
    pub async fn generate_report(
        &self,
        request: &ReviewRequest,
    ) -> Result<(ReviewReport, QualityScore), ReviewError> {
        request.validate()?;

        let language = Language::detect(&request.code_snippet);
        let quality = score::score(&request.review_comments);

        let severities: Vec<SeverityLevel> = request
            .review_comments
            .iter()
            .map(|comment| SeverityLevel::classify(comment))
            .collect();
        let overall_severity = SeverityLevel::overall(&severities);

        tracing::info!(
            language = language.key(),
            severity = overall_severity.label(),
            overall = quality.overall,
            "scored submission"
        );

        let prompt = persona::build_prompt(
            self.persona,
            overall_severity,
            language,
            &request.code_snippet,
            &request.review_comments,
        );
        let body = self.generator.generate(&prompt).await?;

        let mut markdown = header(language, self.persona, &quality);
        markdown.push_str(&body);
        if let Some(section) = resource_section(request, language) {
            markdown.push_str(&section);
        }

        Ok((
            ReviewReport {
                language,
                persona: self.persona,
                markdown,
            },
            quality,
        ))
    }
}
