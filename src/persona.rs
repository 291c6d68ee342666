use serde::{Deserialize, Serialize};

use crate::{language::Language, severity::SeverityLevel};

/// A configured tone/voice profile applied uniformly to one generated
/// review. Selected by the caller and held for the duration of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Pragmatic, experience-driven voice; the fallback profile
    #[default]
    SeniorDeveloper,
    /// Team-oriented voice weighing standards and project constraints
    TechLead,
    /// Conversational, collaborative voice
    PairProgramming,
    /// Encouraging, teaching-focused voice
    Mentor,
}

impl Persona {
    /// Parses a persona key.
    ///
    /// Unrecognized values fall back to the senior developer profile with
    /// a warning rather than failing.
    pub fn parse(value: &str) -> Persona {
        match value.trim().to_lowercase().as_str() {
            "senior_developer" => Persona::SeniorDeveloper,
            "tech_lead" => Persona::TechLead,
            "pair_programming" => Persona::PairProgramming,
            "mentor" => Persona::Mentor,
            other => {
                tracing::warn!("Unknown persona `{other}`, using senior_developer");
                Persona::SeniorDeveloper
            }
        }
    }

    /// Canonical snake_case key.
    pub fn key(&self) -> &'static str {
        match self {
            Persona::SeniorDeveloper => "senior_developer",
            Persona::TechLead => "tech_lead",
            Persona::PairProgramming => "pair_programming",
            Persona::Mentor => "mentor",
        }
    }

    /// Human-readable name used in the report header.
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::SeniorDeveloper => "Senior Developer",
            Persona::TechLead => "Tech Lead",
            Persona::PairProgramming => "Pair Programming",
            Persona::Mentor => "Mentor",
        }
    }

    /// Tone and voice instructions for this persona.
    fn context(&self) -> &'static str {
        match self {
            Persona::SeniorDeveloper => include_str!("prompts/senior_developer.md"),
            Persona::TechLead => include_str!("prompts/tech_lead.md"),
            Persona::PairProgramming => include_str!("prompts/pair_programming.md"),
            Persona::Mentor => include_str!("prompts/mentor.md"),
        }
    }
}

/// Severity-specific amplifier appended to the system instruction.
fn severity_adjustment(severity: SeverityLevel) -> &'static str {
    match severity {
        SeverityLevel::Harsh => {
            " Pay special attention to softening harsh language and being extra encouraging. The \
             original feedback may have been blunt or discouraging, so focus on building the \
             developer's confidence while still conveying the technical improvement needed."
        }
        SeverityLevel::Moderate => {
            " Maintain a balanced, professional tone while being supportive and educational."
        }
        SeverityLevel::Neutral => {
            " The original feedback was already fairly neutral, so focus on making it more \
             educational and adding the 'why' behind suggestions."
        }
    }
}

/// The full request payload handed to the external generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPrompt {
    /// Persona, severity, and language framing for the system turn
    pub system: String,
    /// Code block, serialized comments, and output template for the user
    /// turn
    pub user:   String,
}

/// Builds the system instruction conditioning the generation call:
/// persona context, language framing, the authoring principles, and a
/// severity amplifier for the comment batch.
pub fn system_message(persona: Persona, severity: SeverityLevel, language: Language) -> String {
    let base = format!(
        include_str!("prompts/system_message.md"),
        PERSONA_CONTEXT = persona.context().trim_end(),
        LANGUAGE = language.upper(),
    );

    format!("{}{}", base.trim_end(), severity_adjustment(severity))
}

/// Builds the user instruction containing the fenced code block, the
/// JSON-serialized original comments, and the required markdown section
/// template.
pub fn user_message(code_snippet: &str, comments: &[String], language: Language) -> String {
    let comments_json =
        serde_json::to_string_pretty(comments).expect("Failed to serialize comments array");

    format!(
        include_str!("prompts/user_message.md"),
        LANGUAGE = language.upper(),
        LANGUAGE_KEY = language.key(),
        CODE = code_snippet,
        COMMENTS = comments_json,
    )
}

/// Assembles the complete prompt for one review.
pub fn build_prompt(
    persona: Persona,
    severity: SeverityLevel,
    language: Language,
    code_snippet: &str,
    comments: &[String],
) -> ReviewPrompt {
    ReviewPrompt {
        system: system_message(persona, severity, language),
        user:   user_message(code_snippet, comments, language),
    }
}
