//! # empath
//!
//! Turns a code snippet and a list of blunt human review comments into an
//! empathetic, educational review, augmented with a numeric quality score
//! and contextual documentation links.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-sourced configuration for the generation backend
pub mod config;
/// For invoking the external text-generation service
pub mod generate;
/// For classifying code snippets into a supported language
pub mod language;
/// For persona-conditioned prompt construction
pub mod persona;
/// For validating requests and assembling the final review report
pub mod report;
/// For selecting relevant documentation links per comment
pub mod resources;
/// For scoring code quality from review comments
pub mod score;
/// For classifying the tone of review comments
pub mod severity;

pub use language::Language;
pub use persona::Persona;
pub use report::{ReviewError, ReviewOrchestrator, ReviewReport, ReviewRequest};
pub use score::QualityScore;
pub use severity::SeverityLevel;
