use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use empath::{
    generate::{GenerationError, ReviewGenerator},
    language::Language,
    persona::{Persona, ReviewPrompt},
    report::{ReviewError, ReviewOrchestrator, ReviewRequest},
};

/// Generator that returns a fixed body, standing in for the external
/// service.
struct FixedGenerator {
    body: &'static str,
}

#[async_trait]
impl ReviewGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &ReviewPrompt) -> Result<String, GenerationError> {
        Ok(self.body.to_string())
    }
}

/// Generator that always fails.
struct FailingGenerator;

#[async_trait]
impl ReviewGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &ReviewPrompt) -> Result<String, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }
}

/// Generator that records the prompt it was handed.
struct CapturingGenerator {
    seen: Arc<Mutex<Option<ReviewPrompt>>>,
}

#[async_trait]
impl ReviewGenerator for CapturingGenerator {
    async fn generate(&self, prompt: &ReviewPrompt) -> Result<String, GenerationError> {
        *self.seen.lock().expect("lock") = Some(prompt.clone());
        Ok("feedback body".to_string())
    }
}

fn python_request() -> ReviewRequest {
    ReviewRequest::builder()
        .code_snippet("def get_users(data):\n    if data.active == True:\n        return data")
        .review_comments(vec![
            "This is inefficient.".to_string(),
            "Variable 'u' is a bad name.".to_string(),
            "Boolean comparison '== True' is redundant.".to_string(),
        ])
        .build()
}

#[tokio::test]
async fn report_carries_header_body_and_resources() {
    let orchestrator = ReviewOrchestrator::new(
        FixedGenerator {
            body: "### Analysis of Comment\n\ngenerated feedback",
        },
        Persona::SeniorDeveloper,
    );

    let (report, quality) = orchestrator
        .generate_report(&python_request())
        .await
        .expect("generate report");

    assert_eq!(report.language(), Language::Python);
    assert!(report.markdown().starts_with("# 📝 Empathetic Code Review Report"));
    assert!(report.markdown().contains("**Language:** Python"));
    assert!(report.markdown().contains("**Reviewer Persona:** Senior Developer"));
    assert!(
        report
            .markdown()
            .contains(&format!("**Overall Quality Score:** {:.1}/10", quality.overall))
    );
    assert!(report.markdown().contains("generated feedback"));
    assert!(report.markdown().contains("## Additional Resources"));
    assert!(report.markdown().contains("PEP 8 - Naming Conventions"));
    assert!(report.markdown().contains("Python Performance Tips"));

    assert!(quality.readability < 7.0);
    assert!(quality.overall < 7.0);
}

#[tokio::test]
async fn resource_links_are_deduplicated_by_label() {
    // every comment re-triggers the style link through the `== True` in
    // the code; the report must list it once
    let orchestrator = ReviewOrchestrator::new(FixedGenerator { body: "body" }, Persona::Mentor);

    let (report, _) = orchestrator
        .generate_report(&python_request())
        .await
        .expect("generate report");

    let style_links = report
        .markdown()
        .matches("[PEP 8 - Style Guide](https://peps.python.org/pep-0008/)")
        .count();
    assert_eq!(style_links, 1);
}

#[tokio::test]
async fn javascript_snippets_detect_as_javascript() {
    let request = ReviewRequest::builder()
        .code_snippet("function add(a, b) {\n  const sum = a + b;\n  return sum;\n}")
        .review_comments(vec!["Use const/let instead of var.".to_string()])
        .build();
    let orchestrator = ReviewOrchestrator::new(FixedGenerator { body: "body" }, Persona::TechLead);

    let (report, _) = orchestrator
        .generate_report(&request)
        .await
        .expect("generate report");

    assert_eq!(report.language(), Language::Javascript);
    assert!(report.markdown().contains("**Language:** Javascript"));
    assert!(report.markdown().contains("**Reviewer Persona:** Tech Lead"));
}

#[tokio::test]
async fn empty_comment_list_is_rejected_before_generation() {
    let request = ReviewRequest::builder()
        .code_snippet("def f():\n    pass")
        .review_comments(Vec::<String>::new())
        .build();
    let orchestrator = ReviewOrchestrator::new(FailingGenerator, Persona::SeniorDeveloper);

    let err = orchestrator
        .generate_report(&request)
        .await
        .expect_err("validation must fail");

    assert!(matches!(err, ReviewError::InvalidInput(_)));
}

#[tokio::test]
async fn empty_code_snippet_is_rejected() {
    let request = ReviewRequest::builder()
        .code_snippet("   ")
        .review_comments(vec!["Looks fine.".to_string()])
        .build();
    let orchestrator = ReviewOrchestrator::new(FixedGenerator { body: "body" }, Persona::Mentor);

    let err = orchestrator
        .generate_report(&request)
        .await
        .expect_err("validation must fail");

    assert!(matches!(err, ReviewError::InvalidInput(_)));
}

#[tokio::test]
async fn generation_failures_surface_as_generation_errors() {
    let orchestrator = ReviewOrchestrator::new(FailingGenerator, Persona::SeniorDeveloper);

    let err = orchestrator
        .generate_report(&python_request())
        .await
        .expect_err("generation must fail");

    assert!(matches!(
        err,
        ReviewError::Generation(GenerationError::EmptyResponse)
    ));
}

#[tokio::test]
async fn identical_requests_produce_identical_reports() {
    let orchestrator = ReviewOrchestrator::new(FixedGenerator { body: "body" }, Persona::Mentor);
    let request = python_request();

    let (first_report, first_quality) = orchestrator
        .generate_report(&request)
        .await
        .expect("first run");
    let (second_report, second_quality) = orchestrator
        .generate_report(&request)
        .await
        .expect("second run");

    assert_eq!(first_report.markdown(), second_report.markdown());
    assert_eq!(first_quality, second_quality);
}

#[tokio::test]
async fn prompt_is_conditioned_on_persona_severity_and_language() {
    let seen = Arc::new(Mutex::new(None));
    let generator = CapturingGenerator { seen: seen.clone() };
    let orchestrator = ReviewOrchestrator::new(generator, Persona::Mentor);

    // two harsh comments out of three make the batch severity harsh
    let request = ReviewRequest::builder()
        .code_snippet("def f():\n    pass")
        .review_comments(vec![
            "This is terrible.".to_string(),
            "Completely wrong.".to_string(),
            "Maybe consider a helper.".to_string(),
        ])
        .build();

    orchestrator
        .generate_report(&request)
        .await
        .expect("generate report");

    let prompt = seen
        .lock()
        .expect("lock")
        .clone()
        .expect("prompt captured");
    assert!(prompt.system.contains("patient, encouraging mentor"));
    assert!(prompt.system.contains("softening harsh language"));
    assert!(prompt.system.contains("reviewing PYTHON code"));
    assert!(prompt.user.contains("```python"));
    assert!(prompt.user.contains("def f():"));
    assert!(prompt.user.contains("\"This is terrible.\""));
    assert!(prompt.user.contains("Positive Rephrasing"));
}

#[test]
fn valid_json_parses_into_a_request() {
    let request = ReviewRequest::from_json(
        r#"{"code_snippet": "def f():\n    pass", "review_comments": ["Looks fine."]}"#,
    )
    .expect("parse request");

    assert_eq!(request.review_comments.len(), 1);
}

#[test]
fn malformed_json_is_an_input_format_error() {
    let err = ReviewRequest::from_json("{not json").expect_err("must fail");
    assert!(matches!(err, ReviewError::InputFormat(_)));
}

#[test]
fn missing_keys_are_invalid_input() {
    let err = ReviewRequest::from_json(r#"{"code_snippet": "def f(): pass"}"#)
        .expect_err("must fail");
    assert!(matches!(err, ReviewError::InvalidInput(_)));
}

#[test]
fn wrong_typed_comments_are_invalid_input() {
    let err = ReviewRequest::from_json(
        r#"{"code_snippet": "def f(): pass", "review_comments": "not a list"}"#,
    )
    .expect_err("must fail");
    assert!(matches!(err, ReviewError::InvalidInput(_)));
}

#[test]
fn empty_comment_list_is_invalid_input() {
    let err = ReviewRequest::from_json(
        r#"{"code_snippet": "def f(): pass", "review_comments": []}"#,
    )
    .expect_err("must fail");
    assert!(matches!(err, ReviewError::InvalidInput(_)));
}
