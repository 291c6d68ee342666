#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # empath
//!
//! A command-line reviewer that turns blunt code review comments into
//! empathetic, educational feedback.
//!
//! Review requests are JSON documents with two keys: `code_snippet` (the
//! code under review) and `review_comments` (a non-empty list of the
//! original comments). `empath review` rewrites the comments through an
//! OpenAI-compatible endpoint (`OPENAI_API_KEY` required); `empath score`
//! analyzes the submission without any network call.

use std::io::Read;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use empath::{
    generate::OpenAiGenerator,
    language::Language,
    persona::Persona,
    report::{ReviewOrchestrator, ReviewRequest},
    score,
};
use self_update::cargo_crate_version;
use tabled::{
    Table,
    settings::{Panel, Style},
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Updates binary based on github releases
fn update() -> Result<()> {
    self_update::backends::github::Update::configure()
        .repo_owner("dhruvdh")
        .repo_name("empath")
        .bin_name("empath")
        .no_confirm(true)
        .show_download_progress(true)
        .show_output(false)
        .current_version(cargo_crate_version!())
        .build()?
        .update()?;

    eprintln!("Update done!");
    Ok(())
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Generate an empathetic review
    Review(String, Option<String>),
    /// Score a submission without generating narrative feedback
    Score(String),
    /// List supported languages
    Languages,
    /// Update the command
    Update,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the request source
    fn i() -> impl Parser<String> {
        positional("INPUT").help("Path or URL of the review request JSON, or `-` for stdin")
    }

    /// parses the persona selection
    fn p() -> impl Parser<Option<String>> {
        long("persona")
            .help("Reviewer persona: senior_developer, tech_lead, pair_programming, or mentor")
            .argument::<String>("PERSONA")
            .optional()
    }

    let review = construct!(Cmd::Review(i(), p()))
        .to_options()
        .command("review")
        .help("Generate an empathetic review report");

    let score = construct!(Cmd::Score(i()))
        .to_options()
        .command("score")
        .help("Analyze code quality without generating feedback");

    let languages = pure(Cmd::Languages)
        .to_options()
        .command("languages")
        .help("List the languages the detector recognizes");

    let update = pure(Cmd::Update)
        .to_options()
        .command("update")
        .help("Update the empath command");

    let cmd = construct!([review, score, languages, update]);

    cmd.to_options()
        .descr("Empathetic code review feedback")
        .run()
}

/// Reads the request document from a file path, URL, or stdin (`-`).
async fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Could not read request from stdin")?;
        return Ok(buffer);
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        return reqwest::get(source)
            .await
            .with_context(|| format!("Cannot get url: {source}"))?
            .text()
            .await
            .with_context(|| format!("Could not parse the response from {source} to text."));
    }

    std::fs::read_to_string(source).with_context(|| format!("Could not read {source}"))
}

/// Renders a quality score as a bordered table.
fn score_table(quality: &empath::QualityScore) -> String {
    Table::new(quality.rows())
        .with(Panel::header("Quality Score"))
        .with(Style::modern())
        .to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Review(input, persona) => {
            let raw = read_input(&input).await?;
            let request = ReviewRequest::from_json(&raw)?;
            let persona = persona
                .map(|value| Persona::parse(&value))
                .unwrap_or_default();

            let generator = OpenAiGenerator::from_env()?;
            let orchestrator = ReviewOrchestrator::new(generator, persona);
            let (report, quality) = orchestrator.generate_report(&request).await?;

            println!("{report}");
            eprintln!("{}", score_table(&quality));
        }
        Cmd::Score(input) => {
            let raw = read_input(&input).await?;
            let request = ReviewRequest::from_json(&raw)?;
            let analysis = score::analyze(&request.code_snippet, &request.review_comments);

            println!(
                "Detected language: {}",
                analysis.language.key().bright_blue()
            );
            println!("{}", score_table(&analysis.quality_metrics));
            println!(
                "{}",
                Table::new(analysis.severity_breakdown.rows())
                    .with(Panel::header("Severity Breakdown"))
                    .with(Panel::footer(format!(
                        "Total: {} comments",
                        analysis.total_issues
                    )))
                    .with(Style::modern())
            );
        }
        Cmd::Languages => {
            for language in Language::ALL {
                println!("{}", language.key());
            }
        }
        Cmd::Update => {
            match tokio::task::spawn_blocking(update).await? {
                Ok(_) => {}
                Err(e) => eprintln!("{e}"),
            };
        }
    };

    Ok(())
}
