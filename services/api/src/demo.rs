use crate::infra::{build_scorer, parse_duration, read_transcript};
use clap::Args;
use intro_scorer::config::AppConfig;
use intro_scorer::error::AppError;
use intro_scorer::rubric::{CriterionResult, Measurement, ScoreResult};
use intro_scorer::telemetry;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

const DEMO_TRANSCRIPT: &str = "Hello everyone, myself Muskan, studying in class 8th B section \
from Christ Public School. I am 13 years old. I live with my family. There are 3 people in my \
family, me, my mother and my father. One special thing about my family is that they are very \
kind hearted to everyone and soft spoken. One thing I really enjoy is play, playing cricket \
and taking wickets. A fun fact about me is that I see in mirror and talk by myself. One thing \
people don't know about me is that I once stole a toy from one of my cousin. My favorite \
subject is science because it is very interesting. Through science I can explore the whole \
world and make the discoveries and improve the lives of others. Thank you for listening.";

const DEMO_DURATION_SECONDS: f64 = 52.0;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Read the transcript from this file
    #[arg(long, conflicts_with = "text")]
    pub(crate) file: Option<PathBuf>,
    /// Transcript passed inline. Falls back to stdin when neither --file nor --text is set.
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Speaking duration in seconds
    #[arg(long)]
    pub(crate) duration: Option<String>,
    /// Print the JSON document instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Write the JSON document to this path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the JSON document instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        file,
        text,
        duration,
        json,
        output,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let transcript = read_transcript(file, text)?;
    let duration_seconds = parse_duration(duration.as_deref());
    score_and_render(&config, &transcript, duration_seconds, json, output).await
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if let Some(banner) = demo_banner(args.json) {
        println!("{banner}");
    }
    score_and_render(
        &config,
        DEMO_TRANSCRIPT,
        Some(DEMO_DURATION_SECONDS),
        args.json,
        None,
    )
    .await
}

/// Heading printed above the text report. JSON output stays a bare document.
fn demo_banner(json: bool) -> Option<String> {
    (!json).then(|| format!("Self-introduction scoring demo ({DEMO_DURATION_SECONDS} s sample)"))
}

async fn score_and_render(
    config: &AppConfig,
    transcript: &str,
    duration_seconds: Option<f64>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let scorer = build_scorer(&config.scoring);
    let outcome = scorer.score(transcript, duration_seconds).await;
    scorer.close().await;
    let result = outcome?;

    if json {
        println!("{}", result.to_json_pretty()?);
    } else {
        print!("{}", render_score_report(&result));
    }

    if let Some(path) = output {
        std::fs::write(&path, result.to_json_pretty()?)?;
        info!(path = %path.display(), "score document written");
    }

    Ok(())
}

pub(crate) fn render_score_report(result: &ScoreResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Overall score: {} / 100", result.overall_score);
    let _ = writeln!(out, "Word count: {}", result.word_count);

    let _ = writeln!(out, "\nCategory snapshot");
    for criterion in &result.criteria {
        let suffix = if criterion.scored { "" } else { " (not scored)" };
        let _ = writeln!(
            out,
            "- {}: {} / {}{}",
            criterion.name, criterion.final_score, criterion.max_score, suffix
        );
    }

    let _ = writeln!(out, "\nCriterion feedback");
    for criterion in &result.criteria {
        render_criterion(&mut out, criterion);
    }

    if result.degraded {
        let _ = writeln!(out, "\nDegraded sub-scores");
        for diagnostic in &result.diagnostics {
            let _ = writeln!(
                out,
                "- {} / {} via {}: {}",
                diagnostic.category.label(),
                diagnostic.sub_item,
                diagnostic.collaborator,
                diagnostic.message
            );
        }
    }

    out
}

fn render_criterion(out: &mut String, criterion: &CriterionResult) {
    let _ = writeln!(out, "{}", criterion.name);
    for sub in &criterion.subcomponents {
        let score = sub
            .score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  * {}: {} / {} - {}",
            sub.name, score, sub.max_score, sub.feedback
        );

        if let Measurement::KeywordPresence {
            must_have_present,
            good_to_have_present,
        } = &sub.measurement
        {
            let missing: Vec<&str> = must_have_present
                .iter()
                .chain(good_to_have_present.iter())
                .filter(|(_, present)| !**present)
                .map(|(topic, _)| *topic)
                .collect();
            if !missing.is_empty() {
                let _ = writeln!(out, "    missing topics: {}", missing.join(", "));
            }
        }
    }
}
