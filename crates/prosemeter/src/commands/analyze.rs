//! Analyze command — the full prose analysis report.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosemeter_core::analyze;
use prosemeter_core::config::Config;

use super::{read_input_file, wants_markdown_strip};

/// Check names accepted by `--checks`.
const CHECK_NAMES: &[&str] = &["readability", "frequency"];

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Checks to run (comma-separated: readability, frequency). Omit for all.
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<String>>,

    /// Maximum acceptable consensus grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Number of entries in the word frequency table.
    #[arg(long)]
    pub top_words: Option<usize>,

    /// Shortest word eligible for frequency ranking.
    #[arg(long)]
    pub min_word_length: Option<usize>,

    /// Treat the file as plain text even if it is markdown.
    #[arg(long)]
    pub raw: bool,
}

/// Run the full prose analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, checks = ?args.checks, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let mut options = config.to_analysis_options();
    options.strip_markdown = wants_markdown_strip(&args.file, args.raw);
    if let Some(ref checks) = args.checks {
        for check in checks {
            if !CHECK_NAMES.contains(&check.as_str()) {
                bail!("unknown check: {check} (valid: {})", CHECK_NAMES.join(", "));
            }
        }
        options.include_readability = checks.iter().any(|c| c == "readability");
        options.include_frequency = checks.iter().any(|c| c == "frequency");
    }
    if let Some(limit) = args.top_words {
        options.max_frequency_results = limit;
    }
    if let Some(length) = args.min_word_length {
        options.min_word_length = length;
    }

    let report =
        analyze(&content, &options).with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — section by section
    println!("{}", args.file.bold());

    let metrics = &report.metrics;
    println!(
        "\n  {} {} words, {} sentences, {} paragraphs",
        "Metrics:".cyan(),
        metrics.word_count,
        metrics.sentence_count,
        metrics.paragraph_count,
    );

    if let Some(ref readability) = report.readability {
        if let Some(ref flesch) = readability.flesch_reading_ease {
            println!(
                "\n  {} {:.1} ({})",
                "Reading ease:".cyan(),
                flesch.rounded,
                flesch.label,
            );
        }
        if let Some(ref consensus) = readability.consensus {
            println!(
                "\n  {} Grade {:.1} (range {:.0}-{:.0}, {} formulas)",
                "Consensus:".cyan(),
                consensus.average,
                consensus.min,
                consensus.max,
                consensus.grades_used,
            );
        }
    }

    if let Some(ref frequency) = report.frequency {
        if !frequency.top_words.is_empty() {
            let top: Vec<_> = frequency
                .top_words
                .iter()
                .take(5)
                .map(|w| format!("\"{}\" ({})", w.word, w.count))
                .collect();
            println!("\n  {} {}", "Top words:".cyan(), top.join(", "));
        }
        println!(
            "\n  {} {:.2} ({}, {} unique / {} total)",
            "Diversity:".cyan(),
            frequency.diversity.ratio,
            frequency.diversity.label,
            frequency.diversity.unique_words,
            frequency.diversity.total_words,
        );
    }

    if !report.reading_time.is_empty() {
        let times: Vec<_> = report
            .reading_time
            .iter()
            .map(|(name, estimate)| format!("{name} {}", estimate.formatted))
            .collect();
        println!("\n  {} {}", "Reading time:".cyan(), times.join(", "));
    }

    // Consensus grade gate
    let max_grade = args.max_grade.or(config.max_grade);
    if let (Some(max), Some(consensus)) = (
        max_grade,
        report
            .readability
            .as_ref()
            .and_then(|r| r.consensus.as_ref()),
    ) && consensus.average > max
    {
        bail!(
            "{} consensus grade {:.1} exceeds maximum {:.1}. Simplify sentences or shorten words.",
            args.file,
            consensus.average,
            max,
        );
    }

    Ok(())
}
