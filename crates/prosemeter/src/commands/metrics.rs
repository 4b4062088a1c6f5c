//! Metrics command — document counts and averages.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosemeter_core::analyze;
use prosemeter_core::config::Config;

use super::{read_input_file, wants_markdown_strip};

/// Arguments for the `metrics` subcommand.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Treat the file as plain text even if it is markdown.
    #[arg(long)]
    pub raw: bool,
}

/// Show the raw counts and averages for a file.
#[instrument(name = "cmd_metrics", skip_all, fields(file = %args.file))]
pub fn cmd_metrics(
    args: MetricsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing metrics command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let mut options = config.to_analysis_options();
    options.strip_markdown = wants_markdown_strip(&args.file, args.raw);
    options.include_readability = false;
    options.include_frequency = false;

    let report = analyze(&content, &options)
        .with_context(|| format!("failed to compute metrics for {}", args.file))?;
    let metrics = report.metrics;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!();
    println!("{:<24} {}", "Words".dimmed(), metrics.word_count);
    println!("{:<24} {}", "Sentences".dimmed(), metrics.sentence_count);
    println!("{:<24} {}", "Paragraphs".dimmed(), metrics.paragraph_count);
    println!("{:<24} {}", "Characters".dimmed(), metrics.character_count);
    println!("{:<24} {}", "Syllables".dimmed(), metrics.syllable_count);
    println!(
        "{:<24} {}",
        "Complex words".dimmed(),
        metrics.complex_word_count
    );
    println!("{:<24} {}", "Long words".dimmed(), metrics.long_word_count);
    println!();
    println!(
        "{:<24} {:.2}",
        "Words/sentence".dimmed(),
        metrics.avg_words_per_sentence
    );
    println!(
        "{:<24} {:.2}",
        "Syllables/word".dimmed(),
        metrics.avg_syllables_per_word
    );
    println!(
        "{:<24} {:.2}",
        "Characters/word".dimmed(),
        metrics.avg_characters_per_word
    );
    println!(
        "{:<24} {:.2}%",
        "Complex words".dimmed(),
        metrics.percentage_complex_words
    );

    Ok(())
}
