//! Frequency command — word / n-gram ranking and lexical diversity.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosemeter_core::config::Config;
use prosemeter_core::{analyze, frequency, markdown, segment};

use super::{read_input_file, wants_markdown_strip};

/// Arguments for the `frequency` subcommand.
#[derive(Args, Debug)]
pub struct FrequencyArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Number of entries to show.
    #[arg(long)]
    pub top: Option<usize>,

    /// Shortest word eligible for ranking.
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Rank n-grams of this size instead of single words.
    #[arg(long, value_name = "N")]
    pub ngram: Option<usize>,

    /// Rank every word, including stop words.
    #[arg(long)]
    pub no_stop_words: bool,

    /// Treat the file as plain text even if it is markdown.
    #[arg(long)]
    pub raw: bool,
}

/// Rank word or n-gram frequency in a file.
#[instrument(name = "cmd_frequency", skip_all, fields(file = %args.file))]
pub fn cmd_frequency(
    args: FrequencyArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, ngram = ?args.ngram, "executing frequency command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let mut options = config.to_analysis_options();
    options.strip_markdown = wants_markdown_strip(&args.file, args.raw);
    if let Some(limit) = args.top {
        options.max_frequency_results = limit;
    }
    if let Some(length) = args.min_length {
        options.min_word_length = length;
    }
    if args.no_stop_words {
        options.stop_words.clear();
    }

    // N-gram mode ranks windows over the raw word sequence; stop word and
    // length filters do not apply to phrases.
    if let Some(n) = args.ngram {
        let prose = if options.strip_markdown {
            markdown::strip_to_prose(&content)
        } else {
            content
        };
        let words = segment::extract_words(&prose);
        let word_refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let ngrams = frequency::top_ngrams(&word_refs, n, options.max_frequency_results)
            .with_context(|| format!("failed to rank {n}-grams for {}", args.file))?;

        if global_json {
            println!("{}", serde_json::to_string_pretty(&ngrams)?);
        } else {
            println!("{}", args.file.bold());
            println!();
            for entry in &ngrams {
                println!("{:>3}. {:<40} {}", entry.rank, entry.ngram, entry.count);
            }
            if ngrams.is_empty() {
                println!("(not enough words for {n}-grams)");
            }
        }
        return Ok(());
    }

    options.include_readability = false;
    options.include_frequency = true;

    let report =
        analyze(&content, &options).with_context(|| format!("failed to analyze {}", args.file))?;
    let frequency_report = report
        .frequency
        .context("frequency section missing from report")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&frequency_report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!();
    for entry in &frequency_report.top_words {
        println!("{:>3}. {:<24} {}", entry.rank, entry.word, entry.count);
    }
    if frequency_report.top_words.is_empty() {
        println!("(no words ranked)");
    }

    let diversity = &frequency_report.diversity;
    println!(
        "\n{} {:.2} ({}, {} unique / {} total)",
        "Diversity:".cyan(),
        diversity.ratio,
        diversity.label,
        diversity.unique_words,
        diversity.total_words,
    );

    Ok(())
}
