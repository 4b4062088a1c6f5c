//! Compare command — vocabulary overlap between two files.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use prosemeter_core::{frequency, markdown, segment};

use super::{read_input_file, wants_markdown_strip};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First file.
    pub file_a: Utf8PathBuf,

    /// Second file.
    pub file_b: Utf8PathBuf,

    /// Treat the files as plain text even if they are markdown.
    #[arg(long)]
    pub raw: bool,
}

/// Vocabulary overlap between two documents.
#[derive(Debug, Serialize)]
struct CompareReport {
    file_a: String,
    file_b: String,
    unique_words_a: usize,
    unique_words_b: usize,
    shared_words: usize,
    jaccard_similarity: f64,
    overlap_coefficient: f64,
}

/// Compare the vocabularies of two files.
#[instrument(name = "cmd_compare", skip_all, fields(a = %args.file_a, b = %args.file_b))]
pub fn cmd_compare(
    args: CompareArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(a = %args.file_a, b = %args.file_b, "executing compare command");

    let content_a = read_input_file(&args.file_a, max_input_bytes)?;
    let content_b = read_input_file(&args.file_b, max_input_bytes)?;

    let words_a = file_words(&args.file_a, content_a, args.raw);
    let words_b = file_words(&args.file_b, content_b, args.raw);

    let vocab_a: HashSet<&str> = words_a.iter().map(String::as_str).collect();
    let vocab_b: HashSet<&str> = words_b.iter().map(String::as_str).collect();

    let report = CompareReport {
        file_a: args.file_a.to_string(),
        file_b: args.file_b.to_string(),
        unique_words_a: vocab_a.len(),
        unique_words_b: vocab_b.len(),
        shared_words: vocab_a.intersection(&vocab_b).count(),
        jaccard_similarity: frequency::jaccard_similarity(&vocab_a, &vocab_b),
        overlap_coefficient: frequency::overlap_coefficient(&vocab_a, &vocab_b),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} vs {}", args.file_a.bold(), args.file_b.bold());
    println!();
    println!(
        "{:<22} {}",
        "Unique words (a)".dimmed(),
        report.unique_words_a
    );
    println!(
        "{:<22} {}",
        "Unique words (b)".dimmed(),
        report.unique_words_b
    );
    println!("{:<22} {}", "Shared words".dimmed(), report.shared_words);
    println!();
    println!(
        "{:<22} {:.3}",
        "Jaccard similarity".dimmed(),
        report.jaccard_similarity
    );
    println!(
        "{:<22} {:.3}",
        "Overlap coefficient".dimmed(),
        report.overlap_coefficient
    );

    Ok(())
}

/// Extract the normalized word sequence from a file's content.
fn file_words(path: &Utf8Path, content: String, raw: bool) -> Vec<String> {
    let prose = if wants_markdown_strip(path, raw) {
        markdown::strip_to_prose(&content)
    } else {
        content
    };
    segment::extract_words(&prose)
}
