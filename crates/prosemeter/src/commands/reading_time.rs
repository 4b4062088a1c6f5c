//! Reading time command — per-preset estimates.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosemeter_core::analyze;
use prosemeter_core::config::Config;

use super::{read_input_file, wants_markdown_strip};

/// Arguments for the `reading-time` subcommand.
#[derive(Args, Debug)]
pub struct ReadingTimeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Treat the file as plain text even if it is markdown.
    #[arg(long)]
    pub raw: bool,
}

/// Estimate how long a file takes to read at each configured speed.
#[instrument(name = "cmd_reading_time", skip_all, fields(file = %args.file))]
pub fn cmd_reading_time(
    args: ReadingTimeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing reading-time command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let mut options = config.to_analysis_options();
    options.strip_markdown = wants_markdown_strip(&args.file, args.raw);
    options.include_readability = false;
    options.include_frequency = false;

    let report = analyze(&content, &options)
        .with_context(|| format!("failed to estimate reading time for {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report.reading_time)?);
        return Ok(());
    }

    println!("{} ({} words)", args.file.bold(), report.metrics.word_count);
    println!();
    for (name, estimate) in &report.reading_time {
        let wpm = options
            .reading_speeds
            .iter()
            .find(|(preset, _)| preset == name)
            .map(|(_, wpm)| *wpm);
        if let Some(wpm) = wpm {
            println!("{:<10} {:>8}  ({wpm} wpm)", name.dimmed(), estimate.formatted);
        } else {
            println!("{:<10} {:>8}", name.dimmed(), estimate.formatted);
        }
    }

    Ok(())
}
