//! Readability command — formula scores and the consensus grade.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use prosemeter_core::analyze;
use prosemeter_core::config::Config;

use super::{read_input_file, wants_markdown_strip};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Maximum acceptable consensus grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Treat the file as plain text even if it is markdown.
    #[arg(long)]
    pub raw: bool,
}

/// Score readability of a file across the five grade formulas.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let mut options = config.to_analysis_options();
    options.strip_markdown = wants_markdown_strip(&args.file, args.raw);
    options.include_frequency = false;

    let report = analyze(&content, &options)
        .with_context(|| format!("failed to score readability of {}", args.file))?;
    let readability = report
        .readability
        .context("readability section missing from report")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&readability)?);
        return Ok(());
    }

    let Some(consensus) = readability.consensus else {
        println!("{} has no words to score", args.file);
        return Ok(());
    };

    let max_grade = args.max_grade.or(config.max_grade);
    if let Some(max) = max_grade {
        if consensus.average > max {
            bail!(
                "{} scores {:.1} (max: {:.1}). Simplify sentences or reduce jargon.",
                args.file,
                consensus.average,
                max,
            );
        }
        println!(
            "{} {} scores {:.1} (max: {:.1})",
            "PASS:".green(),
            args.file,
            consensus.average,
            max,
        );
    } else {
        for score in [
            &readability.flesch_reading_ease,
            &readability.flesch_kincaid_grade,
            &readability.gunning_fog,
            &readability.smog,
            &readability.coleman_liau,
            &readability.automated_readability_index,
        ]
        .into_iter()
        .flatten()
        {
            println!("{:<30} {:>7.2}  {}", score.name, score.rounded, score.label);
        }
        println!(
            "\n{} {:.1} (range {:.0}-{:.0}, {} formulas)",
            "Consensus grade:".bold(),
            consensus.average,
            consensus.min,
            consensus.max,
            consensus.grades_used,
        );
    }

    Ok(())
}
