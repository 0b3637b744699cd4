//! Measure command: counts and per-dimension report.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use chapter_length_core::validate::{BoundStatus, DimensionCheck, LengthReport};
use chapter_length_core::{LengthCategory, measure_chapter};

use super::{read_input_file, resolve_category};

/// Arguments for the `measure` subcommand.
#[derive(Args, Debug)]
pub struct MeasureArgs {
    /// Chapter file to measure (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Category to measure against.
    #[arg(long, value_enum)]
    pub category: Option<LengthCategory>,
}

/// Measure a chapter against a category.
#[instrument(name = "cmd_measure", skip_all, fields(file = %args.file))]
pub fn cmd_measure(
    args: MeasureArgs,
    global_json: bool,
    default_category: LengthCategory,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, category = ?args.category, "executing measure command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let category = resolve_category(args.category, default_category);
    let report = measure_chapter(&content, category);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    Ok(())
}

/// Print a report as aligned human-readable lines.
fn print_report(file: &Utf8Path, report: &LengthReport) {
    println!("{} ({})", file.bold(), report.category.cyan());
    print_dimension("Sentences", &report.sentences);
    print_dimension("Words", &report.words);
    match report.paragraphs {
        Some(ref check) => print_dimension("Paragraphs", check),
        None => println!(
            "  {:<11}{:>5}  {}",
            "Paragraphs".dimmed(),
            report.counts.paragraphs,
            "(not bounded)".dimmed()
        ),
    }
}

fn print_dimension(label: &str, check: &DimensionCheck) {
    let range = format!("[{}, {}]", check.min, check.max);
    let status = match check.status {
        BoundStatus::Within => "ok".green().to_string(),
        BoundStatus::Under => "under".yellow().to_string(),
        BoundStatus::Over => "over".red().to_string(),
    };
    println!(
        "  {:<11}{:>5}  {:<11}{}",
        label.dimmed(),
        check.count,
        range,
        status
    );
}
