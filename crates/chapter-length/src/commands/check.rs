//! Check command: pass/fail validation of a chapter's length.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use chapter_length_core::{LengthCategory, measure_chapter};

use super::{read_input_file, resolve_category};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Chapter file to check (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Category the chapter must fit.
    #[arg(long, value_enum)]
    pub category: Option<LengthCategory>,
}

/// Validate a chapter. Fails when any dimension is out of bounds.
#[instrument(name = "cmd_check", skip_all, fields(file = %args.file))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    default_category: LengthCategory,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, category = ?args.category, "executing check command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let category = resolve_category(args.category, default_category);
    let report = measure_chapter(&content, category);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.pass {
            bail!("{} does not fit {:?}", args.file, category.label());
        }
    } else if report.pass {
        println!(
            "{} {} fits {:?} ({} sentences, {} words)",
            "PASS:".green(),
            args.file,
            category.label(),
            report.counts.sentences,
            report.counts.words,
        );
    } else {
        let dimensions = [
            ("sentences", Some(report.sentences)),
            ("words", Some(report.words)),
            ("paragraphs", report.paragraphs),
        ];
        let details: Vec<String> = dimensions
            .into_iter()
            .filter_map(|(name, check)| check.filter(|c| !c.is_within()).map(|c| (name, c)))
            .map(|(name, c)| format!("{name} {} not in [{}, {}]", c.count, c.min, c.max))
            .collect();
        bail!(
            "{} does not fit {:?}: {}",
            args.file,
            category.label(),
            details.join("; ")
        );
    }

    Ok(())
}
