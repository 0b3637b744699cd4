//! Enforce command: accept, truncate, or flag a generated chapter.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use chapter_length_core::{EnforcementAction, LengthCategory, enforce_chapter_length};

use super::{read_input_file, resolve_category, write_output};

/// Arguments for the `enforce` subcommand.
#[derive(Args, Debug)]
pub struct EnforceArgs {
    /// Generated chapter file (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Category the chapter was generated for.
    #[arg(long, value_enum)]
    pub category: Option<LengthCategory>,

    /// Write the final chapter here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

/// Validate a chapter and truncate it if it runs long.
///
/// The final text is always written. Exits non-zero when it still misses
/// the category, which means the chapter should be regenerated.
#[instrument(name = "cmd_enforce", skip_all, fields(file = %args.file))]
pub fn cmd_enforce(
    args: EnforceArgs,
    global_json: bool,
    default_category: LengthCategory,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, category = ?args.category, "executing enforce command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let category = resolve_category(args.category, default_category);
    let enforcement = enforce_chapter_length(&content, category);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&enforcement)?);
        if let Some(ref path) = args.output {
            write_output(Some(path.as_path()), &enforcement.content)?;
        }
    } else {
        write_output(args.output.as_deref(), &enforcement.content)?;
        let action = match enforcement.action {
            EnforcementAction::Accepted => "accepted".green().to_string(),
            EnforcementAction::Truncated => "truncated".yellow().to_string(),
            EnforcementAction::Unchanged => "unchanged".dimmed().to_string(),
        };
        eprintln!("{}: {action}", args.file);
    }

    if enforcement.needs_regeneration() {
        bail!(
            "{} still misses {:?} ({}); regenerate the chapter",
            args.file,
            category.label(),
            enforcement.report.violations().join(", ")
        );
    }

    Ok(())
}
