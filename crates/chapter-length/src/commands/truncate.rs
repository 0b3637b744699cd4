//! Truncate command: shrink a chapter to its category's upper bounds.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, info, instrument};

use chapter_length_core::{LengthCategory, truncate_with_outcome};

use super::{read_input_file, resolve_category, write_output};

/// Arguments for the `truncate` subcommand.
#[derive(Args, Debug)]
pub struct TruncateArgs {
    /// Chapter file to truncate (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Category whose upper bounds to enforce.
    #[arg(long, value_enum)]
    pub category: Option<LengthCategory>,

    /// Write the truncated text here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

/// Truncate a chapter. Text within bounds passes through trimmed.
#[instrument(name = "cmd_truncate", skip_all, fields(file = %args.file))]
pub fn cmd_truncate(
    args: TruncateArgs,
    global_json: bool,
    default_category: LengthCategory,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, category = ?args.category, "executing truncate command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let category = resolve_category(args.category, default_category);
    let outcome = truncate_with_outcome(&content, category);

    if outcome.truncated {
        info!(
            steps = ?outcome.steps,
            before = content.len(),
            after = outcome.content.len(),
            "truncated chapter"
        );
    }

    if global_json {
        let json = serde_json::to_string_pretty(&outcome)?;
        write_output(args.output.as_deref(), &json)
    } else {
        write_output(args.output.as_deref(), &outcome.content)
    }
}
