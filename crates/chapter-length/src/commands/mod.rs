//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use chapter_length_core::LengthCategory;

pub mod categories;
pub mod check;
pub mod enforce;
pub mod info;
pub mod measure;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod truncate;

/// Read a chapter from `path` (or stdin for `-`) within the size limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), max_bytes, "stdin")
}

/// Read all of `reader` as UTF-8, failing once it passes `max_bytes`.
///
/// The limit is checked on raw bytes before decoding, so a cut inside a
/// multi-byte character reports the size, not an encoding error.
fn read_limited<R: Read>(
    reader: R,
    max_bytes: Option<usize>,
    source: &str,
) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    match max_bytes {
        Some(max) => {
            // One byte past the limit is enough to know it was exceeded.
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(limit)
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {source}"))?;
            if bytes.len() > max {
                anyhow::bail!("input too large: {source} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut bytes)
                .with_context(|| format!("failed to read {source}"))?;
        }
    }
    String::from_utf8(bytes).with_context(|| format!("{source} is not valid UTF-8"))
}

/// The category from `--category`, else the configured default.
pub fn resolve_category(
    flag: Option<LengthCategory>,
    default_category: LengthCategory,
) -> LengthCategory {
    let category = flag.unwrap_or(default_category);
    tracing::debug!(category = %category, from_flag = flag.is_some(), "resolved category");
    category
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Utf8Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path.as_std_path(), format!("{content}\n"))
            .with_context(|| format!("failed to write {path}")),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
