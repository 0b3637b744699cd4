//! Categories command: print the specification table.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use chapter_length_core::{Bounds, CHAPTER_LENGTH_SPECS, LengthCategory};

/// Arguments for the `categories` subcommand.
#[derive(Args, Debug, Default)]
pub struct CategoriesArgs {}

#[derive(Serialize)]
struct CategoryRow {
    label: &'static str,
    slug: &'static str,
    sentences: Bounds,
    words: Bounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    paragraphs: Option<Bounds>,
}

fn rows() -> Vec<CategoryRow> {
    CHAPTER_LENGTH_SPECS
        .iter()
        .map(|(category, spec)| CategoryRow {
            label: category.label(),
            slug: category.slug(),
            sentences: spec.sentences,
            words: spec.words,
            paragraphs: spec.paragraphs,
        })
        .collect()
}

/// List every category with its bounds.
#[instrument(name = "cmd_categories", skip_all)]
pub fn cmd_categories(_args: CategoriesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing categories command");
    let rows = rows();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let default = LengthCategory::default();
    for row in &rows {
        let marker = if row.label == default.label() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("{}{marker}", row.label.bold());
        println!("  {}: {}", "slug".dimmed(), row.slug.cyan());
        println!("  {}: {}", "sentences".dimmed(), fmt_bounds(row.sentences));
        println!("  {}: {}", "words".dimmed(), fmt_bounds(row.words));
        if let Some(paragraphs) = row.paragraphs {
            println!("  {}: {}", "paragraphs".dimmed(), fmt_bounds(paragraphs));
        }
    }
    Ok(())
}

fn fmt_bounds(bounds: Bounds) -> String {
    if bounds.min == bounds.max {
        bounds.min.to_string()
    } else {
        format!("{}-{}", bounds.min, bounds.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_category() {
        let rows = rows();
        assert_eq!(rows.len(), LengthCategory::ALL.len());
        assert_eq!(rows[0].slug, "a-sentence");
        assert!(rows[4].paragraphs.is_some());
    }

    #[test]
    fn bounds_formatting() {
        assert_eq!(fmt_bounds(Bounds::new(1, 1)), "1");
        assert_eq!(fmt_bounds(Bounds::new(10, 20)), "10-20");
    }

    #[test]
    fn categories_command_succeeds() {
        assert!(cmd_categories(CategoriesArgs::default(), false).is_ok());
        assert!(cmd_categories(CategoriesArgs::default(), true).is_ok());
    }
}
