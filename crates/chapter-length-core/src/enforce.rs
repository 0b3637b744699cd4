//! Validate-then-truncate hand-off for freshly generated chapters.
//!
//! A generated chapter is accepted as-is when it fits its category.
//! Otherwise it is truncated; text that is still out of bounds afterwards
//! (too short, typically) is flagged for regeneration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::LengthCategory;
use crate::truncate::{TruncationStep, truncate_with_outcome};
use crate::validate::{LengthReport, measure_chapter, validate_chapter_length};

/// What [`enforce_chapter_length`] did to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementAction {
    /// The content already fit and was returned untouched.
    Accepted,
    /// Truncation removed text.
    Truncated,
    /// The content did not fit but there was nothing to cut.
    Unchanged,
}

/// Outcome of enforcing a category on generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Enforcement {
    /// Category that was enforced.
    pub category: LengthCategory,
    /// What happened to the content.
    pub action: EnforcementAction,
    /// Final content.
    pub content: String,
    /// Truncation passes that cut text.
    pub steps: Vec<TruncationStep>,
    /// Byte length of the content before enforcement.
    pub original_len: usize,
    /// Measurement of the final content.
    pub report: LengthReport,
}

impl Enforcement {
    /// Whether the final content still misses its category.
    pub const fn needs_regeneration(&self) -> bool {
        !self.report.pass
    }
}

/// Enforce `category` on `content`.
#[tracing::instrument(skip_all, fields(text_len = content.len(), category = %category))]
pub fn enforce_chapter_length(content: &str, category: LengthCategory) -> Enforcement {
    if validate_chapter_length(content, category) {
        return Enforcement {
            category,
            action: EnforcementAction::Accepted,
            content: content.to_string(),
            steps: Vec::new(),
            original_len: content.len(),
            report: measure_chapter(content, category),
        };
    }

    tracing::info!(
        category = %category,
        "chapter content does not fit length spec, truncating"
    );
    let outcome = truncate_with_outcome(content, category);
    tracing::info!(
        before = content.len(),
        after = outcome.content.len(),
        "truncated chapter content"
    );

    let report = measure_chapter(&outcome.content, category);
    if !report.pass {
        tracing::warn!(
            violations = ?report.violations(),
            "chapter still misses its length after truncation"
        );
    }

    Enforcement {
        category,
        action: if outcome.truncated {
            EnforcementAction::Truncated
        } else {
            EnforcementAction::Unchanged
        },
        content: outcome.content,
        steps: outcome.steps,
        original_len: content.len(),
        report,
    }
}
