//! Truncation to a category's upper bounds.
//!
//! Text is shrunk in three passes, coarsest first, each working on the
//! previous pass's output:
//!
//! 1. **Paragraphs**: keep the first `max` paragraphs, rejoined with a
//!    blank line. Only for categories that bound paragraphs.
//! 2. **Sentences**: keep the first `max` sentence runs, trimmed and joined
//!    by single spaces.
//! 3. **Words**: keep the first `max` whitespace-delimited chunks, rejoined
//!    by single spaces. A chunk holding several words (`well-known`) that
//!    would push the word count past `max` is cut after its last word that
//!    fits. A period is appended if the cut left no terminator at the end.
//!
//! The period in step 3 can close a trailing fragment into one more
//! sentence, so the result may hold `max + 1` sentences. The word bound
//! always holds.
//!
//! Truncation only shrinks. Lower bounds are never enforced; under-length
//! text comes back unchanged apart from trimming.

use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::LengthCategory;
use crate::error::LengthResult;
use crate::text;

/// A truncation pass that removed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TruncationStep {
    /// Excess paragraphs were dropped.
    Paragraphs,
    /// Excess sentences were dropped.
    Sentences,
    /// Excess words were dropped.
    Words,
}

/// Result of truncating a chapter, with the passes that cut something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TruncationOutcome {
    /// The truncated, trimmed text.
    pub content: String,
    /// Whether any pass removed text.
    pub truncated: bool,
    /// Passes that removed text, in the order they ran.
    pub steps: Vec<TruncationStep>,
}

/// Shrink `text` toward the upper bounds of `category`.
///
/// Returns the input trimmed when nothing exceeds the bounds.
pub fn truncate_to_spec(text: &str, category: LengthCategory) -> String {
    truncate_with_outcome(text, category).content
}

/// Truncate against a category given by label or slug.
pub fn truncate_label(text: &str, label: &str) -> LengthResult<String> {
    let category: LengthCategory = label.parse()?;
    Ok(truncate_to_spec(text, category))
}

/// Shrink `text` to fit `category`, reporting which passes cut.
#[tracing::instrument(skip_all, fields(text_len = text.len(), category = %category))]
pub fn truncate_with_outcome(text: &str, category: LengthCategory) -> TruncationOutcome {
    let spec = category.spec();
    let mut steps = Vec::new();
    let mut result = Cow::Borrowed(text);

    if let Some(bounds) = spec.paragraphs
        && let Some(cut) = keep_paragraphs(&result, bounds.max)
    {
        result = Cow::Owned(cut);
        steps.push(TruncationStep::Paragraphs);
    }

    if let Some(cut) = keep_sentences(&result, spec.sentences.max) {
        result = Cow::Owned(cut);
        steps.push(TruncationStep::Sentences);
    }

    if let Some(cut) = keep_words(&result, spec.words.max) {
        result = Cow::Owned(cut);
        steps.push(TruncationStep::Words);
    }

    let content = result.trim().to_string();
    tracing::debug!(
        steps = ?steps,
        before = text.len(),
        after = content.len(),
        "truncated chapter"
    );

    TruncationOutcome {
        truncated: !steps.is_empty(),
        content,
        steps,
    }
}

/// Keep the first `max` paragraphs, or `None` if there are not more.
fn keep_paragraphs(text: &str, max: usize) -> Option<String> {
    let paragraphs: Vec<&str> = text::paragraph_segments(text).collect();
    (paragraphs.len() > max).then(|| paragraphs[..max].join("\n\n"))
}

/// Keep the first `max` sentence runs, or `None` if there are not more.
fn keep_sentences(text: &str, max: usize) -> Option<String> {
    let runs: Vec<&str> = text::sentence_runs(text).collect();
    (runs.len() > max).then(|| {
        runs[..max]
            .iter()
            .map(|run| run.trim())
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Keep the first `max` chunks, or `None` if there are not more words.
fn keep_words(text: &str, max: usize) -> Option<String> {
    if text::count_words(text) <= max {
        return None;
    }

    let mut kept = Vec::new();
    let mut used = 0;
    for chunk in text.split_whitespace().take(max) {
        let words = text::count_words(chunk);
        if used + words <= max {
            kept.push(chunk);
            used += words;
            continue;
        }
        // Cut inside the chunk, right after its last word that fits.
        if used < max
            && let Some(span) = text::word_spans(chunk).nth(max - used - 1)
        {
            kept.push(&chunk[..span.end]);
        }
        break;
    }

    let mut result = kept.join(" ");
    if !result.is_empty() && !result.ends_with(text::is_sentence_terminator) {
        result.push('.');
    }
    Some(result)
}
