//! Chapter-length validation.
//!
//! A chapter fits its category when its sentence, word, and (where its `LengthSpec`
//! bounds them) paragraph counts all lie within the inclusive bounds. The
//! checks are independent and combined with logical AND.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::LengthCategory;
use crate::error::LengthResult;
use crate::spec::Bounds;
use crate::text::{self, TextCounts};

/// Where a count falls relative to its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BoundStatus {
    /// Below the minimum.
    Under,
    /// Within `[min, max]`.
    Within,
    /// Above the maximum.
    Over,
}

/// One measured dimension checked against its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DimensionCheck {
    /// Measured count.
    pub count: usize,
    /// Smallest acceptable count.
    pub min: usize,
    /// Largest acceptable count.
    pub max: usize,
    /// Where `count` falls.
    pub status: BoundStatus,
}

impl DimensionCheck {
    fn new(count: usize, bounds: Bounds) -> Self {
        let status = if count < bounds.min {
            BoundStatus::Under
        } else if count > bounds.max {
            BoundStatus::Over
        } else {
            BoundStatus::Within
        };
        Self {
            count,
            min: bounds.min,
            max: bounds.max,
            status,
        }
    }

    /// Whether the count is within bounds.
    pub fn is_within(&self) -> bool {
        self.status == BoundStatus::Within
    }
}

/// Result of measuring a chapter against its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LengthReport {
    /// Category the text was measured against.
    pub category: LengthCategory,
    /// Raw counts, including paragraphs even when the category leaves them unbounded.
    pub counts: TextCounts,
    /// Sentence check.
    pub sentences: DimensionCheck,
    /// Word check.
    pub words: DimensionCheck,
    /// Paragraph check, present only when the category bounds paragraphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<DimensionCheck>,
    /// Whether every check passes.
    pub pass: bool,
}

impl LengthReport {
    /// Names of the dimensions that fall outside their bounds.
    pub fn violations(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if !self.sentences.is_within() {
            out.push("sentences");
        }
        if !self.words.is_within() {
            out.push("words");
        }
        if self.paragraphs.is_some_and(|p| !p.is_within()) {
            out.push("paragraphs");
        }
        out
    }
}

/// Whether `text` fits every bound of `category`.
#[tracing::instrument(skip_all, fields(text_len = text.len(), category = %category))]
pub fn validate_chapter_length(text: &str, category: LengthCategory) -> bool {
    let spec = category.spec();
    let sentences_ok = spec.sentences.contains(text::count_sentences(text));
    let words_ok = spec.words.contains(text::count_words(text));
    let paragraphs_ok = spec
        .paragraphs
        .is_none_or(|bounds| bounds.contains(text::count_paragraphs(text)));

    let fits = sentences_ok && words_ok && paragraphs_ok;
    tracing::debug!(sentences_ok, words_ok, paragraphs_ok, fits, "validated chapter length");
    fits
}

/// Validate against a category given by label or slug.
pub fn validate_label(text: &str, label: &str) -> LengthResult<bool> {
    let category: LengthCategory = label.parse()?;
    Ok(validate_chapter_length(text, category))
}

/// Measure `text` against `category`, reporting each dimension.
#[tracing::instrument(skip_all, fields(text_len = text.len(), category = %category))]
pub fn measure_chapter(text: &str, category: LengthCategory) -> LengthReport {
    let spec = category.spec();
    let counts = TextCounts::of(text);

    let sentences = DimensionCheck::new(counts.sentences, spec.sentences);
    let words = DimensionCheck::new(counts.words, spec.words);
    let paragraphs = spec
        .paragraphs
        .map(|bounds| DimensionCheck::new(counts.paragraphs, bounds));

    let pass = sentences.is_within()
        && words.is_within()
        && paragraphs.is_none_or(|p| p.is_within());

    LengthReport {
        category,
        counts,
        sentences,
        words,
        paragraphs,
        pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LengthError;

    const FEW_PARAGRAPHS: &str = "The ship left the harbor at dawn with twelve sailors aboard. \
        The captain watched the gray water roll past the bow. Gulls followed the wake for an hour. \
        Nobody spoke while the town shrank behind them. The cook lit the stove below deck. \
        Smoke curled out of the narrow chimney and drifted west.\n\n\
        By noon the wind had turned against them. The first mate ordered the sails trimmed. \
        Two boys climbed the rigging with knives in their teeth. The captain checked the chart \
        again and frowned at the pencil marks. Rain began to fall in thin cold lines. \
        The crew pulled on oilskins and kept working. Somewhere ahead a bell was ringing \
        across the waves. The captain said it was the old reef buoy. They would need to pass \
        it before dark or anchor for the night. The boys sang a low song to keep their hands \
        moving. Far off the lighthouse blinked twice and went dark.";

    #[test]
    fn a_sentence_accepts_one_medium_sentence() {
        assert!(validate_chapter_length(
            "This is a valid sentence with fifteen words in total.",
            LengthCategory::Sentence
        ));
    }

    #[test]
    fn a_sentence_rejects_two_sentences() {
        assert!(!validate_chapter_length(
            "First sentence. Second sentence.",
            LengthCategory::Sentence
        ));
    }

    #[test]
    fn a_sentence_rejects_too_few_words() {
        assert!(!validate_chapter_length("Short.", LengthCategory::Sentence));
    }

    #[test]
    fn a_sentence_rejects_too_many_words() {
        assert!(!validate_chapter_length(
            "This is a very long sentence with way too many words that exceeds the twenty word limit set for this category.",
            LengthCategory::Sentence
        ));
    }

    #[test]
    fn few_sentences_needs_twenty_words() {
        // Three sentences but only fifteen words.
        let short = "First sentence with some words. Second sentence with more words. \
                     Third sentence completes the requirement.";
        assert!(!validate_chapter_length(short, LengthCategory::FewSentences));

        let longer = "First sentence with some extra words in it. Second sentence with even more \
                      words here. Third sentence completes the requirement nicely.";
        assert!(validate_chapter_length(longer, LengthCategory::FewSentences));

        assert!(!validate_chapter_length(
            "Just one sentence.",
            LengthCategory::FewSentences
        ));
    }

    #[test]
    fn few_paragraphs_requires_paragraph_bounds() {
        let report = measure_chapter(FEW_PARAGRAPHS, LengthCategory::FewParagraphs);
        assert_eq!(report.counts.paragraphs, 2);
        assert!(report.pass, "{report:?}");
        assert!(validate_chapter_length(
            FEW_PARAGRAPHS,
            LengthCategory::FewParagraphs
        ));

        let single = FEW_PARAGRAPHS.replace("\n\n", " ");
        let report = measure_chapter(&single, LengthCategory::FewParagraphs);
        assert_eq!(report.counts.paragraphs, 1);
        assert_eq!(report.violations(), vec!["paragraphs"]);
        assert!(!validate_chapter_length(
            &single,
            LengthCategory::FewParagraphs
        ));
    }

    #[test]
    fn paragraphs_ignored_for_single_paragraph_categories() {
        let text = "One short line here.\n\nAnother short line with words.";
        let report = measure_chapter(text, LengthCategory::FewSentences);
        assert!(report.paragraphs.is_none());
        assert_eq!(report.counts.paragraphs, 2);
    }

    #[test]
    fn empty_text_fails_every_category() {
        for category in LengthCategory::ALL {
            assert!(!validate_chapter_length("", category), "{category}");
        }
    }

    #[test]
    fn report_agrees_with_validator() {
        let samples = [
            "",
            "Short.",
            "This is a valid sentence with fifteen words in total.",
            FEW_PARAGRAPHS,
            "no terminators but plenty of words to count here for sure",
        ];
        for text in samples {
            for category in LengthCategory::ALL {
                assert_eq!(
                    measure_chapter(text, category).pass,
                    validate_chapter_length(text, category),
                    "{category}: {text:?}"
                );
            }
        }
    }

    #[test]
    fn report_statuses() {
        let report = measure_chapter("Short.", LengthCategory::Sentence);
        assert_eq!(report.sentences.status, BoundStatus::Within);
        assert_eq!(report.words.status, BoundStatus::Under);
        assert_eq!(report.violations(), vec!["words"]);

        let report = measure_chapter("One. Two. Three.", LengthCategory::Sentence);
        assert_eq!(report.sentences.status, BoundStatus::Over);
    }

    #[test]
    fn report_serializes_labels_and_statuses() {
        let report = measure_chapter("Short.", LengthCategory::Sentence);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["category"], "A sentence");
        assert_eq!(json["words"]["status"], "under");
        assert!(json.get("paragraphs").is_none());
        assert_eq!(json["pass"], false);
    }

    #[test]
    fn validate_label_parses_category() {
        assert_eq!(validate_label("Short.", "A sentence"), Ok(false));
        assert!(matches!(
            validate_label("Short.", "A haiku"),
            Err(LengthError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn validation_does_not_mutate_input() {
        let text = String::from("Hello there friend.");
        let before = text.clone();
        let _ = validate_chapter_length(&text, LengthCategory::Sentence);
        assert_eq!(text, before);
    }
}
