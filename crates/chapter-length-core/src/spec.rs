//! The chapter-length specification table.
//!
//! Maps each [`LengthCategory`] to inclusive sentence, word, and (for
//! multi-paragraph categories) paragraph bounds. The table is a `static`;
//! nothing can mutate it, and there is no configuration override.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::category::LengthCategory;
use crate::error::LengthResult;

/// Inclusive `[min, max]` bounds on a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Bounds {
    /// Smallest acceptable count.
    pub min: usize,
    /// Largest acceptable count.
    pub max: usize,
}

impl Bounds {
    /// Create bounds. `min` must not exceed `max`.
    pub const fn new(min: usize, max: usize) -> Self {
        assert!(min <= max, "bounds must satisfy min <= max");
        Self { min, max }
    }

    /// Whether `count` lies within the bounds.
    pub const fn contains(&self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Target bounds for one chapter-length category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LengthSpec {
    /// Sentence-count bounds.
    pub sentences: Bounds,
    /// Word-count bounds.
    pub words: Bounds,
    /// Paragraph-count bounds, only for categories that span paragraphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Bounds>,
}

/// Every category's spec, smallest category first.
pub static CHAPTER_LENGTH_SPECS: [(LengthCategory, LengthSpec); 5] = [
    (
        LengthCategory::Sentence,
        LengthSpec {
            sentences: Bounds::new(1, 1),
            words: Bounds::new(10, 20),
            paragraphs: None,
        },
    ),
    (
        LengthCategory::FewSentences,
        LengthSpec {
            sentences: Bounds::new(2, 4),
            words: Bounds::new(20, 60),
            paragraphs: None,
        },
    ),
    (
        LengthCategory::SmallParagraph,
        LengthSpec {
            sentences: Bounds::new(4, 6),
            words: Bounds::new(60, 100),
            paragraphs: None,
        },
    ),
    (
        LengthCategory::FullParagraph,
        LengthSpec {
            sentences: Bounds::new(6, 10),
            words: Bounds::new(100, 150),
            paragraphs: None,
        },
    ),
    (
        LengthCategory::FewParagraphs,
        LengthSpec {
            sentences: Bounds::new(12, 20),
            words: Bounds::new(150, 300),
            paragraphs: Some(Bounds::new(2, 3)),
        },
    ),
];

impl LengthCategory {
    /// Length bounds for this category.
    pub fn spec(&self) -> &'static LengthSpec {
        // `ALL` and the table share an order; tests pin the correspondence.
        &CHAPTER_LENGTH_SPECS[*self as usize].1
    }
}

/// Look up a spec by label or slug.
pub fn spec_for_label(label: &str) -> LengthResult<&'static LengthSpec> {
    let category: LengthCategory = label.parse()?;
    Ok(category.spec())
}
