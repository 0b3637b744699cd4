//! Chapter-length categories.
//!
//! A category is the qualitative label a reader picks for how long each
//! chapter should be. The set is closed: every variant has exactly one entry
//! in [`CHAPTER_LENGTH_SPECS`](crate::spec::CHAPTER_LENGTH_SPECS).

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LengthError;

/// Target length for a generated chapter.
///
/// Variants are declared in narrative-size order, so `Ord` compares by size.
/// Serialized as the human label (`"A few sentences"`); the kebab-case slug
/// (`few-sentences`) is accepted as an alias.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    JsonSchema,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LengthCategory {
    /// One sentence.
    #[serde(rename = "A sentence", alias = "a-sentence")]
    #[cfg_attr(feature = "clap", value(name = "a-sentence"))]
    Sentence,
    /// Two to four sentences.
    #[serde(rename = "A few sentences", alias = "few-sentences")]
    #[cfg_attr(feature = "clap", value(name = "few-sentences"))]
    FewSentences,
    /// A short paragraph.
    #[serde(rename = "A small paragraph", alias = "small-paragraph")]
    #[cfg_attr(feature = "clap", value(name = "small-paragraph"))]
    SmallParagraph,
    /// A complete paragraph (the default when a story has no preference).
    #[default]
    #[serde(rename = "A full paragraph", alias = "full-paragraph")]
    #[cfg_attr(feature = "clap", value(name = "full-paragraph"))]
    FullParagraph,
    /// Two or three paragraphs.
    #[serde(rename = "A few paragraphs", alias = "few-paragraphs")]
    #[cfg_attr(feature = "clap", value(name = "few-paragraphs"))]
    FewParagraphs,
}

impl LengthCategory {
    /// Every category, smallest first.
    pub const ALL: [Self; 5] = [
        Self::Sentence,
        Self::FewSentences,
        Self::SmallParagraph,
        Self::FullParagraph,
        Self::FewParagraphs,
    ];

    /// The human label used in prompts and stored with a story.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sentence => "A sentence",
            Self::FewSentences => "A few sentences",
            Self::SmallParagraph => "A small paragraph",
            Self::FullParagraph => "A full paragraph",
            Self::FewParagraphs => "A few paragraphs",
        }
    }

    /// The kebab-case slug accepted on the command line.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Sentence => "a-sentence",
            Self::FewSentences => "few-sentences",
            Self::SmallParagraph => "small-paragraph",
            Self::FullParagraph => "full-paragraph",
            Self::FewParagraphs => "few-paragraphs",
        }
    }

    /// Comma-separated list of every label, for error messages.
    pub fn available_labels() -> String {
        Self::ALL
            .iter()
            .map(Self::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthCategory {
    type Err = LengthError;

    /// Parse a label or slug, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted) || c.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LengthError::InvalidCategory {
                label: s.to_string(),
                available: Self::available_labels(),
            })
    }
}
