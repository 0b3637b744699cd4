//! Chapter-length classification, validation, and truncation.
//!
//! A story picks one of five qualitative chapter lengths, from
//! "A sentence" to "A few paragraphs". Each maps to inclusive sentence,
//! word, and paragraph bounds. This crate measures text against those
//! bounds and deterministically shrinks text that runs long.
//!
//! # Modules
//!
//! - [`text`] - Sentence, word, and paragraph tokenizers
//! - [`category`] - The closed set of chapter-length categories
//! - [`spec`] - The static specification table
//! - [`validate`] - Pass/fail verdicts and per-dimension reports
//! - [`truncate`] - Truncation to a category's upper bounds
//! - [`enforce`] - Validate-then-truncate for generated chapters
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use chapter_length_core::{LengthCategory, truncate_to_spec, validate_chapter_length};
//!
//! let text = "First sentence with many words. Second sentence should be removed.";
//! assert!(!validate_chapter_length(text, LengthCategory::Sentence));
//! assert_eq!(
//!     truncate_to_spec(text, LengthCategory::Sentence),
//!     "First sentence with many words."
//! );
//! ```
#![deny(unsafe_code)]

pub mod category;
pub mod config;
pub mod enforce;
pub mod error;
pub mod spec;
pub mod text;
pub mod truncate;
pub mod validate;

#[cfg(test)]
mod test_support;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use category::LengthCategory;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use enforce::{Enforcement, EnforcementAction, enforce_chapter_length};
pub use error::{ConfigError, ConfigResult, LengthError, LengthResult};
pub use spec::{Bounds, CHAPTER_LENGTH_SPECS, LengthSpec, spec_for_label};
pub use text::{TextCounts, count_paragraphs, count_sentences, count_words};
pub use truncate::{TruncationOutcome, TruncationStep, truncate_to_spec, truncate_with_outcome};
pub use validate::{
    BoundStatus, DimensionCheck, LengthReport, measure_chapter, validate_chapter_length,
};
