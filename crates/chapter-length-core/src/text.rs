//! Text measurement.
//!
//! Chapter lengths are measured in sentences, words, and paragraphs. Each
//! unit has an explicit tokenizer with a fixed character class, so counts do
//! not depend on any regex engine's notion of `\w` or `\s`:
//!
//! - **Sentence terminators**: `.`, `!`, `?`.
//! - **Word characters**: Unicode alphanumerics and `_`.
//! - **Paragraph separators**: a whitespace run holding at least two line feeds.
//!
//! Sentence detection is naive on purpose. Every terminator closes a
//! sentence, so `"Mr. Smith arrived."` is two sentences and `"Wait... no."`
//! is two. Downstream length targets are tuned against these counts.
//!
//! All tokenizers borrow from the input and run in a single pass.

use std::ops::Range;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentence, word, and paragraph counts for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextCounts {
    /// Number of sentence runs.
    pub sentences: usize,
    /// Number of word tokens.
    pub words: usize,
    /// Number of non-empty paragraphs.
    pub paragraphs: usize,
}

impl TextCounts {
    /// Measure all three units of `text`.
    pub fn of(text: &str) -> Self {
        Self {
            sentences: count_sentences(text),
            words: count_words(text),
            paragraphs: count_paragraphs(text),
        }
    }
}

/// Whether `ch` closes a sentence.
pub const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Whether `ch` belongs to a word token.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Count sentence runs in `text`.
///
/// A run is one or more non-terminator characters followed by one or more
/// terminators. `"?!"` after a body closes exactly one sentence, and a
/// trailing fragment with no terminator is not counted.
pub fn count_sentences(text: &str) -> usize {
    sentence_runs(text).count()
}

/// Count word tokens in `text`.
pub fn count_words(text: &str) -> usize {
    word_spans(text).count()
}

/// Count non-empty paragraphs in `text`.
///
/// Text without a blank-line separator is one paragraph, unless it is
/// empty or whitespace-only.
pub fn count_paragraphs(text: &str) -> usize {
    paragraph_segments(text).count()
}

/// Iterate over the sentence runs of `text`, in order.
///
/// Runs are returned untrimmed: a run that follows a space starts with that
/// space. Terminators with no body in front of them are skipped.
pub fn sentence_runs(text: &str) -> impl Iterator<Item = &str> {
    SentenceSpans { text, pos: 0 }.map(move |span| &text[span])
}

/// Iterate over the word tokens of `text`, in order.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    word_spans(text).map(move |span| &text[span])
}

/// Byte ranges of the word tokens of `text`.
pub fn word_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    WordSpans { text, pos: 0 }
}

/// Iterate over the paragraphs of `text`, trimmed, skipping empty ones.
pub fn paragraph_segments(text: &str) -> impl Iterator<Item = &str> {
    ParagraphSegments {
        text,
        pos: 0,
        done: false,
    }
    .map(str::trim)
    .filter(|p| !p.is_empty())
}

struct SentenceSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for SentenceSpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let body_start = self.pos + rest.find(|c: char| !is_sentence_terminator(c))?;
        let Some(body_len) = self.text[body_start..].find(is_sentence_terminator) else {
            // Trailing fragment
            self.pos = self.text.len();
            return None;
        };
        let term_start = body_start + body_len;
        let terms = &self.text[term_start..];
        let end = term_start
            + terms
                .find(|c: char| !is_sentence_terminator(c))
                .unwrap_or(terms.len());
        self.pos = end;
        Some(body_start..end)
    }
}

struct WordSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for WordSpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos + self.text[self.pos..].find(is_word_char)?;
        let tail = &self.text[start..];
        let end = start + tail.find(|c: char| !is_word_char(c)).unwrap_or(tail.len());
        self.pos = end;
        Some(start..end)
    }
}

struct ParagraphSegments<'a> {
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for ParagraphSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rest = &self.text[self.pos..];
        let mut search = 0;
        while let Some(offset) = rest[search..].find(char::is_whitespace) {
            let run_start = search + offset;
            let run_len = rest[run_start..]
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len() - run_start);
            let run = &rest[run_start..run_start + run_len];

            if run.bytes().filter(|&b| b == b'\n').count() >= 2 {
                self.pos += run_start + run_len;
                return Some(&rest[..run_start]);
            }
            search = run_start + run_len;
        }

        self.done = true;
        Some(rest)
    }
}
