//! Extractive summarization.
//!
//! Builds a short summary from the first sentence of the description plus
//! up to two follow-up sentences that mention an importance keyword. Any
//! internal fault is recovered by falling back to a truncated description,
//! so summarization never fails upward.

use tracing::warn;

use super::text;
use crate::error::AppError;

/// Keywords that qualify a follow-up sentence for inclusion
const IMPORTANCE_KEYWORDS: &[&str] = &[
    "error", "problem", "issue", "need", "want", "request", "feature", "bug", "crash",
    "not working", "help", "support",
];

/// Descriptions under this many characters summarize to their first sentence
const SHORT_DESCRIPTION_CHARS: usize = 100;
/// A follow-up sentence is dropped when summary plus sentence reaches this length
const MAX_SUMMARY_CHARS: usize = 200;
/// How many sentences after the first are considered
const ADDITIONAL_SENTENCES: usize = 2;
/// The fallback truncates descriptions longer than this
const FALLBACK_TRUNCATION_THRESHOLD: usize = 150;
/// Characters kept ahead of the ellipsis when the fallback truncates
const FALLBACK_PREFIX_CHARS: usize = 147;

/// Splits a description into candidate sentences.
///
/// Abstracts the segmentation step so alternative segmenters can be used
/// interchangeably.
pub trait SentenceSegmenter: Send + Sync {
    /// Produce trimmed, non-empty sentence fragments in reading order.
    fn segment(&self, text: &str) -> Result<Vec<String>, AppError>;
}

/// Default segmenter splitting on runs of `.`, `!`, `?`
#[derive(Debug, Clone, Default)]
pub struct TerminatorSegmenter;

impl SentenceSegmenter for TerminatorSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, AppError> {
        Ok(text::split_sentences(text))
    }
}

/// Extractive summarizer over a sentence segmenter
pub struct Summarizer {
    segmenter: Box<dyn SentenceSegmenter>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default segmenter
    pub fn new() -> Self {
        Self::with_segmenter(Box::new(TerminatorSegmenter))
    }

    /// Create a summarizer over a custom segmenter
    pub fn with_segmenter(segmenter: Box<dyn SentenceSegmenter>) -> Self {
        Self { segmenter }
    }

    /// Summarize a ticket description.
    ///
    /// Returns the title unchanged when the description segments to nothing.
    /// An internal fault is logged and recovered with a truncated description,
    /// never surfaced to the caller.
    pub fn summarize(&self, title: &str, description: &str) -> String {
        match self.build_summary(title, description) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summary generation failed, using truncated description: {}", e);
                fallback_summary(description)
            }
        }
    }

    fn build_summary(&self, title: &str, description: &str) -> Result<String, AppError> {
        let sentences = self.segmenter.segment(description)?;

        if sentences.is_empty() {
            return Ok(title.to_string());
        }

        if text::char_count(description) < SHORT_DESCRIPTION_CHARS {
            let mut summary = sentences[0].trim().to_string();
            if !text::ends_with_terminator(&summary) {
                summary.push('.');
            }
            return Ok(summary);
        }

        let mut summary = sentences[0].trim().to_string();

        for raw in sentences.iter().skip(1).take(ADDITIONAL_SENTENCES) {
            let sentence = raw.trim();
            if contains_importance_keyword(sentence)
                && text::char_count(&summary) + text::char_count(sentence) < MAX_SUMMARY_CHARS
            {
                summary.push_str(". ");
                summary.push_str(sentence);
            }
        }

        if !text::ends_with_terminator(&summary) {
            summary.push('.');
        }

        Ok(summary)
    }
}

/// Case-insensitive substring check against the importance keywords
fn contains_importance_keyword(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    IMPORTANCE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Last-resort summary: the description itself, truncated when long
fn fallback_summary(description: &str) -> String {
    if text::char_count(description) > FALLBACK_TRUNCATION_THRESHOLD {
        let mut truncated = text::truncate_chars(description, FALLBACK_PREFIX_CHARS);
        truncated.push_str("...");
        truncated
    } else {
        description.to_string()
    }
}
