//! Analysis service: the operations consumed by the request-handling layer.
//!
//! Four operations are exposed: analyze, summarize, classify, and lexicon
//! description. The first three validate their input before any scoring
//! runs and attach processing metadata to the engine's result; the last is
//! a constant read.

use chrono::Utc;
use tracing::{debug, info};
use validator::Validate;

use crate::error::AppError;
use crate::models::{
    AnalyzeMetadata, AnalyzeResponse, ClassifyMetadata, ClassifyResponse, LexiconsResponse,
    SummarizeMetadata, SummarizeResponse, TicketInput,
};
use crate::triage::{text, TicketAnalyzer};

/// Service wrapper around the ticket analyzer
pub struct AnalysisService {
    analyzer: TicketAnalyzer,
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisService {
    /// Create a service over the default analyzer
    pub fn new() -> Self {
        Self::with_analyzer(TicketAnalyzer::new())
    }

    /// Create a service over a custom analyzer
    pub fn with_analyzer(analyzer: TicketAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Full analysis: labels and summary plus processing metadata
    pub fn analyze(&self, input: &TicketInput) -> Result<AnalyzeResponse, AppError> {
        input.validate()?;

        let analysis = self.analyzer.analyze(&input.title, &input.description);
        info!(
            "Analyze request processed: {} / {}",
            analysis.category, analysis.priority
        );

        Ok(AnalyzeResponse {
            analysis,
            metadata: AnalyzeMetadata {
                processed_at: Utc::now(),
                text_length: text::char_count(&input.description),
                word_count: input.description.split_whitespace().count(),
            },
        })
    }

    /// Summary only
    pub fn summarize(&self, input: &TicketInput) -> Result<SummarizeResponse, AppError> {
        input.validate()?;

        let summary = self
            .analyzer
            .summarizer()
            .summarize(&input.title, &input.description);
        debug!("Summarize request processed ({} chars)", summary.chars().count());

        let original_length = text::char_count(&input.description);
        let summary_length = text::char_count(&summary);
        let compression_ratio = round2(summary_length as f64 / original_length as f64);

        Ok(SummarizeResponse {
            summary,
            metadata: SummarizeMetadata {
                original_length,
                summary_length,
                compression_ratio,
                processed_at: Utc::now(),
            },
        })
    }

    /// Labels plus the per-label hit counts behind them
    pub fn classify(&self, input: &TicketInput) -> Result<ClassifyResponse, AppError> {
        input.validate()?;

        let (classification, scores) = self
            .analyzer
            .classifier()
            .classify_scored(&input.title, &input.description);
        debug!(
            "Classify request processed: {} / {}",
            classification.category, classification.priority
        );

        let normalized = text::combined_lowercase(&input.title, &input.description);

        Ok(ClassifyResponse {
            classification,
            scores,
            metadata: ClassifyMetadata {
                processed_at: Utc::now(),
                text_length: text::char_count(&normalized),
            },
        })
    }

    /// Label sets for both lexicons, in declared order
    pub fn lexicons(&self) -> LexiconsResponse {
        LexiconsResponse {
            categories: self.analyzer.classifier().category_labels(),
            priorities: self.analyzer.classifier().priority_labels(),
        }
    }
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.333_333), 0.33);
        // 0.125 is exactly representable, so the half-way rounding is stable
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let service = AnalysisService::new();
        let input = TicketInput {
            title: String::new(),
            description: "Something".to_string(),
        };

        let err = service.analyze(&input).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
