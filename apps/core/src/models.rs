use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::triage::{AnalysisResult, Category, Classification, ClassificationScores, Priority};

/// Analysis request for a single ticket.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct TicketInput {
    /// Short ticket title.
    #[validate(length(min = 1, message = "Title and description are required"))]
    pub title: String,
    /// Free-form ticket description.
    #[validate(length(min = 1, message = "Title and description are required"))]
    pub description: String,
}

/// Response envelope for the analyze operation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyzeResponse {
    /// Labels and summary for the ticket.
    pub analysis: AnalysisResult,
    /// Processing metadata attached at the operation boundary.
    pub metadata: AnalyzeMetadata,
}

/// Metadata attached to an analyze response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyzeMetadata {
    /// When the analysis completed (UTC).
    pub processed_at: DateTime<Utc>,
    /// Character count of the description.
    pub text_length: usize,
    /// Whitespace-separated word count of the description.
    pub word_count: usize,
}

/// Response envelope for the summarize operation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummarizeResponse {
    /// The generated summary.
    pub summary: String,
    /// Processing metadata attached at the operation boundary.
    pub metadata: SummarizeMetadata,
}

/// Metadata attached to a summarize response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummarizeMetadata {
    /// Character count of the description.
    pub original_length: usize,
    /// Character count of the summary.
    pub summary_length: usize,
    /// Summary length over description length, rounded to two decimals.
    pub compression_ratio: f64,
    /// When the summary was produced (UTC).
    pub processed_at: DateTime<Utc>,
}

/// Response envelope for the classify operation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClassifyResponse {
    /// Assigned labels.
    pub classification: Classification,
    /// Per-label keyword hit counts for both lexicons.
    pub scores: ClassificationScores,
    /// Processing metadata attached at the operation boundary.
    pub metadata: ClassifyMetadata,
}

/// Metadata attached to a classify response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClassifyMetadata {
    /// When the classification completed (UTC).
    pub processed_at: DateTime<Utc>,
    /// Character count of the combined normalized text that was scored.
    pub text_length: usize,
}

/// Label sets known to the engine, for UI population.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LexiconsResponse {
    /// Category labels in declared order.
    pub categories: Vec<Category>,
    /// Priority labels in declared order.
    pub priorities: Vec<Priority>,
}
