//! Ticket analyzer - main orchestrator for the triage module.
//!
//! Coordinates classification and summarization into a single result.
//! The three outputs are independent; none reads another's state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classifier::TicketClassifier;
use super::lexicon::{Category, Priority};
use super::summarizer::Summarizer;

/// Complete analysis for one ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Assigned category label
    pub category: Category,
    /// Assigned priority label
    pub priority: Priority,
    /// Extractive summary of the description
    pub summary: String,
}

/// Main analyzer combining the classifier and the summarizer
pub struct TicketAnalyzer {
    classifier: TicketClassifier,
    summarizer: Summarizer,
}

impl Default for TicketAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketAnalyzer {
    /// Create an analyzer with the default lexicons and segmenter
    pub fn new() -> Self {
        Self {
            classifier: TicketClassifier::new(),
            summarizer: Summarizer::new(),
        }
    }

    /// Create an analyzer from custom components
    pub fn with_components(classifier: TicketClassifier, summarizer: Summarizer) -> Self {
        Self { classifier, summarizer }
    }

    /// The classifier in use
    pub fn classifier(&self) -> &TicketClassifier {
        &self.classifier
    }

    /// The summarizer in use
    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    /// Analyze a ticket: classify it and summarize its description
    pub fn analyze(&self, title: &str, description: &str) -> AnalysisResult {
        let classification = self.classifier.classify(title, description);
        let summary = self.summarizer.summarize(title, description);

        debug!(
            "Analyzed ticket {:?} as {} / {}",
            title, classification.category, classification.priority
        );

        AnalysisResult {
            category: classification.category,
            priority: classification.priority,
            summary,
        }
    }
}
