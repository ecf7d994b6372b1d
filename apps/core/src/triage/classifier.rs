//! Lexicon-scored ticket classification.
//!
//! Assigns category and priority labels by counting word-boundary keyword
//! hits over the combined title and description text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lexicon::{category_lexicon, priority_lexicon, Category, Lexicon, Priority};
use super::text;

/// Labels assigned to one ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Assigned category label
    pub category: Category,
    /// Assigned priority label
    pub priority: Priority,
}

/// Keyword hit counts per category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub bug: usize,
    pub feature: usize,
    pub query: usize,
}

impl CategoryScores {
    fn from_counts(counts: &[(Category, usize)]) -> Self {
        let mut scores = Self { bug: 0, feature: 0, query: 0 };
        for &(label, count) in counts {
            match label {
                Category::Bug => scores.bug = count,
                Category::Feature => scores.feature = count,
                Category::Query => scores.query = count,
            }
        }
        scores
    }
}

/// Keyword hit counts per priority label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityScores {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityScores {
    fn from_counts(counts: &[(Priority, usize)]) -> Self {
        let mut scores = Self { high: 0, medium: 0, low: 0 };
        for &(label, count) in counts {
            match label {
                Priority::High => scores.high = count,
                Priority::Medium => scores.medium = count,
                Priority::Low => scores.low = count,
            }
        }
        scores
    }
}

/// Hit counts for both lexicons, reported for transparency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationScores {
    /// Per-category keyword hits
    pub category: CategoryScores,
    /// Per-priority keyword hits
    pub priority: PriorityScores,
}

/// Lexicon-scored classifier over the category and priority lexicons
pub struct TicketClassifier {
    categories: Lexicon<Category>,
    priorities: Lexicon<Priority>,
}

impl Default for TicketClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketClassifier {
    /// Create a classifier over the default lexicons
    pub fn new() -> Self {
        Self::with_lexicons(category_lexicon().clone(), priority_lexicon().clone())
    }

    /// Create a classifier over custom lexicons
    pub fn with_lexicons(categories: Lexicon<Category>, priorities: Lexicon<Priority>) -> Self {
        Self { categories, priorities }
    }

    /// Category labels in declared order
    pub fn category_labels(&self) -> Vec<Category> {
        self.categories.labels()
    }

    /// Priority labels in declared order
    pub fn priority_labels(&self) -> Vec<Priority> {
        self.priorities.labels()
    }

    /// Assign category and priority labels to a ticket.
    ///
    /// The two lexicons are scored independently over the same combined
    /// text; neither result influences the other.
    pub fn classify(&self, title: &str, description: &str) -> Classification {
        let text = text::combined_lowercase(title, description);

        let classification = Classification {
            category: self.categories.classify(&text),
            priority: self.priorities.classify(&text),
        };

        debug!(
            "Classified ticket as {} / {}",
            classification.category, classification.priority
        );

        classification
    }

    /// Assign labels and report the per-label hit counts behind them
    pub fn classify_scored(&self, title: &str, description: &str) -> (Classification, ClassificationScores) {
        let text = text::combined_lowercase(title, description);

        let category_counts = self.categories.score(&text);
        let priority_counts = self.priorities.score(&text);

        let classification = Classification {
            category: self.categories.pick(&category_counts),
            priority: self.priorities.pick(&priority_counts),
        };
        let scores = ClassificationScores {
            category: CategoryScores::from_counts(&category_counts),
            priority: PriorityScores::from_counts(&priority_counts),
        };

        (classification, scores)
    }
}
