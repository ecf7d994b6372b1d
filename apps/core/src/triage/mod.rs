//! # Triage Module
//!
//! Deterministic analysis engine for TriageDesk.
//! Classifies and summarizes tickets BEFORE they reach a human agent.
//!
//! ## Components
//! - `lexicon`: label sets and keyword tables compiled into matchers
//! - `classifier`: lexicon-scored category and priority assignment
//! - `summarizer`: extractive summary generation with truncation fallback
//! - `text`: shared normalization helpers
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod classifier;
pub mod lexicon;
pub mod summarizer;
pub mod text;

// Re-export main types for convenience
pub use analyzer::{AnalysisResult, TicketAnalyzer};
pub use classifier::{
    CategoryScores, Classification, ClassificationScores, PriorityScores, TicketClassifier,
};
pub use lexicon::{category_lexicon, priority_lexicon, Category, Lexicon, Priority};
pub use summarizer::{SentenceSegmenter, Summarizer, TerminatorSegmenter};
