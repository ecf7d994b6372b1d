//! Test Module
//!
//! Comprehensive test suite for the TriageDesk analysis engine.
//!
//! ## Test Categories
//! - `classifier_tests`: lexicon scoring, tie-breaking, fallback labels
//! - `summarizer_tests`: sentence selection, length rules, truncation fallback
//! - `api_tests`: operation validation, response shapes, metadata

pub mod classifier_tests;
